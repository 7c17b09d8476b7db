//! Normalisation of a monthly emergency-duty grid into schedule records.
//!
//! The grid is reshaped into long form, split into day cells, melted into
//! duty slots, filtered, classified, gap-filled and dated; see [`pipeline::run`].

mod error;

pub mod classify;
pub mod date;
pub mod day_split;
pub mod facilities;
pub mod filter;
pub mod gap_fill;
pub mod normalize;
pub mod pipeline;
pub mod reshape;
pub mod schema;
pub mod slot;
pub mod types;

pub use date::YearMonth;
pub use error::PipelineError;
pub use facilities::FacilityConfig;
pub use pipeline::{run, run_with};
pub use schema::{records_to_batch, schedule_schema};
pub use types::{
    ClassifiedRow, DayRow, DutyType, LongRow, RawGrid, ScheduleRecord, SlotRow, WeekLabel,
};
