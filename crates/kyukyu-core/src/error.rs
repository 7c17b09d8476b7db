use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("grid has no header row or no columns")]
    EmptyGrid,

    #[error("grid row {row} has {found} cells, header has {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("header cell {column} is not a weekday symbol: {label:?}")]
    UnknownWeekLabel { column: usize, label: String },

    #[error("invalid year-month context: {0:?}")]
    InvalidMonth(String),

    #[error("day {day} does not exist in {year:04}-{month:02}")]
    DateOverflow { day: i64, year: i32, month: u32 },

    #[error("invalid facility configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}
