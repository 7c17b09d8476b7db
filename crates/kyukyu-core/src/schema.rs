//! Arrow schema for schedule records.

use std::sync::Arc;

use arrow::array::{ArrayRef, Date32Array, StringArray, UInt8Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;

use crate::{PipelineError, ScheduleRecord};

/// Column order of the published schedule: date, name, type, time.
pub fn schedule_schema() -> Schema {
    Schema::new(vec![
        Field::new("date", DataType::Date32, false),
        Field::new("name", DataType::Utf8, false),
        Field::new("type", DataType::UInt8, false),
        Field::new("time", DataType::Utf8, true),
    ])
}

/// Build a single RecordBatch from schedule records, preserving order.
pub fn records_to_batch(records: &[ScheduleRecord]) -> Result<RecordBatch, PipelineError> {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default();

    let dates = Date32Array::from_iter_values(
        records
            .iter()
            .map(|r| r.date.signed_duration_since(epoch).num_days() as i32),
    );
    let names = StringArray::from_iter_values(records.iter().map(|r| r.name.as_str()));
    let types = UInt8Array::from_iter_values(records.iter().map(|r| r.duty_type.code()));
    let times: StringArray = records.iter().map(|r| r.time.as_deref()).collect();

    let columns: Vec<ArrayRef> = vec![
        Arc::new(dates),
        Arc::new(names),
        Arc::new(types),
        Arc::new(times),
    ];
    Ok(RecordBatch::try_new(Arc::new(schedule_schema()), columns)?)
}
