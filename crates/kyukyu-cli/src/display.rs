//! Rendering of schedule record batches.
//!
//! `table` prints the batch as-is; `days` groups rows into one card per date.

use std::fmt::Write;

use anyhow::Context;
use arrow::array::{Array, Date32Array, StringArray, UInt8Array};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use kyukyu_core::WeekLabel;

pub const TITLE: &str = "広報いまばり 救急病院";

/// Render the batch as a bordered table under the title.
pub fn format_table(batch: &RecordBatch) -> anyhow::Result<String> {
    let table = pretty_format_batches(std::slice::from_ref(batch)).context("formatting table")?;
    Ok(format!("{TITLE}\n\n{table}\n"))
}

/// Render one card per date, rows in batch order.
pub fn format_days(batch: &RecordBatch) -> anyhow::Result<String> {
    let dates = column::<Date32Array>(batch, "date")?;
    let names = column::<StringArray>(batch, "name")?;
    let types = column::<UInt8Array>(batch, "type")?;
    let times = column::<StringArray>(batch, "time")?;

    let mut out = format!("{TITLE}\n");
    let mut current = None;
    for i in 0..batch.num_rows() {
        let date = dates
            .value_as_date(i)
            .with_context(|| format!("date out of range at row {i}"))?;
        if current != Some(date) {
            let week = WeekLabel::from(chrono::Datelike::weekday(&date));
            writeln!(out, "\n=== {date} ({week}) ===")?;
            current = Some(date);
        }
        let time = col_str(times, i).unwrap_or("-");
        writeln!(out, "  [{}] {:<24} {}", types.value(i), names.value(i), time)?;
    }
    if current.is_none() {
        writeln!(out, "\n(no duties)")?;
    }
    Ok(out)
}

fn column<'a, T: 'static>(batch: &'a RecordBatch, name: &str) -> anyhow::Result<&'a T> {
    batch
        .column_by_name(name)
        .with_context(|| format!("missing '{name}' column"))?
        .as_any()
        .downcast_ref::<T>()
        .with_context(|| format!("unexpected type for '{name}' column"))
}

fn col_str(col: &StringArray, i: usize) -> Option<&str> {
    if col.is_null(i) {
        return None;
    }
    Some(col.value(i))
}
