//! Grid → long form: one row per (grid row, weekday column).

use tracing::debug;

use crate::normalize::normalize_cell;
use crate::{LongRow, PipelineError, RawGrid, WeekLabel};

/// Reshape the raw grid into [`LongRow`]s, row-major.
///
/// Row 0 supplies the weekday of each column; column 0 is the row id.
/// Cells that are absent or empty after normalisation are dropped.
pub fn reshape(grid: &RawGrid) -> Result<Vec<LongRow>, PipelineError> {
    let (header, body) = grid
        .split_first()
        .filter(|(header, _)| !header.is_empty())
        .ok_or(PipelineError::EmptyGrid)?;
    let width = header.len();

    let weeks = header
        .iter()
        .enumerate()
        .skip(1)
        .map(|(column, cell)| {
            WeekLabel::from_header(cell.as_deref()).ok_or_else(|| {
                PipelineError::UnknownWeekLabel {
                    column,
                    label: cell.clone().unwrap_or_default(),
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut out = Vec::with_capacity(body.len() * weeks.len());
    for (i, row) in body.iter().enumerate() {
        if row.len() != width {
            return Err(PipelineError::RaggedRow {
                row: i + 1,
                expected: width,
                found: row.len(),
            });
        }
        let row_id = row[0].clone().unwrap_or_default();
        for (cell, &week) in row[1..].iter().zip(&weeks) {
            if let Some(text) = cell.as_deref().and_then(normalize_cell) {
                out.push(LongRow {
                    row_id: row_id.clone(),
                    week,
                    text,
                });
            }
        }
    }

    debug!(rows = body.len(), cells = out.len(), "reshaped grid");
    Ok(out)
}
