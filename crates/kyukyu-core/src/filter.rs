//! Drop grid entries that are not hospital duties.

use tracing::debug;

use crate::{FacilityConfig, SlotRow, WeekLabel};

/// Remove Sunday dental clinics and the non-hospital labels.
pub fn filter_slots(rows: Vec<SlotRow>, facilities: &FacilityConfig) -> Vec<SlotRow> {
    let before = rows.len();
    let out: Vec<SlotRow> = rows
        .into_iter()
        .filter(|r| !is_excluded(r, facilities))
        .collect();
    debug!(kept = out.len(), dropped = before - out.len(), "filtered slots");
    out
}

fn is_excluded(row: &SlotRow, facilities: &FacilityConfig) -> bool {
    let sunday_dental =
        row.week == WeekLabel::Sun && row.name.contains(facilities.dental_marker.as_str());
    let non_hospital = facilities.non_hospital.contains(&row.name);
    sunday_dental || non_hospital
}
