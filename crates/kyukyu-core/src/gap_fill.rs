//! Synthesis of the daytime rows the grid omits on island handoff Sundays.
//!
//! When an island facility takes over the Sunday night slot, the grid prints
//! the gap facility in slot 1 without hours, so it classifies as all-day.
//! Its daytime and pediatric duties for that day are restored here.

use std::collections::BTreeSet;

use tracing::warn;

use crate::classify::PEDIATRIC_HOURS;
use crate::{ClassifiedRow, DutyType, FacilityConfig, WeekLabel};

pub const GAP_DAY_HOURS: &str = "09:00～17:30";

/// Append the missing rows and re-sort by `(day, slot, type)`.
pub fn fill_gaps(mut rows: Vec<ClassifiedRow>, facilities: &FacilityConfig) -> Vec<ClassifiedRow> {
    let gap_days = handoff_days(&rows, facilities);

    for &day in &gap_days {
        for (duty_type, hours) in [
            (DutyType::GapDay, GAP_DAY_HOURS),
            (DutyType::Pediatric, PEDIATRIC_HOURS),
        ] {
            rows.push(ClassifiedRow {
                day,
                week: WeekLabel::Sun,
                slot: 1,
                name: facilities.gap_facility.clone(),
                time: Some(hours.to_string()),
                duty_type,
            });
        }
    }
    if !gap_days.is_empty() {
        warn!(
            facility = %facilities.gap_facility,
            days = ?gap_days,
            "synthesised daytime rows for island handoff"
        );
    }

    rows.sort_by_key(|r| (r.day, r.slot, r.duty_type.code()));
    rows
}

/// Days where the gap facility is all-day in Sunday slot 1 and an island
/// facility holds slot 2.
pub fn handoff_days(rows: &[ClassifiedRow], facilities: &FacilityConfig) -> BTreeSet<i64> {
    let all_day: BTreeSet<i64> = rows
        .iter()
        .filter(|r| {
            r.week == WeekLabel::Sun
                && r.slot == 1
                && r.name == facilities.gap_facility
                && r.duty_type == DutyType::AllDay
        })
        .map(|r| r.day)
        .collect();

    rows.iter()
        .filter(|r| all_day.contains(&r.day) && r.slot == 2 && r.duty_type == DutyType::Island)
        .map(|r| r.day)
        .collect()
}
