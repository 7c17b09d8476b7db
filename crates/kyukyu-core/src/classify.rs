//! Duty-category classification.
//!
//! Classification is an ordered list of override rules. Each rule whose
//! predicate holds overwrites the category and/or hours left by the rules
//! before it, so the order of [`RULES`] is part of the contract: later rules
//! win. The fixed-schedule rules at the end match on zero-padded hours and
//! only fire on rows still at [`DutyType::General`].

use tracing::debug;

use crate::normalize::pad_eight_thirty;
use crate::{ClassifiedRow, DutyType, FacilityConfig, SlotRow};

pub const PEDIATRIC_HOURS: &str = "09:00～12:00 / 14:00～17:00";
pub const ISLAND_HOURS: &str = "09:00～17:00";
/// Written unpadded; the padding rule turns it into `08:30～翌08:30`.
pub const ALL_DAY_HOURS: &str = "8:30～翌8:30";
pub const FIXED_DAY_HOURS: &str = "08:30～17:30";
pub const FIXED_NIGHT_HOURS: &str = "17:30～翌08:30";
pub const SPLIT_SHIFT_HOURS: &str = "08:30～17:15 / 22:30～翌08:30";
pub const EVENING_ONLY_HOURS: &str = "17:15～22:30";

/// Marks hours that run past midnight.
pub const NEXT_DAY_MARKER: &str = "翌";

/// One step of the classification: when `applies` holds, `effect` runs.
pub struct Rule {
    pub label: &'static str,
    pub applies: fn(&ClassifiedRow, &FacilityConfig) -> bool,
    pub effect: fn(&mut ClassifiedRow, &FacilityConfig),
}

pub const RULES: &[Rule] = &[
    Rule {
        label: "default",
        applies: |_, _| true,
        effect: |r, _| r.duty_type = DutyType::General,
    },
    Rule {
        label: "island facility",
        applies: |r, f| f.is_island(&r.name),
        effect: |r, _| r.duty_type = DutyType::Island,
    },
    Rule {
        label: "pediatric daytime",
        applies: |r, f| {
            r.slot > 1
                && f.is_pediatric(&r.name)
                && !r
                    .time
                    .as_deref()
                    .is_some_and(|t| t.contains(NEXT_DAY_MARKER))
        },
        effect: |r, _| r.duty_type = DutyType::Pediatric,
    },
    Rule {
        label: "pediatric hours",
        applies: |r, _| r.time.is_none() && r.duty_type == DutyType::Pediatric,
        effect: |r, _| r.time = Some(PEDIATRIC_HOURS.to_string()),
    },
    Rule {
        label: "island hours",
        applies: |r, _| r.time.is_none() && r.duty_type == DutyType::Island,
        effect: |r, _| r.time = Some(ISLAND_HOURS.to_string()),
    },
    Rule {
        label: "all-day fallback",
        applies: |r, _| r.time.is_none() && r.slot == 1,
        effect: |r, _| r.duty_type = DutyType::AllDay,
    },
    Rule {
        label: "all-day hours",
        applies: |r, _| r.duty_type == DutyType::AllDay,
        effect: |r, _| r.time = Some(ALL_DAY_HOURS.to_string()),
    },
    Rule {
        label: "pad 8:30",
        applies: |r, _| r.time.is_some(),
        effect: |r, _| r.time = r.time.as_deref().map(pad_eight_thirty),
    },
    Rule {
        label: "fixed daytime",
        applies: |r, _| {
            r.slot == 1 && r.duty_type == DutyType::General && has_time(r, FIXED_DAY_HOURS)
        },
        effect: |r, _| r.duty_type = DutyType::FixedDay,
    },
    Rule {
        label: "fixed night",
        applies: |r, _| {
            r.slot == 2 && r.duty_type == DutyType::General && has_time(r, FIXED_NIGHT_HOURS)
        },
        effect: |r, _| r.duty_type = DutyType::FixedNight,
    },
    Rule {
        label: "split shift",
        applies: |r, f| {
            r.slot == 1
                && r.duty_type == DutyType::General
                && has_time(r, SPLIT_SHIFT_HOURS)
                && r.name == f.split_shift
        },
        effect: |r, _| r.duty_type = DutyType::SplitShift,
    },
    Rule {
        label: "evening only",
        applies: |r, f| {
            r.slot == 2
                && r.duty_type == DutyType::General
                && has_time(r, EVENING_ONLY_HOURS)
                && r.name == f.evening_only
        },
        effect: |r, _| r.duty_type = DutyType::EveningOnly,
    },
];

fn has_time(row: &ClassifiedRow, hours: &str) -> bool {
    row.time.as_deref() == Some(hours)
}

/// Run `rules` over one row, strictly in order.
pub fn apply_rules(row: &mut ClassifiedRow, rules: &[Rule], facilities: &FacilityConfig) {
    for rule in rules {
        if (rule.applies)(row, facilities) {
            (rule.effect)(row, facilities);
        }
    }
}

/// Classify every slot with [`RULES`].
pub fn classify(rows: Vec<SlotRow>, facilities: &FacilityConfig) -> Vec<ClassifiedRow> {
    let out: Vec<ClassifiedRow> = rows
        .into_iter()
        .map(|slot| {
            let mut row = ClassifiedRow::from_slot(slot);
            apply_rules(&mut row, RULES, facilities);
            row
        })
        .collect();
    debug!(rows = out.len(), "classified slots");
    out
}
