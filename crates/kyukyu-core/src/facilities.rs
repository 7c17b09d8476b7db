//! Facility lists that drive filtering, classification and gap filling.
//!
//! The lists change when the municipality reorganises its duty rota, so they
//! live here as data rather than in the rules that consult them. A JSON file
//! may override any subset of fields; missing fields keep the built-in value.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::PipelineError;

/// Facilities on the islands, whose duty covers the whole day.
pub const ISLAND: &[&str] = &[
    "しのざき整形外科",
    "はかた外科胃腸科",
    "喜多嶋診療所",
    "斎藤クリニック",
    "大三島中央病院",
    "片山医院",
    "有津むらかみクリニック",
];

/// Facilities that only see children outside their night slot.
pub const PEDIATRICS: &[&str] = &[
    "あおい小児科",
    "丹こどもクリニック",
    "まつうらバンビクリニック",
    "みぶ小児科",
    "医師会市民病院",
    "県立今治病院",
    "済生会今治病院",
];

/// Grid entries that are not duty facilities (blood drive, bus stop).
pub const NON_HOSPITAL: &[&str] = &["献血", "市民会館前"];

pub const DENTAL_MARKER: &str = "歯科";
pub const SPLIT_SHIFT_FACILITY: &str = "県立今治病院";
pub const EVENING_ONLY_FACILITY: &str = "今治セントラルクリニック";
pub const GAP_FACILITY: &str = "医師会市民病院";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacilityConfig {
    pub island: BTreeSet<String>,
    pub pediatrics: BTreeSet<String>,
    /// Exact names dropped from the schedule on any day.
    pub non_hospital: BTreeSet<String>,
    /// Substring marking dental clinics, dropped on Sundays.
    pub dental_marker: String,
    /// Hospital with the 08:30–17:15 / 22:30–08:30 daytime pattern.
    pub split_shift: String,
    /// Clinic with the 17:15–22:30 evening pattern.
    pub evening_only: String,
    /// Hospital whose Sunday daytime hours vanish on island handoff days.
    pub gap_facility: String,
}

impl Default for FacilityConfig {
    fn default() -> Self {
        Self {
            island: to_set(ISLAND),
            pediatrics: to_set(PEDIATRICS),
            non_hospital: to_set(NON_HOSPITAL),
            dental_marker: DENTAL_MARKER.to_string(),
            split_shift: SPLIT_SHIFT_FACILITY.to_string(),
            evening_only: EVENING_ONLY_FACILITY.to_string(),
            gap_facility: GAP_FACILITY.to_string(),
        }
    }
}

impl FacilityConfig {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_island(&self, name: &str) -> bool {
        self.island.contains(name)
    }

    pub fn is_pediatric(&self, name: &str) -> bool {
        self.pediatrics.contains(name)
    }
}

fn to_set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}
