//! Row shapes passed between the pipeline stages.
//!
//! Each stage consumes the full output of the previous one: the raw grid is
//! reshaped into [`LongRow`]s, split into [`DayRow`]s, melted into
//! [`SlotRow`]s, classified into [`ClassifiedRow`]s and finally dated into
//! [`ScheduleRecord`]s.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Row-major grid of text cells as extracted from the published table.
///
/// Row 0 is the header (weekday labels); column 0 of every row is a row
/// sequence number. Cells the extractor could not read are `None`.
pub type RawGrid = Vec<Vec<Option<String>>>;

/// Weekday column of the published grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekLabel {
    #[serde(rename = "月")]
    Mon,
    #[serde(rename = "火")]
    Tue,
    #[serde(rename = "水")]
    Wed,
    #[serde(rename = "木")]
    Thu,
    #[serde(rename = "金")]
    Fri,
    #[serde(rename = "土")]
    Sat,
    #[serde(rename = "日")]
    Sun,
}

impl WeekLabel {
    pub const ALL: [WeekLabel; 7] = [
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];

    pub fn symbol(&self) -> char {
        match self {
            Self::Mon => '月',
            Self::Tue => '火',
            Self::Wed => '水',
            Self::Thu => '木',
            Self::Fri => '金',
            Self::Sat => '土',
            Self::Sun => '日',
        }
    }

    /// Resolve a header cell. Blank or absent headers mean Sunday (the
    /// extractor loses the label of the last column); anything else is
    /// matched on its first non-blank character.
    pub fn from_header(cell: Option<&str>) -> Option<Self> {
        let first = match cell.and_then(|s| s.trim().chars().next()) {
            Some(c) => c,
            None => return Some(Self::Sun),
        };
        Self::ALL.into_iter().find(|w| w.symbol() == first)
    }
}

impl From<chrono::Weekday> for WeekLabel {
    fn from(d: chrono::Weekday) -> Self {
        Self::ALL[d.num_days_from_monday() as usize]
    }
}

impl fmt::Display for WeekLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Duty category of a schedule record. Serialises as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum DutyType {
    /// All-day duty with no separate night shift (no hours printed for slot 1).
    AllDay,
    /// Fixed 08:30–17:30 daytime duty.
    FixedDay,
    /// Fixed 17:30–08:30 night duty.
    FixedNight,
    /// Split daytime / late-night pattern of one hospital.
    SplitShift,
    /// Evening-only pattern of one clinic.
    EveningOnly,
    /// Synthesised daytime entry filling a handoff gap.
    GapDay,
    /// Pediatric daytime/afternoon duty.
    Pediatric,
    /// Default / general duty.
    General,
    /// Island facility with full-day hours.
    Island,
}

impl DutyType {
    pub fn code(&self) -> u8 {
        match self {
            Self::AllDay => 0,
            Self::FixedDay => 1,
            Self::FixedNight => 2,
            Self::SplitShift => 3,
            Self::EveningOnly => 4,
            Self::GapDay => 6,
            Self::Pediatric => 7,
            Self::General => 8,
            Self::Island => 9,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => Self::AllDay,
            1 => Self::FixedDay,
            2 => Self::FixedNight,
            3 => Self::SplitShift,
            4 => Self::EveningOnly,
            6 => Self::GapDay,
            7 => Self::Pediatric,
            8 => Self::General,
            9 => Self::Island,
            _ => return None,
        })
    }
}

impl From<DutyType> for u8 {
    fn from(t: DutyType) -> u8 {
        t.code()
    }
}

impl TryFrom<u8> for DutyType {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("unknown duty type code {code}"))
    }
}

impl fmt::Display for DutyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One grid cell in long form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongRow {
    /// Value of column 0; only used to keep rows apart.
    pub row_id: String,
    pub week: WeekLabel,
    pub text: String,
}

/// A cell whose leading token is a day of the month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRow {
    pub day: i64,
    pub week: WeekLabel,
    /// Remaining tokens; position `i` is slot `i + 1`.
    pub slots: Vec<String>,
}

/// One duty slot of one day, split into facility name and printed hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRow {
    pub day: i64,
    pub week: WeekLabel,
    /// 1-based position of the slot within the day's cell.
    pub slot: u32,
    pub name: String,
    pub time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRow {
    pub day: i64,
    pub week: WeekLabel,
    pub slot: u32,
    pub name: String,
    pub time: Option<String>,
    pub duty_type: DutyType,
}

impl ClassifiedRow {
    /// Start a row at the default category; the classifier overrides it.
    pub fn from_slot(row: SlotRow) -> Self {
        Self {
            day: row.day,
            week: row.week,
            slot: row.slot,
            name: row.name,
            time: row.time,
            duty_type: DutyType::General,
        }
    }
}

/// Final output: one duty of one facility on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub date: NaiveDate,
    pub name: String,
    #[serde(rename = "type")]
    pub duty_type: DutyType,
    pub time: Option<String>,
}
