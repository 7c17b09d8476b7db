//! Year-month context and conversion of day offsets into calendar dates.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};

use crate::{ClassifiedRow, PipelineError, ScheduleRecord};

/// The month a duty grid was published for. Only constructible through
/// [`YearMonth::new`] or parsing, so the first day always exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, PipelineError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or_else(|| PipelineError::InvalidMonth(format!("{year:04}-{month:02}")))
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Derive the month from a publication URL whose last path segment is
    /// `YYYYMM`, e.g. `https://example.jp/kouhou/koho/202406/`.
    pub fn from_url_path(url: &str) -> Result<Self, PipelineError> {
        let without_query = url.split(['?', '#']).next().unwrap_or(url);
        let path = match without_query.split_once("://") {
            Some((_, rest)) => rest.split_once('/').map(|(_, p)| p).unwrap_or(""),
            None => without_query,
        };
        let segment = path
            .trim_matches('/')
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| PipelineError::InvalidMonth(url.to_string()))?;
        segment
            .parse()
            .map_err(|_| PipelineError::InvalidMonth(url.to_string()))
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self
            .first
            .checked_add_months(chrono::Months::new(1))
            .unwrap_or(NaiveDate::MAX);
        next.signed_duration_since(self.first).num_days() as u32
    }

    /// Calendar date of `day` (1-based) in this month. Anything outside
    /// `1..=days_in_month()` is a [`PipelineError::DateOverflow`].
    pub fn date_of(&self, day: i64) -> Result<NaiveDate, PipelineError> {
        let overflow = || PipelineError::DateOverflow {
            day,
            year: self.year(),
            month: self.month(),
        };
        if !(1..=i64::from(self.days_in_month())).contains(&day) {
            return Err(overflow());
        }
        self.first
            .checked_add_days(Days::new(day.unsigned_abs() - 1))
            .ok_or_else(overflow)
    }
}

impl FromStr for YearMonth {
    type Err = PipelineError;

    /// Accepts `YYYY-MM`, `YYYY/MM` and `YYYYMM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PipelineError::InvalidMonth(s.to_string());
        let t = s.trim();
        let (y, m) = match t.split_once(['-', '/']) {
            Some(parts) => parts,
            None if t.len() == 6 && t.is_ascii() => t.split_at(4),
            None => return Err(invalid()),
        };
        if y.len() != 4 || m.is_empty() || m.len() > 2 {
            return Err(invalid());
        }
        if !y.chars().chain(m.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let year: i32 = y.parse().map_err(|_| invalid())?;
        let month: u32 = m.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// Attach calendar dates and project to the output columns. Any day outside
/// the month fails the whole batch.
pub fn resolve_dates(
    rows: Vec<ClassifiedRow>,
    month: YearMonth,
) -> Result<Vec<ScheduleRecord>, PipelineError> {
    rows.into_iter()
        .map(|r| {
            Ok(ScheduleRecord {
                date: month.date_of(r.day)?,
                name: r.name,
                duty_type: r.duty_type,
                time: r.time,
            })
        })
        .collect()
}
