//! Long form → day rows: leading token is the day of the month.

use tracing::debug;

use crate::{DayRow, LongRow};

/// Split each cell on whitespace and keep the ones that start with a day.
///
/// Cells whose first token is not an integer are legend or header text
/// embedded in the grid and are dropped.
pub fn split_days(rows: &[LongRow]) -> Vec<DayRow> {
    let out: Vec<DayRow> = rows
        .iter()
        .filter_map(|row| {
            let mut tokens = row.text.split_whitespace();
            let day = tokens.next()?.parse::<i64>().ok()?;
            Some(DayRow {
                day,
                week: row.week,
                slots: tokens.map(str::to_string).collect(),
            })
        })
        .collect();

    debug!(
        cells = rows.len(),
        days = out.len(),
        dropped = rows.len() - out.len(),
        "split day cells"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WeekLabel;

    fn long(text: &str) -> LongRow {
        LongRow {
            row_id: "1".into(),
            week: WeekLabel::Mon,
            text: text.into(),
        }
    }

    #[test]
    fn leading_day_and_slots() {
        let rows = split_days(&[long("12\nA病院(8:30～17:30)\nB医院")]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].day, 12);
        assert_eq!(rows[0].slots, vec!["A病院(8:30～17:30)", "B医院"]);
    }

    #[test]
    fn non_numeric_leader_dropped() {
        let rows = split_days(&[long("※歯科は午前のみ"), long("3 A病院"), long("日曜 B")]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].day, 3);
    }

    #[test]
    fn out_of_range_integers_are_kept() {
        let rows = split_days(&[long("-3 A病院"), long("99999999999 B")]);
        let days: Vec<i64> = rows.iter().map(|r| r.day).collect();
        assert_eq!(days, vec![-3, 99_999_999_999]);
    }

    #[test]
    fn day_without_slots_is_kept() {
        let rows = split_days(&[long("30")]);
        assert_eq!(rows[0].slots, Vec::<String>::new());
    }

    #[test]
    fn order_preserved() {
        let rows = split_days(&[long("9 X"), long("2 Y")]);
        let days: Vec<i64> = rows.iter().map(|r| r.day).collect();
        assert_eq!(days, vec![9, 2]);
    }
}
