//! End-to-end run: raw grid + month → schedule records.

use tracing::info;

use crate::classify::classify;
use crate::date::{YearMonth, resolve_dates};
use crate::day_split::split_days;
use crate::filter::filter_slots;
use crate::gap_fill::fill_gaps;
use crate::reshape::reshape;
use crate::slot::expand_slots;
use crate::{FacilityConfig, PipelineError, RawGrid, ScheduleRecord};

/// Run all stages in order with the built-in facility lists.
pub fn run(grid: &RawGrid, month: YearMonth) -> Result<Vec<ScheduleRecord>, PipelineError> {
    run_with(grid, month, &FacilityConfig::default())
}

/// Run all stages in order. Output is sorted by `(day, slot, type)`.
pub fn run_with(
    grid: &RawGrid,
    month: YearMonth,
    facilities: &FacilityConfig,
) -> Result<Vec<ScheduleRecord>, PipelineError> {
    let cells = reshape(grid)?;
    let days = split_days(&cells);
    let slots = expand_slots(&days);
    let slots = filter_slots(slots, facilities);
    let classified = classify(slots, facilities);
    let filled = fill_gaps(classified, facilities);
    let records = resolve_dates(filled, month)?;

    info!(%month, cells = cells.len(), records = records.len(), "schedule normalised");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DutyType;
    use chrono::NaiveDate;

    const HEADER: [&str; 8] = ["", "月", "火", "水", "木", "金", "土", "日"];

    fn grid(rows: &[[&str; 8]]) -> RawGrid {
        std::iter::once(&HEADER)
            .chain(rows)
            .map(|r| r.iter().map(|c| Some(c.to_string())).collect())
            .collect()
    }

    fn june() -> YearMonth {
        "2024-06".parse().unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn summary(records: &[ScheduleRecord]) -> Vec<(u32, &str, u8, Option<&str>)> {
        use chrono::Datelike;
        records
            .iter()
            .map(|r| {
                (
                    r.date.day(),
                    r.name.as_str(),
                    r.duty_type.code(),
                    r.time.as_deref(),
                )
            })
            .collect()
    }

    #[test]
    fn single_line_scenario() {
        let g = grid(&[[
            "1",
            "1 A病院(08:30～17:30) B病院(17:30～翌08:30)",
            "",
            "",
            "",
            "",
            "",
            "",
        ]]);
        let records = run(&g, june()).unwrap();
        assert_eq!(
            records,
            vec![
                ScheduleRecord {
                    date: date(1),
                    name: "A病院".into(),
                    duty_type: DutyType::FixedDay,
                    time: Some("08:30～17:30".into()),
                },
                ScheduleRecord {
                    date: date(1),
                    name: "B病院".into(),
                    duty_type: DutyType::FixedNight,
                    time: Some("17:30～翌08:30".into()),
                },
            ]
        );
    }

    #[test]
    fn extractor_layout_week() {
        let g = grid(&[[
            "1",
            "3\nA病院\n(8:30~17:30)\nB病院(17:30~翌8:30)",
            "4\nC 医院",
            "",
            "",
            "",
            "8\n県立今治病院(8:30~17:15)(22:30~翌8:30)\n今治セントラルクリニック(17:15~22:30)",
            "9\n医師会市民病院\n大三島中央病院",
        ]]);
        let records = run(&g, june()).unwrap();
        assert_eq!(
            summary(&records),
            vec![
                (3, "A病院", 1, Some("08:30～17:30")),
                (3, "B病院", 2, Some("17:30～翌08:30")),
                (4, "C医院", 0, Some("08:30～翌08:30")),
                (8, "県立今治病院", 3, Some("08:30～17:15 / 22:30～翌08:30")),
                (8, "今治セントラルクリニック", 4, Some("17:15～22:30")),
                (9, "医師会市民病院", 0, Some("08:30～翌08:30")),
                (9, "医師会市民病院", 6, Some("09:00～17:30")),
                (9, "医師会市民病院", 7, Some("09:00～12:00 / 14:00～17:00")),
                (9, "大三島中央病院", 9, Some("09:00～17:00")),
            ]
        );
    }

    #[test]
    fn sunday_dental_dropped_entirely() {
        let g = grid(&[["1", "", "", "", "", "", "", "2 歯科医院(09:00～12:00)"]]);
        assert!(run(&g, june()).unwrap().is_empty());
    }

    #[test]
    fn saturday_dental_kept() {
        let g = grid(&[["1", "", "", "", "", "", "1 歯科医院(09:00～12:00)", ""]]);
        let records = run(&g, june()).unwrap();
        assert_eq!(summary(&records), vec![(1, "歯科医院", 8, Some("09:00～12:00"))]);
    }

    #[test]
    fn legend_rows_are_skipped() {
        let g = grid(&[
            ["1", "10 A病院(08:30～17:30)", "", "", "", "", "", ""],
            ["注", "※受診前に電話で確認してください", "", "", "", "", "", ""],
        ]);
        assert_eq!(run(&g, june()).unwrap().len(), 1);
    }

    #[test]
    fn no_gap_rows_without_island_handoff() {
        let g = grid(&[["1", "", "", "", "", "", "", "9\n医師会市民病院\nB医院"]]);
        let records = run(&g, june()).unwrap();
        assert!(records.iter().all(|r| r.duty_type.code() != 6));
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn idempotent() {
        let g = grid(&[[
            "1",
            "3\nA病院(8:30~17:30)\nB病院(17:30~翌8:30)",
            "4\nみぶ小児科\n片山医院",
            "",
            "",
            "",
            "",
            "9\n医師会市民病院\n大三島中央病院",
        ]]);
        let a = serde_json::to_string(&run(&g, june()).unwrap()).unwrap();
        let b = serde_json::to_string(&run(&g, june()).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn every_output_time_is_padded() {
        let g = grid(&[[
            "1",
            "1\nA(8:30~12:00)\nB",
            "2\nC\nD(17:30~翌8:30)",
            "",
            "",
            "",
            "",
            "",
        ]]);
        for r in run(&g, june()).unwrap() {
            if let Some(t) = &r.time {
                assert_eq!(*t, crate::normalize::pad_eight_thirty(t));
            }
        }
    }

    #[test]
    fn day_beyond_month_fails_whole_run() {
        let g = grid(&[
            ["1", "1 A病院(08:30～17:30)", "", "", "", "", "", ""],
            ["2", "31 B病院(08:30～17:30)", "", "", "", "", "", ""],
        ]);
        assert!(matches!(
            run(&g, june()),
            Err(PipelineError::DateOverflow { day: 31, .. })
        ));
    }

    #[test]
    fn negative_or_huge_day_fails_whole_run() {
        for cell in ["-3 A病院(08:30～17:30)", "99999999999 B病院(08:30～17:30)"] {
            let g = grid(&[
                ["1", "1 A病院(08:30～17:30)", "", "", "", "", "", ""],
                ["2", cell, "", "", "", "", "", ""],
            ]);
            assert!(
                matches!(run(&g, june()), Err(PipelineError::DateOverflow { .. })),
                "{cell} should fail the run"
            );
        }
    }

    #[test]
    fn space_before_hours_stays_with_facility() {
        let g = grid(&[[
            "1",
            "1 A病院 (08:30～17:30) B病院(17:30～翌08:30)",
            "2 C(08:30～12:00) (14:00～17:00)",
            "",
            "",
            "",
            "",
            "",
        ]]);
        let records = run(&g, june()).unwrap();
        assert_eq!(
            summary(&records),
            vec![
                (1, "A病院", 1, Some("08:30～17:30")),
                (1, "B病院", 2, Some("17:30～翌08:30")),
                (2, "C", 8, Some("08:30～12:00 / 14:00～17:00")),
            ]
        );
    }

    #[test]
    fn empty_hours_are_not_all_day() {
        let g = grid(&[["1", "1 A病院()", "", "", "", "", "", ""]]);
        let records = run(&g, june()).unwrap();
        assert_eq!(summary(&records), vec![(1, "A病院", 8, Some(""))]);
    }

    #[test]
    fn slot_tokens_map_one_to_one() {
        let g = grid(&[[
            "1",
            "5\nA(10:00~12:00)(13:00~15:00)\nB(9:00~17:00)\nC",
            "",
            "",
            "",
            "",
            "",
            "",
        ]]);
        let records = run(&g, june()).unwrap();
        assert_eq!(
            summary(&records),
            vec![
                (5, "A", 8, Some("10:00～12:00 / 13:00～15:00")),
                (5, "B", 8, Some("9:00～17:00")),
                (5, "C", 8, None),
            ]
        );
    }

    #[test]
    fn custom_facilities_apply() {
        let g = grid(&[["1", "2\nX\n離島診療所", "", "", "", "", "", ""]]);
        let cfg = FacilityConfig::from_json(r#"{"island": ["離島診療所"]}"#).unwrap();
        let records = run_with(&g, june(), &cfg).unwrap();
        assert_eq!(records[1].duty_type, DutyType::Island);
    }
}
