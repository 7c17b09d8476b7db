//! Day rows → one row per duty slot, with facility name and hours split apart.

use tracing::debug;

use crate::{DayRow, SlotRow};

/// Separator written between the sub-ranges of a split duty.
pub const RANGE_JOINER: &str = " / ";

/// Melt every day row into one [`SlotRow`] per slot token, sorted by
/// `(day, slot)`. Ties keep grid order.
pub fn expand_slots(rows: &[DayRow]) -> Vec<SlotRow> {
    let mut out: Vec<SlotRow> = rows
        .iter()
        .flat_map(|row| {
            row.slots
                .iter()
                .zip(1u32..)
                .filter(|(token, _)| !token.is_empty())
                .map(move |(token, slot)| {
                    let (name, time) = split_slot(token);
                    SlotRow {
                        day: row.day,
                        week: row.week,
                        slot,
                        name,
                        time,
                    }
                })
        })
        .collect();

    out.sort_by_key(|r| (r.day, r.slot));
    debug!(days = rows.len(), slots = out.len(), "expanded slots");
    out
}

/// Split a slot token into facility name and printed hours.
///
/// The split happens at the first `(` that does not directly follow a `)`,
/// so `"A(08:30～12:00)(14:00～17:00)"` yields `"A"` and
/// `"08:30～12:00 / 14:00～17:00"`. A token without any `(` yields `None`;
/// empty parentheses yield an empty string.
pub fn split_slot(token: &str) -> (String, Option<String>) {
    let mut prev = None;
    let split = token.char_indices().find_map(|(i, c)| {
        let hit = c == '(' && prev != Some(')');
        prev = Some(c);
        hit.then_some(i)
    });

    match split {
        None => (token.to_string(), None),
        Some(i) => {
            let name = token[..i].to_string();
            let hours = token[i..]
                .trim_matches(|c| c == '(' || c == ')')
                .replace(")(", RANGE_JOINER);
            (name, Some(hours))
        }
    }
}
