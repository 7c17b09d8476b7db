//! Text normalisation for grid cells and printed hours.
//!
//! Cells come out of the table extractor with two tilde glyphs, stray
//! spaces inside facility names and line breaks that push the hours of a
//! facility onto their own line. After normalisation a cell is a sequence
//! of whitespace-separated tokens: the day number followed by one token
//! per duty slot, e.g. `"1\nA病院(8:30～17:30)\nB病院"`.
//!
//! # Separators
//!
//! - Multi-line cells (what the extractor produces) separate tokens with
//!   line breaks, so every other whitespace character is removed.
//! - Single-line cells separate tokens with whitespace runs, which are
//!   collapsed to one space. Whitespace inside or directly before
//!   parentheses is removed so printed hours stay attached to their facility.

/// Canonical range separator used in printed hours.
pub const TILDE: char = '～';

/// Normalise one grid cell. Returns `None` when nothing is left.
pub fn normalize_cell(raw: &str) -> Option<String> {
    let s: String = raw
        .chars()
        .map(|c| if c == '~' { TILDE } else { c })
        .collect();

    let s = if s.contains('\n') {
        s.chars()
            .filter(|c| *c == '\n' || !c.is_whitespace())
            .collect::<String>()
    } else {
        squeeze_single_line(&s)
    };

    let s = join_hours_line(s.trim());
    if s.is_empty() { None } else { Some(s) }
}

/// Collapse whitespace runs outside parentheses, drop whitespace inside them.
fn squeeze_single_line(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut depth = 0usize;
    let mut pending_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if depth == 0 {
                pending_space = true;
            }
            continue;
        }
        if pending_space && ch != '(' {
            out.push(' ');
        }
        pending_space = false;
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
        out.push(ch);
    }
    out
}

/// Remove line breaks directly preceding an opening parenthesis, so hours
/// printed on their own line rejoin the facility name above them.
fn join_hours_line(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut breaks = 0usize;
    for ch in s.chars() {
        if ch == '\n' {
            breaks += 1;
            continue;
        }
        if ch != '(' {
            out.extend(std::iter::repeat_n('\n', breaks));
        }
        breaks = 0;
        out.push(ch);
    }
    out.extend(std::iter::repeat_n('\n', breaks));
    out
}

/// Zero-pad every `8:30` whose hour is a single digit.
///
/// `"8:30～翌8:30"` becomes `"08:30～翌08:30"`; `"08:30"` and `"18:30"` are
/// left alone.
pub fn pad_eight_thirty(s: &str) -> String {
    const NEEDLE: &str = "8:30";
    let mut out = String::with_capacity(s.len() + 4);
    let mut rest = s;
    let mut prev: Option<char> = None;
    while let Some(pos) = rest.find(NEEDLE) {
        let (head, tail) = rest.split_at(pos);
        out.push_str(head);
        let before = head.chars().next_back().or(prev);
        if !before.is_some_and(|c| c.is_ascii_digit()) {
            out.push('0');
        }
        out.push_str(NEEDLE);
        prev = Some('0');
        rest = &tail[NEEDLE.len()..];
    }
    out.push_str(rest);
    out
}
