//! Schedule-table extraction from the `詳細日程` section body.
//!
//! The prompt asks for a GFM pipe table. Models mostly comply, so the
//! extractor is positional: keep the lines containing `|`, drop the first
//! two (header and separator) regardless of content, then read five cells
//! per row. The positional drop is compatibility behaviour — a response with
//! a missing or malformed header still parses, it just sacrifices its first
//! two table lines. Shape checks on the dropped lines surface as warnings,
//! never as errors.

use crate::error::ParseWarning;

use super::model::ScheduleEntry;

/// Cell delimiter inside table rows.
pub(crate) const CELL_DELIMITER: char = '|';

/// Number of cells a well-formed row carries: day, time, action, detail,
/// transport.
pub(crate) const ROW_CELLS: usize = 5;

/// Outcome of reading a single table line.
///
/// Callers wanting strict handling can reject on [`RowOutcome::Short`];
/// the default pipeline accepts it and records a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// All five cells present (extra cells beyond five are ignored).
    Complete(ScheduleEntry),
    /// Fewer than five cells; the missing trailing fields are empty strings.
    Short {
        entry: ScheduleEntry,
        /// How many cells the row actually had.
        cells: usize,
    },
    /// The day cell is empty after trimming; the row is dropped.
    MissingDay,
}

/// Read one pipe-delimited line into a [`RowOutcome`].
///
/// Splitting on `|` leaves artifact fragments before the leading and after
/// the trailing pipe; both are discarded. The surviving cells are trimmed
/// and mapped positionally.
pub fn parse_schedule_row(line: &str) -> RowOutcome {
    let parts: Vec<&str> = line.split(CELL_DELIMITER).collect();
    let cells: Vec<&str> = if parts.len() >= 2 {
        parts[1..parts.len() - 1].iter().map(|c| c.trim()).collect()
    } else {
        Vec::new()
    };

    let day = cells.first().copied().unwrap_or("");
    if day.is_empty() {
        return RowOutcome::MissingDay;
    }

    let cell = |i: usize| cells.get(i).copied().unwrap_or("").to_string();
    let entry = ScheduleEntry {
        day: day.to_string(),
        time: cell(1),
        action: cell(2),
        detail: cell(3),
        transport: cell(4),
    };

    if cells.len() >= ROW_CELLS {
        RowOutcome::Complete(entry)
    } else {
        let count = cells.len();
        RowOutcome::Short {
            entry,
            cells: count,
        }
    }
}

/// Extract schedule entries from a section body.
///
/// `lines` is the blank-free body of the schedule section. Non-table prose
/// lines are discarded; the first two table lines are dropped positionally.
pub(crate) fn extract_schedule(
    lines: &[&str],
    warnings: &mut Vec<ParseWarning>,
) -> Vec<ScheduleEntry> {
    let rows: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| line.contains(CELL_DELIMITER))
        .collect();

    if let Some(header) = rows.first() {
        if !looks_like_header(header) {
            warnings.push(ParseWarning::HeaderShape {
                found: snippet(header),
            });
        }
    }
    if let Some(separator) = rows.get(1) {
        if !is_separator_row(separator) {
            warnings.push(ParseWarning::SeparatorShape {
                found: snippet(separator),
            });
        }
    }

    let mut entries = Vec::with_capacity(rows.len().saturating_sub(2));
    for line in rows.iter().skip(2) {
        match parse_schedule_row(line) {
            RowOutcome::Complete(entry) => entries.push(entry),
            RowOutcome::Short { entry, cells } => {
                warnings.push(ParseWarning::ShortRow {
                    cells,
                    found: snippet(line),
                });
                entries.push(entry);
            }
            RowOutcome::MissingDay => {
                warnings.push(ParseWarning::EmptyDay {
                    found: snippet(line),
                });
            }
        }
    }
    entries
}

/// A pipe-bracketed row that is not a separator.
fn looks_like_header(line: &str) -> bool {
    is_table_row(line) && !is_separator_row(line)
}

fn is_table_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with(CELL_DELIMITER) && trimmed.ends_with(CELL_DELIMITER) && trimmed.len() > 2
}

/// A separator row contains only `|`, `-`, `:`, and whitespace.
fn is_separator_row(line: &str) -> bool {
    let trimmed = line.trim();
    if !trimmed.starts_with(CELL_DELIMITER) {
        return false;
    }
    trimmed
        .chars()
        .all(|c| c == CELL_DELIMITER || c == '-' || c == ':' || c == ' ')
}

/// Bounded excerpt of an offending line for warning payloads.
fn snippet(line: &str) -> String {
    const MAX_CHARS: usize = 60;
    if line.chars().count() <= MAX_CHARS {
        line.to_string()
    } else {
        let mut s: String = line.chars().take(MAX_CHARS).collect();
        s.push('\u{2026}');
        s
    }
}
