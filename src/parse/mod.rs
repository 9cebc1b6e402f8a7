//! Response parsing: raw LLM text → typed itinerary.
//!
//! The model is prompted for a fixed shape — three `#`-delimited sections
//! (overview, schedule table, supplementary notes) — but its output is
//! untrusted text, so parsing is best-effort and total: every input string
//! maps to a [`ParsedPlan`], and malformed pieces degrade to empty fields or
//! dropped rows instead of errors. [`ParseWarning`]s carry the diagnostics
//! for callers that want them.
//!
//! ## Passes
//!
//! ```text
//! text ──▶ split on '#' ──▶ classify label ──▶ per-section extractor
//!          (section)        (dispatch table)   (fields | table)
//! ```
//!
//! Sections with unrecognised labels — the appended budget block among them —
//! are skipped. The parser is a pure function: no I/O, no state, safe to run
//! concurrently, and parsing the same text twice yields equal results.

mod days;
mod fields;
mod model;
mod section;
mod table;

pub use days::{group_by_day, DaySchedule, TimeSlot};
pub use model::{AdditionalInfo, OverviewInfo, ParsedPlan, ScheduleEntry};
pub use table::{parse_schedule_row, RowOutcome};

use crate::error::ParseWarning;
use fields::{apply_keyword_table, ADDITIONAL_KEYWORDS, OVERVIEW_KEYWORDS};
use section::{split_sections, SectionKind};

/// Parse raw response text into a [`ParsedPlan`], discarding diagnostics.
///
/// Never fails: text with no recognised sections parses to the all-default
/// plan.
pub fn parse_plan(text: &str) -> ParsedPlan {
    parse_plan_with_warnings(text).0
}

/// Parse raw response text, also returning the warnings the lenient path
/// swallowed (dropped rows, short rows, odd table headers).
pub fn parse_plan_with_warnings(text: &str) -> (ParsedPlan, Vec<ParseWarning>) {
    let mut plan = ParsedPlan::default();
    let mut warnings = Vec::new();

    for section in split_sections(text) {
        match section.kind() {
            Some(SectionKind::Overview) => {
                apply_keyword_table(&section.body, &OVERVIEW_KEYWORDS, &mut plan.overview);
            }
            Some(SectionKind::Schedule) => {
                plan.schedule
                    .extend(table::extract_schedule(&section.body, &mut warnings));
            }
            Some(SectionKind::Additional) => {
                apply_keyword_table(&section.body, &ADDITIONAL_KEYWORDS, &mut plan.additional);
            }
            None => {}
        }
    }

    (plan, warnings)
}
