//! Output types for itinerary generation.

use serde::{Deserialize, Serialize};

use crate::error::ParseWarning;
use crate::parse::ParsedPlan;

/// Result of a successful generation.
///
/// `raw` is the verbatim (sanitised) model text — the `content` payload a
/// hosting endpoint would return; `plan` is the typed parse of the same
/// text. Both views are kept because rendering uses `plan` while export and
/// re-parsing use `raw`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanOutput {
    /// Sanitised raw response text (base plan, plus the appended budget
    /// block when a budget was supplied).
    pub raw: String,
    /// Typed parse of `raw`.
    pub plan: ParsedPlan,
    /// Deviations the lenient parse absorbed. Empty for a clean response.
    pub warnings: Vec<ParseWarning>,
    /// Timing and token accounting.
    pub stats: PlanStats,
}

/// Counters for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStats {
    /// Completions issued (1, or 2 with a budget follow-up).
    pub llm_calls: usize,
    /// Prompt tokens across all calls.
    pub total_input_tokens: u64,
    /// Completion tokens across all calls.
    pub total_output_tokens: u64,
    /// Retries across all calls.
    pub retries: u32,
    /// Wall-clock time spent inside completion calls.
    pub llm_duration_ms: u64,
    /// End-to-end wall-clock time for the generation.
    pub total_duration_ms: u64,
}
