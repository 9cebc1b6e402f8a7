//! Typed itinerary model produced by the parser.
//!
//! Every field is plain text taken from the model's response. Absence is
//! represented by an empty string, never by `Option` — a missing section or
//! keyword line degrades to defaults rather than failing the parse, so the
//! all-empty value is a legitimate, renderable result.

use serde::{Deserialize, Serialize};

/// Trip-level summary fields from the `概要` section.
///
/// Each value is the raw remainder of its keyword line, leading punctuation
/// included (`"移動手段: 飛行機"` yields `": 飛行機"`). Renderers trim for
/// display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewInfo {
    /// Remainder of the line containing `移動手段`.
    pub transportation: String,
    /// Remainder of the line containing `宿泊先`.
    pub accommodation: String,
    /// Remainder of the line containing `予算`.
    pub budget: String,
    /// Remainder of the line containing `持ち物`.
    pub items: String,
}

/// One row of the `詳細日程` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Day label as written, e.g. `1日目`. Never empty — rows with an empty
    /// day cell are dropped before reaching this type.
    pub day: String,
    /// Time slot, typically `HH:MM`. Not validated.
    pub time: String,
    /// Short activity description.
    pub action: String,
    /// Longer free-text detail.
    pub detail: String,
    /// Transport used for the slot; `-` means not applicable.
    pub transport: String,
}

/// Supplementary advice fields from the `補足情報` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalInfo {
    /// Remainder of the line containing `グルメスポット`.
    pub food: String,
    /// Remainder of the line containing `気候`.
    pub climate: String,
    /// Remainder of the line containing `注意点`.
    pub notes: String,
}

/// Full parse result for one raw response text.
///
/// `schedule` preserves source row order. Grouping rows into per-day views
/// is a derived, read-only operation — see [`crate::parse::days::group_by_day`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPlan {
    pub overview: OverviewInfo,
    pub schedule: Vec<ScheduleEntry>,
    pub additional: AdditionalInfo,
}

impl ParsedPlan {
    /// True when nothing was recognised: no keyword line matched and the
    /// schedule table produced no rows.
    pub fn is_empty(&self) -> bool {
        self.overview == OverviewInfo::default()
            && self.schedule.is_empty()
            && self.additional == AdditionalInfo::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_is_empty() {
        assert!(ParsedPlan::default().is_empty());
    }

    #[test]
    fn plan_with_schedule_row_is_not_empty() {
        let plan = ParsedPlan {
            schedule: vec![ScheduleEntry {
                day: "1日目".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert!(!plan.is_empty());
    }

    #[test]
    fn plan_round_trips_through_json() {
        let plan = ParsedPlan {
            overview: OverviewInfo {
                transportation: ": 飛行機".into(),
                ..Default::default()
            },
            schedule: vec![ScheduleEntry {
                day: "1日目".into(),
                time: "08:00".into(),
                action: "出発".into(),
                detail: "空港へ".into(),
                transport: "電車".into(),
            }],
            additional: AdditionalInfo::default(),
        };
        let json = serde_json::to_string(&plan).unwrap();
        let back: ParsedPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, back);
    }
}
