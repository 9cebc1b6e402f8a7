//! Per-day schedule views derived from a parsed plan.
//!
//! Grouping is a read-only projection over [`ParsedPlan::schedule`]: the
//! parse result itself keeps the flat source order, and rendering asks for
//! one bucket per day of the trip.

use serde::{Deserialize, Serialize};

use super::model::ParsedPlan;

/// One time slot of a day's schedule; a [`super::ScheduleEntry`] minus the
/// day label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: String,
    pub action: String,
    pub detail: String,
    pub transport: String,
}

/// Schedule rows for a single day of the trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// 1-based day index.
    pub day: u32,
    /// Slots in source order.
    pub slots: Vec<TimeSlot>,
}

impl DaySchedule {
    /// Display label matching the table's day markers, e.g. `3日目`.
    pub fn label(&self) -> String {
        day_marker(self.day)
    }
}

/// The day-label marker rows carry in the table, e.g. `2日目`.
pub(crate) fn day_marker(day: u32) -> String {
    format!("{day}日目")
}

/// Build one [`DaySchedule`] per day index `1..=duration`.
///
/// A row belongs to day `i` when its day label contains the `i日目` marker.
/// Rows with an empty day label ride along with every day that has at least
/// one labelled row — a permissive rule kept for compatibility with existing
/// responses, where such rows are table lines whose day cell went missing.
/// Rows whose label matches no requested day appear in no bucket.
pub fn group_by_day(plan: &ParsedPlan, duration: u32) -> Vec<DaySchedule> {
    (1..=duration)
        .map(|day| {
            let marker = day_marker(day);
            let day_has_rows = plan.schedule.iter().any(|e| e.day.contains(&marker));
            let slots = plan
                .schedule
                .iter()
                .filter(|e| e.day.contains(&marker) || (e.day.is_empty() && day_has_rows))
                .map(|e| TimeSlot {
                    time: e.time.clone(),
                    action: e.action.clone(),
                    detail: e.detail.clone(),
                    transport: e.transport.clone(),
                })
                .collect();
            DaySchedule { day, slots }
        })
        .collect()
}
