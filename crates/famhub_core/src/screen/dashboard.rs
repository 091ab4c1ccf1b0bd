//! Family dashboard view model.
//!
//! # Responsibility
//! - Render the family name, the member's role line and upcoming event
//!   summaries.

use crate::model::event::CalendarEvent;
use crate::model::family::{Family, Membership};

/// One event row on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSummary {
    /// Stable event ID in string form, used for detail lookup.
    pub event_id: String,
    pub title: String,
    pub kind_label: String,
    pub icon: String,
    pub color_hex: String,
    pub start_epoch_ms: i64,
}

/// Display model for the family dashboard screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub family_name: String,
    /// Rendered as e.g. `Your role: Adult`.
    pub role_line: String,
    /// Upcoming events sorted by start time ascending.
    pub events: Vec<EventSummary>,
}

/// Builds the dashboard view model.
///
/// # Contract
/// - Pure function of its inputs.
/// - Event order in the output is by `start_epoch_ms` ascending, ties kept
///   in input order.
pub fn build(family: &Family, membership: &Membership, events: &[CalendarEvent]) -> DashboardView {
    let mut summaries: Vec<EventSummary> = events
        .iter()
        .map(|event| EventSummary {
            event_id: event.id.to_string(),
            title: event.title.clone(),
            kind_label: event.kind.label().to_string(),
            icon: event.kind.icon().to_string(),
            color_hex: event.kind.color_hex().to_string(),
            start_epoch_ms: event.start_epoch_ms,
        })
        .collect();
    summaries.sort_by_key(|summary| summary.start_epoch_ms);

    DashboardView {
        family_name: family.name.clone(),
        role_line: format!("Your role: {}", membership.role.label()),
        events: summaries,
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::model::event::{CalendarEvent, EventType};
    use crate::model::family::{Family, FamilyRole, Membership};
    use uuid::Uuid;

    #[test]
    fn dashboard_shows_name_and_role_line() {
        let family = Family::new("The Harper Family", "HEARTH");
        let membership = Membership::new(Uuid::new_v4(), family.id, FamilyRole::Adult);
        let view = build(&family, &membership, &[]);
        assert_eq!(view.family_name, "The Harper Family");
        assert_eq!(view.role_line, "Your role: Adult");
        assert!(view.events.is_empty());
    }

    #[test]
    fn events_are_sorted_by_start_time() {
        let family = Family::new("The Harper Family", "HEARTH");
        let membership = Membership::new(Uuid::new_v4(), family.id, FamilyRole::Admin);
        let later = CalendarEvent::new("Hike", EventType::FamilyActivity, 2_000);
        let sooner = CalendarEvent::new("Dentist", EventType::Appointment, 1_000);
        let view = build(&family, &membership, &[later, sooner]);
        assert_eq!(view.events[0].title, "Dentist");
        assert_eq!(view.events[1].title, "Hike");
    }
}
