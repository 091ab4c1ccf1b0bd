//! Calendar event model.
//!
//! # Responsibility
//! - Define the display-only calendar event entity and its category metadata.
//!
//! # Invariants
//! - Events carry no lifecycle beyond construction; edit/delete remain
//!   screen-level stubs.

use crate::model::user::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a calendar event.
pub type EventId = Uuid;

/// Closed category set for calendar events.
///
/// Each category carries fixed display metadata (icon name and color) so the
/// UI renders categories consistently without its own lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Birthday,
    Appointment,
    SchoolEvent,
    FamilyActivity,
    Reminder,
}

impl EventType {
    /// Human-facing category label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Birthday => "Birthday",
            Self::Appointment => "Appointment",
            Self::SchoolEvent => "School Event",
            Self::FamilyActivity => "Family Activity",
            Self::Reminder => "Reminder",
        }
    }

    /// Stable icon asset name for this category.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Birthday => "gift",
            Self::Appointment => "stethoscope",
            Self::SchoolEvent => "backpack",
            Self::FamilyActivity => "people",
            Self::Reminder => "bell",
        }
    }

    /// Display color as an `#RRGGBB` hex string.
    pub fn color_hex(self) -> &'static str {
        match self {
            Self::Birthday => "#E91E63",
            Self::Appointment => "#2196F3",
            Self::SchoolEvent => "#FF9800",
            Self::FamilyActivity => "#4CAF50",
            Self::Reminder => "#9C27B0",
        }
    }

    /// Stable wire code used across the FFI boundary.
    pub fn code(self) -> &'static str {
        match self {
            Self::Birthday => "birthday",
            Self::Appointment => "appointment",
            Self::SchoolEvent => "school_event",
            Self::FamilyActivity => "family_activity",
            Self::Reminder => "reminder",
        }
    }

    /// Parses a wire code back into a category.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "birthday" => Some(Self::Birthday),
            "appointment" => Some(Self::Appointment),
            "school_event" => Some(Self::SchoolEvent),
            "family_activity" => Some(Self::FamilyActivity),
            "reminder" => Some(Self::Reminder),
            _ => None,
        }
    }
}

/// Display-only calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Stable global ID used for detail lookup.
    pub id: EventId,
    /// Event title shown in lists and the detail screen.
    pub title: String,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: EventType,
    /// Event start in Unix epoch milliseconds.
    pub start_epoch_ms: i64,
    /// Optional free-form location string.
    pub location: Option<String>,
    /// Optional longer description.
    pub description: Option<String>,
    /// Participating members, referenced by stable user ID.
    pub participants: Vec<UserId>,
}

impl CalendarEvent {
    /// Creates an event with a generated stable ID and no optional fields.
    pub fn new(title: impl Into<String>, kind: EventType, start_epoch_ms: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            kind,
            start_epoch_ms,
            location: None,
            description: None,
            participants: Vec::new(),
        }
    }

    /// Adds a participant reference. Duplicate IDs are ignored.
    pub fn add_participant(&mut self, user_id: UserId) {
        if !self.participants.contains(&user_id) {
            self.participants.push(user_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CalendarEvent, EventType};
    use uuid::Uuid;

    #[test]
    fn category_metadata_is_stable() {
        assert_eq!(EventType::SchoolEvent.label(), "School Event");
        assert_eq!(EventType::Birthday.icon(), "gift");
        assert_eq!(EventType::Reminder.color_hex(), "#9C27B0");
        assert_eq!(EventType::parse("family_activity"), Some(EventType::FamilyActivity));
        assert_eq!(EventType::parse("holiday"), None);
    }

    #[test]
    fn add_participant_ignores_duplicates() {
        let mut event = CalendarEvent::new("Dentist", EventType::Appointment, 1_700_000_000_000);
        let member = Uuid::new_v4();
        event.add_participant(member);
        event.add_participant(member);
        assert_eq!(event.participants.len(), 1);
    }

    #[test]
    fn event_serializes_kind_as_type() {
        let event = CalendarEvent::new("Picnic", EventType::FamilyActivity, 1_700_000_000_000);
        let json = serde_json::to_value(&event).expect("event should serialize");
        assert_eq!(json["type"], "family_activity");
    }
}
