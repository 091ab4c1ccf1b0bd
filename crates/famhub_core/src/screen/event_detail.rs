//! Event detail view model and intents.
//!
//! # Responsibility
//! - Render one calendar event with category metadata and resolved
//!   participant names.
//! - Surface the detail-screen actions as intents; all of them are
//!   non-functional stubs in this build.

use crate::model::event::CalendarEvent;
use crate::model::user::UserProfile;

/// Fallback name when a participant ID has no matching profile.
const UNKNOWN_MEMBER: &str = "Unknown member";

/// Display model for the event detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetailView {
    pub title: String,
    pub kind_label: String,
    pub icon: String,
    pub color_hex: String,
    pub start_epoch_ms: i64,
    pub location: Option<String>,
    pub description: Option<String>,
    /// Display names in event participant order.
    pub participant_names: Vec<String>,
}

/// Builds the event detail view model.
///
/// # Contract
/// - Pure function of its inputs.
/// - Participant IDs without a profile render as `Unknown member` instead of
///   being dropped.
pub fn build(event: &CalendarEvent, profiles: &[UserProfile]) -> EventDetailView {
    let participant_names = event
        .participants
        .iter()
        .map(|id| {
            profiles
                .iter()
                .find(|profile| profile.id == *id)
                .map(|profile| profile.display_name.clone())
                .unwrap_or_else(|| UNKNOWN_MEMBER.to_string())
        })
        .collect();

    EventDetailView {
        title: event.title.clone(),
        kind_label: event.kind.label().to_string(),
        icon: event.kind.icon().to_string(),
        color_hex: event.kind.color_hex().to_string(),
        start_epoch_ms: event.start_epoch_ms,
        location: event.location.clone(),
        description: event.description.clone(),
        participant_names,
    }
}

/// Actions available on the event detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventIntent {
    Edit,
    Delete,
    Share,
    Directions,
}

impl EventIntent {
    /// Stable wire code used across the FFI boundary.
    pub fn code(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Share => "share",
            Self::Directions => "directions",
        }
    }

    /// Parses a wire code back into an intent.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "edit" => Some(Self::Edit),
            "delete" => Some(Self::Delete),
            "share" => Some(Self::Share),
            "directions" => Some(Self::Directions),
            _ => None,
        }
    }
}

/// Result of dispatching a detail-screen intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentOutcome {
    /// Whether the intent performed a real action.
    pub handled: bool,
    /// Message shown to the user.
    pub message: &'static str,
}

/// Dispatches a detail-screen intent.
///
/// All four intents are placeholder stubs: nothing is mutated and `handled`
/// is always `false`.
pub fn dispatch_intent(intent: EventIntent) -> IntentOutcome {
    let message = match intent {
        EventIntent::Edit => "Editing events is not available yet.",
        EventIntent::Delete => "Deleting events is not available yet.",
        EventIntent::Share => "Sharing events is not available yet.",
        EventIntent::Directions => "Directions are not available yet.",
    };
    IntentOutcome {
        handled: false,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::{build, dispatch_intent, EventIntent, UNKNOWN_MEMBER};
    use crate::model::event::{CalendarEvent, EventType};
    use crate::model::user::UserProfile;
    use uuid::Uuid;

    #[test]
    fn participants_resolve_to_display_names() {
        let mara = UserProfile::new("Mara Harper");
        let june = UserProfile::new("June Harper");
        let mut event = CalendarEvent::new("Dentist", EventType::Appointment, 1_000);
        event.add_participant(june.id);
        event.add_participant(mara.id);

        let view = build(&event, &[mara, june]);
        assert_eq!(view.participant_names, ["June Harper", "Mara Harper"]);
        assert_eq!(view.kind_label, "Appointment");
    }

    #[test]
    fn unknown_participant_renders_fallback() {
        let mut event = CalendarEvent::new("Hike", EventType::FamilyActivity, 1_000);
        event.add_participant(Uuid::new_v4());
        let view = build(&event, &[]);
        assert_eq!(view.participant_names, [UNKNOWN_MEMBER]);
    }

    #[test]
    fn all_intents_are_stubs() {
        for intent in [
            EventIntent::Edit,
            EventIntent::Delete,
            EventIntent::Share,
            EventIntent::Directions,
        ] {
            let outcome = dispatch_intent(intent);
            assert!(!outcome.handled);
            assert!(!outcome.message.is_empty());
        }
    }

    #[test]
    fn intent_codes_round_trip() {
        for intent in [
            EventIntent::Edit,
            EventIntent::Delete,
            EventIntent::Share,
            EventIntent::Directions,
        ] {
            assert_eq!(EventIntent::parse(intent.code()), Some(intent));
        }
        assert_eq!(EventIntent::parse("archive"), None);
    }
}
