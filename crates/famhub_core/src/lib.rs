//! Core app logic for FamHub, a family-organizer mobile app.
//! This crate is the single source of truth for flow, session and screen
//! selection behavior; the UI renders what this crate decides.

pub mod app;
pub mod bootstrap;
pub mod flow;
pub mod logging;
pub mod model;
pub mod router;
pub mod screen;
pub mod service;
pub mod session;

pub use app::{App, AppError, AppResult};
pub use bootstrap::{configured_min_splash_ms, SplashGate, DEFAULT_MIN_SPLASH_MS};
pub use flow::FlowState;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{CalendarEvent, EventId, EventType};
pub use model::family::{Family, FamilyId, FamilyRole, Membership, MembershipId};
pub use model::user::{UserId, UserProfile};
pub use router::{route, PlaceholderReason, Screen};
pub use screen::event_detail::{EventIntent, IntentOutcome};
pub use service::auth::{AuthError, AuthService};
pub use service::directory::{DirectoryError, FamilyDirectory};
pub use service::mock::{
    sample_household, MockAuthService, MockFamilyDirectory, SampleHousehold, SAMPLE_INVITE_CODE,
};
pub use session::{SessionContext, SessionError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
