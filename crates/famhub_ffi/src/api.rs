//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the app controller to Dart via FRB as sync, envelope-returning
//!   functions.
//! - Own the one process-global app handle; the UI thread is the only
//!   caller.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Failures come back as envelope fields, never as exceptions.

use famhub_core::screen::{legal, onboarding, placeholder};
use famhub_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    App, EventIntent, FamilyRole, MockAuthService, MockFamilyDirectory, Screen, SplashGate,
};
use log::info;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;
use uuid::Uuid;

type CoreApp = App<MockAuthService, MockFamilyDirectory>;

static APP: OnceLock<Mutex<CoreApp>> = OnceLock::new();

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Splash/boot status envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootStatus {
    /// Whether the minimum splash duration has elapsed.
    pub ready: bool,
    /// Milliseconds until the splash gate opens; `0` once ready.
    pub remaining_ms: u64,
}

/// Current-screen envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenResponse {
    /// Stable screen code (`onboarding`, `family_dashboard`, `placeholder`, ...).
    pub screen: String,
    /// Placeholder explanation, set only when `screen == "placeholder"`.
    pub placeholder_message: Option<String>,
    /// Current session error message, if any.
    pub error_message: Option<String>,
}

/// One event row in the dashboard envelope, sorted by start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub event_id: String,
    pub title: String,
    pub kind_label: String,
    pub icon: String,
    pub color_hex: String,
    pub start_epoch_ms: i64,
}

/// Dashboard envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardResponse {
    pub ok: bool,
    pub message: String,
    pub family_name: String,
    pub role_line: String,
    pub events: Vec<EventRow>,
}

impl DashboardResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            family_name: String::new(),
            role_line: String::new(),
            events: Vec::new(),
        }
    }
}

/// Event detail envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetailResponse {
    pub ok: bool,
    pub message: String,
    pub title: String,
    pub kind_label: String,
    pub icon: String,
    pub color_hex: String,
    pub start_epoch_ms: i64,
    pub location: Option<String>,
    pub description: Option<String>,
    pub participant_names: Vec<String>,
}

impl EventDetailResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            title: String::new(),
            kind_label: String::new(),
            icon: String::new(),
            color_hex: String::new(),
            start_epoch_ms: 0,
            location: None,
            description: None,
            participant_names: Vec::new(),
        }
    }
}

/// One onboarding page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingPageItem {
    pub title: String,
    pub body: String,
    pub icon: String,
}

/// Static privacy policy envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyResponse {
    pub title: String,
    pub sections: Vec<PolicySectionItem>,
}

/// One titled privacy-policy section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySectionItem {
    pub heading: String,
    pub body: String,
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking, never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking, never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Idempotent for the same `level + log_dir`; reconfiguration attempts
///   return an error message.
/// - Never panics; returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Creates the process-global app handle behind the splash gate.
///
/// # FFI contract
/// - First call wins; later calls are no-ops reporting success.
/// - `min_splash_ms = None` uses the configured default.
#[flutter_rust_bridge::frb(sync)]
pub fn app_init(min_splash_ms: Option<u64>) -> ActionResponse {
    let already = APP.get().is_some();
    APP.get_or_init(|| {
        let splash = match min_splash_ms {
            Some(ms) => SplashGate::new(Duration::from_millis(ms)),
            None => SplashGate::with_configured_minimum(),
        };
        Mutex::new(App::new(
            MockAuthService::new(),
            MockFamilyDirectory::new(),
            splash,
        ))
    });
    if already {
        ActionResponse::success("App already initialized.")
    } else {
        info!("event=app_init module=ffi status=ok");
        ActionResponse::success("App initialized.")
    }
}

/// Reports splash readiness for the polling UI.
#[flutter_rust_bridge::frb(sync)]
pub fn splash_status() -> BootStatus {
    with_app(|app| BootStatus {
        ready: app.is_ready(),
        remaining_ms: app.splash_remaining_ms(),
    })
    .unwrap_or(BootStatus {
        ready: false,
        remaining_ms: 0,
    })
}

/// Returns the screen the router selects right now.
#[flutter_rust_bridge::frb(sync)]
pub fn current_screen() -> ScreenResponse {
    with_app(|app| {
        let screen = app.current_screen();
        let placeholder_message = match screen {
            Screen::Placeholder(reason) => Some(placeholder::build(reason).detail.to_string()),
            _ => None,
        };
        ScreenResponse {
            screen: screen.code().to_string(),
            placeholder_message,
            error_message: app.session().error_message().map(str::to_string),
        }
    })
    .unwrap_or_else(|err| ScreenResponse {
        screen: "placeholder".to_string(),
        placeholder_message: Some(err),
        error_message: None,
    })
}

/// Signs in with a display name.
#[flutter_rust_bridge::frb(sync)]
pub fn sign_in(display_name: String) -> ActionResponse {
    act(|app| app.sign_in(&display_name).map(|()| "Signed in."))
}

/// Moves from onboarding to family selection.
#[flutter_rust_bridge::frb(sync)]
pub fn complete_onboarding() -> ActionResponse {
    act(|app| app.complete_onboarding().map(|()| "Onboarding completed."))
}

/// Opens the create-family form.
#[flutter_rust_bridge::frb(sync)]
pub fn begin_create_family() -> ActionResponse {
    act(|app| app.begin_create_family().map(|()| "Create-family form opened."))
}

/// Opens the join-family form.
#[flutter_rust_bridge::frb(sync)]
pub fn begin_join_family() -> ActionResponse {
    act(|app| app.begin_join_family().map(|()| "Join-family form opened."))
}

/// Creates a family and moves to role selection.
#[flutter_rust_bridge::frb(sync)]
pub fn submit_create_family(name: String) -> ActionResponse {
    act(|app| app.submit_create_family(&name).map(|()| "Family created."))
}

/// Joins a family by invite code and moves to role selection.
#[flutter_rust_bridge::frb(sync)]
pub fn submit_join_family(invite_code: String) -> ActionResponse {
    act(|app| app.submit_join_family(&invite_code).map(|()| "Family joined."))
}

/// Confirms the member's role and enters the dashboard.
#[flutter_rust_bridge::frb(sync)]
pub fn confirm_role(role: String) -> ActionResponse {
    let Some(role) = FamilyRole::parse(&role) else {
        return ActionResponse::failure(format!("unknown role `{role}`"));
    };
    act(|app| app.confirm_role(role).map(|()| "Role confirmed."))
}

/// Clears family and membership; the flow state stays put.
#[flutter_rust_bridge::frb(sync)]
pub fn leave_family() -> ActionResponse {
    match with_app(|app| app.leave_family()) {
        Ok(()) => ActionResponse::success("Left family."),
        Err(err) => ActionResponse::failure(err),
    }
}

/// Signs out and resets session and flow.
#[flutter_rust_bridge::frb(sync)]
pub fn sign_out() -> ActionResponse {
    act(|app| app.sign_out().map(|()| "Signed out."))
}

/// Dismisses the current error message.
#[flutter_rust_bridge::frb(sync)]
pub fn clear_error() -> ActionResponse {
    match with_app(|app| app.clear_error()) {
        Ok(()) => ActionResponse::success("Error cleared."),
        Err(err) => ActionResponse::failure(err),
    }
}

/// Platform-default back step.
#[flutter_rust_bridge::frb(sync)]
pub fn go_back() -> ActionResponse {
    match with_app(|app| app.back()) {
        Ok(true) => ActionResponse::success("Moved back."),
        Ok(false) => ActionResponse::failure("Nothing to go back to."),
        Err(err) => ActionResponse::failure(err),
    }
}

/// Builds the dashboard envelope for the current family.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard() -> DashboardResponse {
    let result = with_app(|app| {
        app.dashboard_view().map_err(|err| err.to_string()).map(|view| {
            let events = view
                .events
                .into_iter()
                .map(|summary| EventRow {
                    event_id: summary.event_id,
                    title: summary.title,
                    kind_label: summary.kind_label,
                    icon: summary.icon,
                    color_hex: summary.color_hex,
                    start_epoch_ms: summary.start_epoch_ms,
                })
                .collect();
            DashboardResponse {
                ok: true,
                message: String::new(),
                family_name: view.family_name,
                role_line: view.role_line,
                events,
            }
        })
    });
    match result {
        Ok(Ok(response)) => response,
        Ok(Err(message)) | Err(message) => DashboardResponse::failure(message),
    }
}

/// Builds the event detail envelope for one loaded event.
#[flutter_rust_bridge::frb(sync)]
pub fn event_detail(event_id: String) -> EventDetailResponse {
    let Ok(id) = Uuid::parse_str(&event_id) else {
        return EventDetailResponse::failure(format!("malformed event id `{event_id}`"));
    };
    let result = with_app(|app| app.event_detail(id).map_err(|err| err.to_string()));
    match result {
        Ok(Ok(view)) => EventDetailResponse {
            ok: true,
            message: String::new(),
            title: view.title,
            kind_label: view.kind_label,
            icon: view.icon,
            color_hex: view.color_hex,
            start_epoch_ms: view.start_epoch_ms,
            location: view.location,
            description: view.description,
            participant_names: view.participant_names,
        },
        Ok(Err(message)) | Err(message) => EventDetailResponse::failure(message),
    }
}

/// Dispatches an event detail intent; all intents are stubs in this build.
#[flutter_rust_bridge::frb(sync)]
pub fn event_intent(event_id: String, intent: String) -> ActionResponse {
    let Ok(id) = Uuid::parse_str(&event_id) else {
        return ActionResponse::failure(format!("malformed event id `{event_id}`"));
    };
    let Some(intent) = EventIntent::parse(&intent) else {
        return ActionResponse::failure(format!("unknown intent `{intent}`"));
    };
    let result = with_app(|app| app.event_intent(id, intent).map_err(|err| err.to_string()));
    match result {
        Ok(Ok(outcome)) => ActionResponse {
            ok: outcome.handled,
            message: outcome.message.to_string(),
        },
        Ok(Err(message)) | Err(message) => ActionResponse::failure(message),
    }
}

/// Static onboarding carousel content.
#[flutter_rust_bridge::frb(sync)]
pub fn onboarding_pages() -> Vec<OnboardingPageItem> {
    onboarding::pages()
        .iter()
        .map(|page| OnboardingPageItem {
            title: page.title.to_string(),
            body: page.body.to_string(),
            icon: page.icon.to_string(),
        })
        .collect()
}

/// Static privacy policy content.
#[flutter_rust_bridge::frb(sync)]
pub fn privacy_policy() -> PolicyResponse {
    PolicyResponse {
        title: legal::PRIVACY_POLICY_TITLE.to_string(),
        sections: legal::privacy_policy()
            .iter()
            .map(|section| PolicySectionItem {
                heading: section.heading.to_string(),
                body: section.body.to_string(),
            })
            .collect(),
    }
}

fn act(
    f: impl FnOnce(&mut CoreApp) -> Result<&'static str, famhub_core::AppError>,
) -> ActionResponse {
    match with_app(|app| f(app).map_err(|err| err.to_string())) {
        Ok(Ok(message)) => ActionResponse::success(message),
        Ok(Err(message)) | Err(message) => ActionResponse::failure(message),
    }
}

fn with_app<T>(f: impl FnOnce(&mut CoreApp) -> T) -> Result<T, String> {
    let cell = APP
        .get()
        .ok_or_else(|| "app not initialized; call app_init first".to_string())?;
    let mut guard = cell
        .lock()
        .map_err(|_| "app state is poisoned".to_string())?;
    Ok(f(&mut guard))
}

#[cfg(test)]
mod tests {
    use super::{
        app_init, clear_error, confirm_role, core_version, current_screen, dashboard,
        event_detail, event_intent, init_logging, onboarding_pages, ping, privacy_policy,
        sign_in, sign_out, splash_status,
    };
    use super::{begin_join_family, complete_onboarding, submit_join_family};
    use famhub_core::SAMPLE_INVITE_CODE;

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        assert!(!init_logging("verbose".to_string(), "tmp/logs".to_string()).is_empty());
    }

    #[test]
    fn confirm_role_rejects_unknown_code() {
        app_init(Some(0));
        let response = confirm_role("owner".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("owner"));
    }

    #[test]
    fn event_detail_rejects_malformed_id() {
        app_init(Some(0));
        let response = event_detail("not-a-uuid".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("malformed"));
    }

    #[test]
    fn static_content_is_available_without_session() {
        assert!(!onboarding_pages().is_empty());
        let policy = privacy_policy();
        assert_eq!(policy.title, "Privacy Policy");
        assert!(!policy.sections.is_empty());
    }

    #[test]
    fn join_journey_through_ffi_envelopes() {
        app_init(Some(0));
        assert!(splash_status().ready);
        // Reset whatever state earlier tests left behind.
        let _ = sign_out();

        assert!(sign_in("Mara Harper".to_string()).ok);
        assert!(complete_onboarding().ok);
        assert!(begin_join_family().ok);
        assert!(submit_join_family(SAMPLE_INVITE_CODE.to_string()).ok);
        assert!(confirm_role("adult".to_string()).ok);

        let screen = current_screen();
        assert_eq!(screen.screen, "family_dashboard");
        assert!(screen.placeholder_message.is_none());

        let view = dashboard();
        assert!(view.ok, "{}", view.message);
        assert_eq!(view.family_name, "The Harper Family");
        assert_eq!(view.role_line, "Your role: Adult");
        assert!(!view.events.is_empty());

        let first = &view.events[0];
        let detail = event_detail(first.event_id.clone());
        assert!(detail.ok, "{}", detail.message);
        assert_eq!(detail.title, first.title);

        let stub = event_intent(first.event_id.clone(), "delete".to_string());
        assert!(!stub.ok);
        assert!(stub.message.contains("not available"));

        let _ = clear_error();
        assert!(sign_out().ok);
        assert_eq!(current_screen().screen, "onboarding");
    }
}
