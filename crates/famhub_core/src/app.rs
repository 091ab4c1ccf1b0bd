//! App controller: wires flow state, session context and collaborators.
//!
//! # Responsibility
//! - Apply user intents to the session through legal flow transitions.
//! - Collapse collaborator failures into the single session error message.
//!
//! # Invariants
//! - Flow transitions outside the table in [`crate::flow`] are rejected.
//! - Every failed operation leaves an error message in the session; the
//!   only recovery action is `clear_error`.
//! - After `leave_family` the flow state is left unchanged; the router's
//!   placeholder degradation covers the now-unbacked screen.

use crate::bootstrap::SplashGate;
use crate::flow::FlowState;
use crate::model::event::{CalendarEvent, EventId};
use crate::model::family::{Family, FamilyRole, Membership};
use crate::model::user::UserProfile;
use crate::router::{route, Screen};
use crate::screen::dashboard::{self, DashboardView};
use crate::screen::event_detail::{self, EventDetailView, EventIntent, IntentOutcome};
use crate::service::auth::{AuthError, AuthService};
use crate::service::directory::{DirectoryError, FamilyDirectory};
use crate::session::{SessionContext, SessionError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from app controller operations.
#[derive(Debug)]
pub enum AppError {
    Auth(AuthError),
    Directory(DirectoryError),
    Session(SessionError),
    /// Requested flow transition is not in the forward table.
    InvalidTransition { from: FlowState, to: FlowState },
    /// Operation requires a signed-in user.
    NotSignedIn,
    /// Operation requires a current family and membership.
    NoFamilySelected,
    /// Event ID does not match any loaded event.
    EventNotFound(EventId),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auth(err) => write!(f, "{err}"),
            Self::Directory(err) => write!(f, "{err}"),
            Self::Session(err) => write!(f, "{err}"),
            Self::InvalidTransition { from, to } => write!(
                f,
                "cannot move from {} to {}",
                from.code(),
                to.code()
            ),
            Self::NotSignedIn => write!(f, "no user is signed in"),
            Self::NoFamilySelected => write!(f, "no family is selected"),
            Self::EventNotFound(id) => write!(f, "event not found: {id}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Auth(err) => Some(err),
            Self::Directory(err) => Some(err),
            Self::Session(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AuthError> for AppError {
    fn from(value: AuthError) -> Self {
        Self::Auth(value)
    }
}

impl From<DirectoryError> for AppError {
    fn from(value: DirectoryError) -> Self {
        Self::Directory(value)
    }
}

impl From<SessionError> for AppError {
    fn from(value: SessionError) -> Self {
        Self::Session(value)
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Process-lifetime application controller.
///
/// Exclusively owned and mutated by the UI thread; the FFI layer serializes
/// access through one mutex-guarded handle.
pub struct App<A: AuthService, D: FamilyDirectory> {
    auth: A,
    directory: D,
    flow: FlowState,
    session: SessionContext,
    splash: SplashGate,
    roster: Vec<UserProfile>,
    events: Vec<CalendarEvent>,
}

impl<A: AuthService, D: FamilyDirectory> App<A, D> {
    /// Creates a controller at the start of the onboarding flow.
    pub fn new(auth: A, directory: D, splash: SplashGate) -> Self {
        Self {
            auth,
            directory,
            flow: FlowState::Onboarding,
            session: SessionContext::new(),
            splash,
            roster: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn flow(&self) -> FlowState {
        self.flow
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Member profiles of the current family, empty when none is selected.
    pub fn roster(&self) -> &[UserProfile] {
        &self.roster
    }

    /// Loaded events of the current family, empty when none is selected.
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// Whether the splash gate has opened.
    pub fn is_ready(&self) -> bool {
        self.splash.is_ready()
    }

    /// Milliseconds until the splash gate opens.
    pub fn splash_remaining_ms(&self) -> u64 {
        self.splash.remaining_ms()
    }

    /// Selects the screen to render right now.
    pub fn current_screen(&self) -> Screen {
        route(self.flow, &self.session)
    }

    /// Signs in through the auth collaborator and stores the identity.
    pub fn sign_in(&mut self, display_name: &str) -> AppResult<()> {
        match self.auth.sign_in(display_name) {
            Ok(user) => {
                info!(
                    "event=sign_in module=app status=ok user_id={}",
                    user.id
                );
                self.session.set_user(user);
                Ok(())
            }
            Err(err) => self.fail(err.into()),
        }
    }

    /// Leaves the onboarding carousel for family selection.
    pub fn complete_onboarding(&mut self) -> AppResult<()> {
        self.advance(FlowState::FamilySelection)
    }

    /// Opens the create-family form.
    pub fn begin_create_family(&mut self) -> AppResult<()> {
        self.advance(FlowState::CreateFamily)
    }

    /// Opens the join-family form.
    pub fn begin_join_family(&mut self) -> AppResult<()> {
        self.advance(FlowState::JoinFamily)
    }

    /// Creates a family, establishes an admin membership for the signed-in
    /// user and moves on to role selection.
    ///
    /// The transition is validated before any collaborator call so a submit
    /// from the wrong state neither reaches the backend nor touches the
    /// session.
    pub fn submit_create_family(&mut self, name: &str) -> AppResult<()> {
        self.check_advance(FlowState::RoleSelection)?;
        let Some(user) = self.session.user().cloned() else {
            return self.fail(AppError::NotSignedIn);
        };
        let family = match self.directory.create_family(name) {
            Ok(family) => family,
            Err(err) => return self.fail(err.into()),
        };
        let membership =
            match self
                .directory
                .membership_for(user.id, family.id, FamilyRole::Admin)
            {
                Ok(membership) => membership,
                Err(err) => return self.fail(err.into()),
            };
        self.adopt_family(family, membership)?;
        self.advance(FlowState::RoleSelection)
    }

    /// Joins a family by invite code and moves on to role selection.
    ///
    /// Validated up front like [`Self::submit_create_family`].
    pub fn submit_join_family(&mut self, invite_code: &str) -> AppResult<()> {
        self.check_advance(FlowState::RoleSelection)?;
        let Some(user) = self.session.user().cloned() else {
            return self.fail(AppError::NotSignedIn);
        };
        let family = match self.directory.join_family(invite_code) {
            Ok(family) => family,
            Err(err) => return self.fail(err.into()),
        };
        let membership =
            match self
                .directory
                .membership_for(user.id, family.id, FamilyRole::Adult)
            {
                Ok(membership) => membership,
                Err(err) => return self.fail(err.into()),
            };
        self.adopt_family(family, membership)?;
        self.advance(FlowState::RoleSelection)
    }

    /// Confirms the member's role and enters the dashboard.
    pub fn confirm_role(&mut self, role: FamilyRole) -> AppResult<()> {
        let (Some(family), Some(membership)) = (
            self.session.family().cloned(),
            self.session.membership().cloned(),
        ) else {
            return self.fail(AppError::NoFamilySelected);
        };
        if let Err(err) = self.session.set_family(family, membership.with_role(role)) {
            return self.fail(err.into());
        }
        self.advance(FlowState::FamilyDashboard)
    }

    /// Clears family and membership. The flow state stays where it is; the
    /// router degrades to the placeholder until the next transition.
    pub fn leave_family(&mut self) {
        info!("event=leave_family module=app status=ok");
        self.session.leave_family();
        self.roster.clear();
        self.events.clear();
    }

    /// Signs out through the auth collaborator, then resets session and
    /// flow. A collaborator failure keeps the session and surfaces the
    /// error instead.
    pub fn sign_out(&mut self) -> AppResult<()> {
        if let Err(err) = self.auth.sign_out() {
            return self.fail(err.into());
        }
        info!("event=sign_out module=app status=ok");
        self.session.sign_out();
        self.roster.clear();
        self.events.clear();
        self.flow = FlowState::Onboarding;
        Ok(())
    }

    /// Dismisses the current error message.
    pub fn clear_error(&mut self) {
        self.session.clear_error();
    }

    /// Platform-default back step. Returns `false` when the current state
    /// has no back target.
    pub fn back(&mut self) -> bool {
        match self.flow.back_target() {
            Some(previous) => {
                info!(
                    "event=flow_back module=app status=ok from={} to={}",
                    self.flow.code(),
                    previous.code()
                );
                self.flow = previous;
                true
            }
            None => false,
        }
    }

    /// Builds the dashboard view model for the current family.
    pub fn dashboard_view(&self) -> AppResult<DashboardView> {
        let (Some(family), Some(membership)) = (self.session.family(), self.session.membership())
        else {
            return Err(AppError::NoFamilySelected);
        };
        Ok(dashboard::build(family, membership, &self.events))
    }

    /// Builds the detail view model for one loaded event.
    pub fn event_detail(&self, event_id: EventId) -> AppResult<EventDetailView> {
        let event = self
            .events
            .iter()
            .find(|event| event.id == event_id)
            .ok_or(AppError::EventNotFound(event_id))?;
        Ok(event_detail::build(event, &self.roster))
    }

    /// Dispatches a detail-screen intent for one loaded event.
    pub fn event_intent(&self, event_id: EventId, intent: EventIntent) -> AppResult<IntentOutcome> {
        if !self.events.iter().any(|event| event.id == event_id) {
            return Err(AppError::EventNotFound(event_id));
        }
        Ok(event_detail::dispatch_intent(intent))
    }

    fn adopt_family(&mut self, family: Family, membership: Membership) -> AppResult<()> {
        let family_id = family.id;
        if let Err(err) = self.session.set_family(family, membership) {
            return self.fail(err.into());
        }
        let roster = match self.directory.roster(family_id) {
            Ok(roster) => roster,
            Err(err) => return self.fail(err.into()),
        };
        let events = match self.directory.events(family_id) {
            Ok(events) => events,
            Err(err) => return self.fail(err.into()),
        };
        info!(
            "event=family_loaded module=app status=ok family_id={} members={} events={}",
            family_id,
            roster.len(),
            events.len()
        );
        self.roster = roster;
        self.events = events;
        Ok(())
    }

    fn check_advance(&mut self, next: FlowState) -> AppResult<()> {
        if !self.flow.can_advance_to(next) {
            return self.fail(AppError::InvalidTransition {
                from: self.flow,
                to: next,
            });
        }
        Ok(())
    }

    fn advance(&mut self, next: FlowState) -> AppResult<()> {
        self.check_advance(next)?;
        info!(
            "event=flow_advance module=app status=ok from={} to={}",
            self.flow.code(),
            next.code()
        );
        self.flow = next;
        Ok(())
    }

    fn fail<T>(&mut self, err: AppError) -> AppResult<T> {
        warn!("event=app_error module=app status=error detail={err}");
        self.session.set_error(err.to_string());
        Err(err)
    }
}
