use famhub_core::screen::dashboard;
use famhub_core::{
    route, Family, FamilyRole, FlowState, Membership, PlaceholderReason, Screen, SessionContext,
    UserProfile,
};

fn populated_session() -> SessionContext {
    let mut session = SessionContext::new();
    let user = UserProfile::new("Mara Harper");
    session.set_user(user.clone());
    let family = Family::new("The Harper Family", "HEARTH");
    let membership = Membership::new(user.id, family.id, FamilyRole::Adult);
    session.set_family(family, membership).unwrap();
    session
}

#[test]
fn every_flow_state_renders_exactly_one_screen() {
    let empty = SessionContext::new();
    let populated = populated_session();
    for state in FlowState::ALL {
        // Both with and without session data, routing is total.
        let _ = route(state, &empty);
        let _ = route(state, &populated);
    }
}

#[test]
fn populated_session_reaches_guarded_screens() {
    let session = populated_session();
    assert_eq!(route(FlowState::RoleSelection, &session), Screen::RoleSelection);
    assert_eq!(
        route(FlowState::FamilyDashboard, &session),
        Screen::FamilyDashboard
    );
}

#[test]
fn missing_family_degrades_role_selection() {
    let mut session = SessionContext::new();
    session.set_user(UserProfile::new("Mara Harper"));
    assert_eq!(
        route(FlowState::RoleSelection, &session),
        Screen::Placeholder(PlaceholderReason::MissingFamily)
    );
}

#[test]
fn leaving_family_degrades_dashboard() {
    let mut session = populated_session();
    session.leave_family();
    // user present, family gone
    assert_eq!(
        route(FlowState::FamilyDashboard, &session),
        Screen::Placeholder(PlaceholderReason::MissingFamily)
    );
}

#[test]
fn dashboard_scenario_shows_family_name_and_role_line() {
    // Starts empty at onboarding, then the session receives family F with an
    // adult membership and the flow reaches the dashboard.
    let mut session = SessionContext::new();
    assert_eq!(route(FlowState::Onboarding, &session), Screen::Onboarding);

    let user = UserProfile::new("Mara Harper");
    session.set_user(user.clone());
    let family = Family::new("The Harper Family", "HEARTH");
    let membership = Membership::new(user.id, family.id, FamilyRole::Adult);
    session.set_family(family.clone(), membership.clone()).unwrap();

    assert_eq!(
        route(FlowState::FamilyDashboard, &session),
        Screen::FamilyDashboard
    );
    let view = dashboard::build(&family, &membership, &[]);
    assert_eq!(view.family_name, "The Harper Family");
    assert_eq!(view.role_line, "Your role: Adult");
}
