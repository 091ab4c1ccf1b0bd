//! Placeholder collaborators and mock data for previews and tests.
//!
//! # Responsibility
//! - Provide deterministic in-memory stand-ins for the auth and family
//!   collaborators until a real backend is wired in.
//! - Generate a consistent sample household (family, members, events) whose
//!   event participants resolve against the roster.

use crate::model::event::{CalendarEvent, EventType};
use crate::model::family::{Family, FamilyId, FamilyRole, Membership};
use crate::model::user::{UserId, UserProfile};
use crate::service::auth::{AuthError, AuthService};
use crate::service::directory::{DirectoryError, FamilyDirectory};

/// Invite code accepted by the mock join flow.
pub const SAMPLE_INVITE_CODE: &str = "HEARTH";

/// One internally consistent sample family with roster and events.
#[derive(Debug, Clone)]
pub struct SampleHousehold {
    pub family: Family,
    pub members: Vec<UserProfile>,
    pub events: Vec<CalendarEvent>,
}

/// Builds the sample household used by previews, the mock directory and
/// tests.
///
/// # Contract
/// - Every event participant ID appears in `members`.
/// - Event set covers every `EventType` once.
pub fn sample_household() -> SampleHousehold {
    let family = Family::new("The Harper Family", SAMPLE_INVITE_CODE);
    let mara = UserProfile::new("Mara Harper");
    let theo = UserProfile::new("Theo Harper");
    let june = UserProfile::new("June Harper");

    // Fixed near-future anchor keeps sample dates stable across a session.
    let base_ms: i64 = 1_760_000_000_000;
    let day_ms: i64 = 24 * 60 * 60 * 1000;

    let mut birthday = CalendarEvent::new("Grandma's 70th Birthday", EventType::Birthday, base_ms);
    birthday.location = Some("Grandma's house".to_string());
    birthday.description = Some("Bring the photo album and the lemon cake.".to_string());
    birthday.add_participant(mara.id);
    birthday.add_participant(theo.id);
    birthday.add_participant(june.id);

    let mut dentist =
        CalendarEvent::new("June's Dentist Check-up", EventType::Appointment, base_ms + day_ms);
    dentist.location = Some("Bright Smiles Clinic, Room 4".to_string());
    dentist.add_participant(mara.id);
    dentist.add_participant(june.id);

    let mut school_play =
        CalendarEvent::new("Spring School Play", EventType::SchoolEvent, base_ms + 3 * day_ms);
    school_play.location = Some("Maplewood Elementary Hall".to_string());
    school_play.description = Some("June plays the fox. Doors open 18:00.".to_string());
    school_play.add_participant(june.id);

    let mut hike =
        CalendarEvent::new("Sunday Lake Hike", EventType::FamilyActivity, base_ms + 5 * day_ms);
    hike.location = Some("Silver Lake trailhead".to_string());
    hike.add_participant(mara.id);
    hike.add_participant(theo.id);
    hike.add_participant(june.id);

    let mut swim_kit =
        CalendarEvent::new("Pack June's swim kit", EventType::Reminder, base_ms + 6 * day_ms);
    swim_kit.add_participant(theo.id);

    SampleHousehold {
        family,
        members: vec![mara, theo, june],
        events: vec![birthday, dentist, school_play, hike, swim_kit],
    }
}

/// Mock authentication collaborator.
///
/// Always succeeds unless constructed with an injected failure, which makes
/// error-path behavior testable.
#[derive(Debug, Clone, Default)]
pub struct MockAuthService {
    fail_with: Option<String>,
}

impl MockAuthService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a mock whose operations fail with `detail`.
    pub fn failing(detail: impl Into<String>) -> Self {
        Self {
            fail_with: Some(detail.into()),
        }
    }

    fn check_available(&self) -> Result<(), AuthError> {
        match &self.fail_with {
            Some(detail) => Err(AuthError::Unavailable(detail.clone())),
            None => Ok(()),
        }
    }
}

impl AuthService for MockAuthService {
    fn sign_in(&self, display_name: &str) -> Result<UserProfile, AuthError> {
        self.check_available()?;
        let trimmed = display_name.trim();
        if trimmed.is_empty() {
            return Err(AuthError::InvalidDisplayName);
        }
        Ok(UserProfile::new(trimmed))
    }

    fn sign_out(&self) -> Result<(), AuthError> {
        self.check_available()
    }
}

/// Mock family data collaborator backed by one sample household.
///
/// Joining with [`SAMPLE_INVITE_CODE`] lands in the sample household; newly
/// created families start with an empty roster and no events.
#[derive(Debug, Clone)]
pub struct MockFamilyDirectory {
    sample: SampleHousehold,
    fail_with: Option<String>,
}

impl MockFamilyDirectory {
    pub fn new() -> Self {
        Self {
            sample: sample_household(),
            fail_with: None,
        }
    }

    /// Returns a mock whose operations fail with `detail`.
    pub fn failing(detail: impl Into<String>) -> Self {
        Self {
            sample: sample_household(),
            fail_with: Some(detail.into()),
        }
    }

    /// The household served for the sample invite code.
    pub fn sample(&self) -> &SampleHousehold {
        &self.sample
    }

    fn check_available(&self) -> Result<(), DirectoryError> {
        match &self.fail_with {
            Some(detail) => Err(DirectoryError::Unavailable(detail.clone())),
            None => Ok(()),
        }
    }
}

impl Default for MockFamilyDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl FamilyDirectory for MockFamilyDirectory {
    fn create_family(&self, name: &str) -> Result<Family, DirectoryError> {
        self.check_available()?;
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DirectoryError::InvalidFamilyName);
        }
        let family = Family::new(trimmed, derive_invite_code(trimmed));
        Ok(family)
    }

    fn join_family(&self, invite_code: &str) -> Result<Family, DirectoryError> {
        self.check_available()?;
        let normalized = invite_code.trim().to_ascii_uppercase();
        if normalized == self.sample.family.invite_code {
            return Ok(self.sample.family.clone());
        }
        Err(DirectoryError::UnknownInviteCode(normalized))
    }

    fn membership_for(
        &self,
        user_id: UserId,
        family_id: FamilyId,
        role: FamilyRole,
    ) -> Result<Membership, DirectoryError> {
        self.check_available()?;
        Ok(Membership::new(user_id, family_id, role))
    }

    fn roster(&self, family_id: FamilyId) -> Result<Vec<UserProfile>, DirectoryError> {
        self.check_available()?;
        if family_id == self.sample.family.id {
            return Ok(self.sample.members.clone());
        }
        Ok(Vec::new())
    }

    fn events(&self, family_id: FamilyId) -> Result<Vec<CalendarEvent>, DirectoryError> {
        self.check_available()?;
        if family_id == self.sample.family.id {
            return Ok(self.sample.events.clone());
        }
        Ok(Vec::new())
    }
}

fn derive_invite_code(name: &str) -> String {
    let prefix: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(4)
        .collect::<String>()
        .to_ascii_uppercase();
    if prefix.is_empty() {
        "FAMILY".to_string()
    } else {
        format!("{prefix}HOME")
    }
}
