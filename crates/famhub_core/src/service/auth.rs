//! Authentication collaborator contract.

use crate::model::user::UserProfile;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the authentication collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Display name is blank after trim.
    InvalidDisplayName,
    /// Backend is unreachable or refused the request.
    Unavailable(String),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDisplayName => write!(f, "display name must not be blank"),
            Self::Unavailable(detail) => write!(f, "authentication unavailable: {detail}"),
        }
    }
}

impl Error for AuthError {}

/// In-process interface for sign-in and sign-out.
///
/// The real backend lives outside this crate; the controller only depends on
/// this contract.
pub trait AuthService {
    /// Signs in and returns the established user identity.
    fn sign_in(&self, display_name: &str) -> Result<UserProfile, AuthError>;

    /// Tears down the remote session. Must be called before the local
    /// context is cleared.
    fn sign_out(&self) -> Result<(), AuthError>;
}
