// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Staff login.
//!
//! Identity is the staff roster itself; there are no per-user secrets.

use promo_tracker_domain::{StaffDirectory, StaffMember};
use tracing::{info, warn};

use crate::error::AuthError;

/// Passcode shared by every staff member unless configured otherwise.
pub const DEFAULT_PASSCODE: &str = "1234";

/// Resolves login credentials to a staff member.
pub trait CredentialCheck: Send + Sync {
    /// Authenticates a username and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingCredentials` if either field is blank, or
    /// `AuthError::AuthenticationFailed` if the credentials are not accepted.
    fn authenticate(&self, username: &str, password: &str) -> Result<StaffMember, AuthError>;
}

/// Matches the username against staff names and checks a shared passcode.
///
/// A username matches the first staff member, in roster order, whose name
/// equals it or contains it.
#[derive(Debug, Clone)]
pub struct RosterCredentials {
    directory: StaffDirectory,
    passcode: String,
}

impl RosterCredentials {
    /// Creates a checker using [`DEFAULT_PASSCODE`].
    #[must_use]
    pub fn new(directory: StaffDirectory) -> Self {
        Self::with_passcode(directory, DEFAULT_PASSCODE)
    }

    /// Creates a checker with a custom shared passcode.
    #[must_use]
    pub fn with_passcode(directory: StaffDirectory, passcode: &str) -> Self {
        Self {
            directory,
            passcode: passcode.to_string(),
        }
    }
}

impl CredentialCheck for RosterCredentials {
    fn authenticate(&self, username: &str, password: &str) -> Result<StaffMember, AuthError> {
        if username.is_empty() || password.is_empty() {
            warn!("Login attempt with missing credentials");
            return Err(AuthError::MissingCredentials);
        }

        let Some(member) = self.directory.find_by_name(username) else {
            warn!(username, "Login attempt for unknown staff member");
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("invalid username or password"),
            });
        };

        if password != self.passcode {
            warn!(staff_id = member.id, "Login attempt with wrong passcode");
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("invalid username or password"),
            });
        }

        info!(staff_id = member.id, name = %member.name, "Staff member logged in");
        Ok(member.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use promo_tracker_domain::default_roster;

    fn checker() -> RosterCredentials {
        RosterCredentials::new(default_roster())
    }

    #[test]
    fn test_exact_name_and_passcode() {
        let member: StaffMember = checker().authenticate("장정금", "1234").unwrap();
        assert_eq!(member.id, 2);
    }

    #[test]
    fn test_partial_name_matches_first_in_roster_order() {
        // "신" is contained in both 신흥철 (1) and 신종우 (3)
        let member: StaffMember = checker().authenticate("신", "1234").unwrap();
        assert_eq!(member.id, 1);
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert_eq!(
            checker().authenticate("", "1234"),
            Err(AuthError::MissingCredentials)
        );
        assert_eq!(
            checker().authenticate("효선", ""),
            Err(AuthError::MissingCredentials)
        );
    }

    #[test]
    fn test_wrong_passcode_rejected() {
        assert!(matches!(
            checker().authenticate("효선", "0000"),
            Err(AuthError::AuthenticationFailed { .. })
        ));
    }

    #[test]
    fn test_unknown_name_rejected() {
        assert!(matches!(
            checker().authenticate("nobody", "1234"),
            Err(AuthError::AuthenticationFailed { .. })
        ));
    }

    #[test]
    fn test_custom_passcode() {
        let custom: RosterCredentials =
            RosterCredentials::with_passcode(default_roster(), "s3cret");

        assert!(custom.authenticate("앰버", "1234").is_err());
        assert_eq!(custom.authenticate("앰버", "s3cret").unwrap().id, 7);
    }
}
