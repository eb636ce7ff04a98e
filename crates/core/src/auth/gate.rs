//! Access gate for authenticated operations.
//!
//! Checks run in a fixed order and stop at the first failure:
//! identity, then the active flag, then the role requirement. A disabled
//! admin is therefore reported as inactive, never as under-privileged.

use realty_shared::AppError;
use thiserror::Error;

use super::RealtorRole;

/// The resolved identity behind a bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    /// Realtor ID.
    pub realtor_id: i32,
    /// Agency the realtor belongs to.
    pub agency_id: i32,
    /// Realtor role.
    pub role: RealtorRole,
    /// Whether the account is enabled.
    pub is_active: bool,
}

/// Role requirement of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleRequirement {
    /// Any active realtor.
    Authenticated,
    /// The given role or a higher one.
    AtLeast(RealtorRole),
    /// Exactly the given role.
    Exactly(RealtorRole),
}

impl RoleRequirement {
    /// Returns true if `role` satisfies this requirement.
    #[must_use]
    pub const fn admits(self, role: RealtorRole) -> bool {
        match self {
            Self::Authenticated => true,
            Self::AtLeast(min) => role.at_least(min),
            Self::Exactly(required) => role.rank() == required.rank(),
        }
    }
}

/// Reasons the gate refuses a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    /// No valid identity.
    #[error("could not validate credentials")]
    Unauthenticated,

    /// The account is disabled.
    #[error("inactive account")]
    Inactive,

    /// The role does not satisfy the requirement.
    #[error("requires {required} role")]
    InsufficientRole {
        /// Role named by the requirement.
        required: RealtorRole,
    },
}

impl From<AccessError> for AppError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::Unauthenticated => Self::Unauthorized(err.to_string()),
            AccessError::Inactive | AccessError::InsufficientRole { .. } => {
                Self::Forbidden(err.to_string())
            }
        }
    }
}

/// Runs the gate for `principal` against `requirement`.
///
/// # Errors
///
/// Returns the first failed check, in order: `Unauthenticated`, `Inactive`,
/// `InsufficientRole`.
pub fn check_access(
    principal: Option<&Principal>,
    requirement: RoleRequirement,
) -> Result<(), AccessError> {
    let principal = principal.ok_or(AccessError::Unauthenticated)?;

    if !principal.is_active {
        return Err(AccessError::Inactive);
    }

    if !requirement.admits(principal.role) {
        let required = match requirement {
            RoleRequirement::AtLeast(role) | RoleRequirement::Exactly(role) => role,
            RoleRequirement::Authenticated => RealtorRole::Realtor,
        };
        return Err(AccessError::InsufficientRole { required });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn principal(role: RealtorRole, is_active: bool) -> Principal {
        Principal {
            realtor_id: 1,
            agency_id: 1,
            role,
            is_active,
        }
    }

    #[test]
    fn test_missing_identity_is_unauthenticated() {
        assert_eq!(
            check_access(None, RoleRequirement::Authenticated),
            Err(AccessError::Unauthenticated)
        );
    }

    #[test]
    fn test_disabled_admin_is_inactive_not_underprivileged() {
        let p = principal(RealtorRole::Admin, false);
        assert_eq!(
            check_access(Some(&p), RoleRequirement::Exactly(RealtorRole::Admin)),
            Err(AccessError::Inactive)
        );

        let p = principal(RealtorRole::Realtor, false);
        assert_eq!(
            check_access(Some(&p), RoleRequirement::Exactly(RealtorRole::Admin)),
            Err(AccessError::Inactive)
        );
    }

    #[rstest]
    #[case(RealtorRole::Realtor, RoleRequirement::Authenticated, true)]
    #[case(RealtorRole::Realtor, RoleRequirement::AtLeast(RealtorRole::Manager), false)]
    #[case(RealtorRole::Manager, RoleRequirement::AtLeast(RealtorRole::Manager), true)]
    #[case(RealtorRole::Admin, RoleRequirement::AtLeast(RealtorRole::Manager), true)]
    #[case(RealtorRole::Realtor, RoleRequirement::Exactly(RealtorRole::Admin), false)]
    #[case(RealtorRole::Manager, RoleRequirement::Exactly(RealtorRole::Admin), false)]
    #[case(RealtorRole::Admin, RoleRequirement::Exactly(RealtorRole::Admin), true)]
    fn test_role_requirements(
        #[case] role: RealtorRole,
        #[case] requirement: RoleRequirement,
        #[case] allowed: bool,
    ) {
        let p = principal(role, true);
        let result = check_access(Some(&p), requirement);
        if allowed {
            assert_eq!(result, Ok(()));
        } else {
            assert!(matches!(result, Err(AccessError::InsufficientRole { .. })));
        }
    }

    #[test]
    fn test_access_error_maps_to_app_error() {
        assert_eq!(AppError::from(AccessError::Unauthenticated).status_code(), 401);
        assert_eq!(AppError::from(AccessError::Inactive).status_code(), 403);
        let err = AppError::from(AccessError::InsufficientRole {
            required: RealtorRole::Manager,
        });
        assert_eq!(err.status_code(), 403);
        assert!(err.to_string().contains("requires manager role"));
    }
}
