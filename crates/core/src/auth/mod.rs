//! Authentication and authorization.
//!
//! This module provides:
//! - Password hashing with Argon2id
//! - The ordered realtor role hierarchy
//! - The access gate applied to every authenticated request

mod gate;
mod password;

pub use gate::{AccessError, Principal, RoleRequirement, check_access};
pub use password::{PasswordError, hash_password, verify_password};

use serde::{Deserialize, Serialize};

/// Realtor roles, ordered from least to most privileged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RealtorRole {
    /// Agency staff member.
    #[default]
    Realtor,
    /// Agency manager; may add realtors to the agency.
    Manager,
    /// Platform administrator.
    Admin,
}

impl RealtorRole {
    /// All roles in ascending order.
    pub const ALL: [Self; 3] = [Self::Realtor, Self::Manager, Self::Admin];

    /// Numeric rank; a higher rank includes every lower one.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Realtor => 0,
            Self::Manager => 1,
            Self::Admin => 2,
        }
    }

    /// Returns true if this role is `other` or above.
    #[must_use]
    pub const fn at_least(self, other: Self) -> bool {
        self.rank() >= other.rank()
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Realtor => "realtor",
            Self::Manager => "manager",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for RealtorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RealtorRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("unknown role: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_order() {
        assert!(RealtorRole::Admin.at_least(RealtorRole::Manager));
        assert!(RealtorRole::Admin.at_least(RealtorRole::Realtor));
        assert!(RealtorRole::Manager.at_least(RealtorRole::Manager));
        assert!(RealtorRole::Manager.at_least(RealtorRole::Realtor));
        assert!(!RealtorRole::Realtor.at_least(RealtorRole::Manager));
        assert!(!RealtorRole::Manager.at_least(RealtorRole::Admin));
    }

    #[test]
    fn test_ranks_strictly_increase() {
        let ranks: Vec<u8> = RealtorRole::ALL.iter().map(|r| r.rank()).collect();
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_role_parse_and_display() {
        for role in RealtorRole::ALL {
            assert_eq!(role.to_string().parse::<RealtorRole>(), Ok(role));
        }
        assert!("owner".parse::<RealtorRole>().is_err());
        assert_eq!(RealtorRole::default(), RealtorRole::Realtor);
    }
}
