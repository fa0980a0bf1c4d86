//! Forum roles and capability checks.

use serde::{Deserialize, Serialize};

/// The role snapshot embedded in a session record.
///
/// A role change on the underlying user account is not reflected until the
/// session is recreated; authorization code must treat this as a snapshot,
/// not live-authoritative state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// Thread and post moderation.
    Moderator,
    /// Regular member.
    User,
}

impl Role {
    /// Whether this role may moderate threads and posts.
    pub fn can_moderate(&self) -> bool {
        matches!(self, Role::Admin | Role::Moderator)
    }

    /// Whether this role has administrative access.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::User
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Moderator => write!(f, "moderator"),
            Role::User => write!(f, "user"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = std::convert::Infallible;

    /// Unrecognized role strings fold to `User`; a stored record can never
    /// fail to resolve to some role.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "admin" => Role::Admin,
            "moderator" => Role::Moderator,
            _ => Role::User,
        })
    }
}
