//! Identity snapshots pushed by the identity provider. A snapshot is replaced
//! wholesale on every auth change (sign-in, sign-out, token refresh, role fetch
//! completion) and never mutated in place.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Role discriminant resolved for a signed-in user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Guest,
    Admin,
    Couple,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Admin => "admin",
            Role::Couple => "couple",
        }
    }

    /// Whether a user holding `self` may enter an area that requires `required`.
    /// Admin satisfies every area, the couple also sees guest areas.
    #[must_use]
    pub const fn satisfies(self, required: Role) -> bool {
        match (self, required) {
            (Role::Admin, _) | (Role::Couple, Role::Couple | Role::Guest) => true,
            (Role::Guest, Role::Guest) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "guest" => Ok(Role::Guest),
            "admin" => Ok(Role::Admin),
            "couple" => Ok(Role::Couple),
            _ => Err(Error::UnknownRole(value.to_string())),
        }
    }
}

/// Opaque role record. Only the discriminant is ever consulted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRef {
    role: Role,
}

impl RoleRef {
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self { role }
    }

    #[must_use]
    pub const fn kind(&self) -> Role {
        self.role
    }
}

impl From<Role> for RoleRef {
    fn from(role: Role) -> Self {
        Self::new(role)
    }
}

/// Signed-in user as reported by the provider. Users compare by `id`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
        }
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

impl PartialEq for UserRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for UserRef {}

/// The provider's current best-known identity state.
///
/// While `is_loading` is true, `user` and `role` are unknown rather than absent
/// and must not be read as "signed out".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentitySnapshot {
    pub is_loading: bool,
    pub user: Option<UserRef>,
    pub role: Option<RoleRef>,
}

impl IdentitySnapshot {
    /// Snapshot published before the provider has resolved anything.
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            is_loading: true,
            user: None,
            role: None,
        }
    }

    /// Resolved snapshot with nobody signed in.
    #[must_use]
    pub const fn signed_out() -> Self {
        Self {
            is_loading: false,
            user: None,
            role: None,
        }
    }

    /// Resolved snapshot for `user`. `role` may still be `None` when the role
    /// lookup came back empty.
    #[must_use]
    pub fn signed_in(user: UserRef, role: Option<Role>) -> Self {
        Self {
            is_loading: false,
            user: Some(user),
            role: role.map(RoleRef::new),
        }
    }

    #[must_use]
    pub fn role_kind(&self) -> Option<Role> {
        self.role.as_ref().map(RoleRef::kind)
    }

    /// Change-detection key for this snapshot. Loading snapshots all share one
    /// key whatever stale fields they carry, and a role without a user is
    /// dropped.
    #[must_use]
    pub fn key(&self) -> IdentityKey {
        if self.is_loading {
            return IdentityKey {
                is_loading: true,
                user_id: None,
                role: None,
            };
        }
        IdentityKey {
            is_loading: false,
            user_id: self.user.as_ref().map(|user| user.id.clone()),
            role: self.user.as_ref().and(self.role_kind()),
        }
    }
}

impl Default for IdentitySnapshot {
    fn default() -> Self {
        Self::loading()
    }
}

/// The `(is_loading, user id, role)` tuple that redirect effects key on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    pub is_loading: bool,
    pub user_id: Option<String>,
    pub role: Option<Role>,
}

impl IdentityKey {
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        !self.is_loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!(" couple ".parse::<Role>(), Ok(Role::Couple));
        assert_eq!(
            "planner".parse::<Role>(),
            Err(Error::UnknownRole("planner".to_string()))
        );
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Couple).expect("serialize role");
        assert_eq!(json, "\"couple\"");
        let role: Role = serde_json::from_str("\"admin\"").expect("deserialize role");
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn role_satisfaction_is_ordered() {
        assert!(Role::Admin.satisfies(Role::Couple));
        assert!(Role::Admin.satisfies(Role::Guest));
        assert!(Role::Couple.satisfies(Role::Guest));
        assert!(!Role::Couple.satisfies(Role::Admin));
        assert!(!Role::Guest.satisfies(Role::Couple));
        assert!(Role::Guest.satisfies(Role::Guest));
    }

    #[test]
    fn loading_key_ignores_stale_fields() {
        let stale = IdentitySnapshot {
            is_loading: true,
            user: Some(UserRef::new("u1")),
            role: Some(RoleRef::new(Role::Admin)),
        };
        assert_eq!(stale.key(), IdentitySnapshot::loading().key());
        assert!(!stale.key().is_resolved());
    }

    #[test]
    fn signed_out_key_ignores_orphan_role() {
        let orphan = IdentitySnapshot {
            is_loading: false,
            user: None,
            role: Some(RoleRef::new(Role::Admin)),
        };
        assert_eq!(orphan.key(), IdentitySnapshot::signed_out().key());
        assert!(orphan.key().is_resolved());
    }

    #[test]
    fn users_compare_by_id() {
        let a = UserRef::new("u1").with_email("a@example.com");
        let b = UserRef::new("u1");
        assert_eq!(a, b);
        assert_eq!(
            IdentitySnapshot::signed_in(a, Some(Role::Guest)).key(),
            IdentitySnapshot::signed_in(b, Some(Role::Guest)).key()
        );
    }
}
