//! Pure decision functions over an [`IdentitySnapshot`]. They are recomputed
//! from the latest snapshot on every observation and never cached.

use crate::{
    identity::{IdentitySnapshot, Role},
    route::RouteTarget,
};

/// Where the dashboard entry point should send the visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Identity is still loading; do nothing yet.
    Wait,
    /// Resolved with nobody signed in; the destination is the sign-in route.
    Deny,
    /// Resolved user; send them to `target`.
    Redirect(RouteTarget),
}

impl GateDecision {
    /// Route to navigate to, if the decision is final.
    #[must_use]
    pub const fn destination(self) -> Option<RouteTarget> {
        match self {
            GateDecision::Wait => None,
            GateDecision::Deny => Some(RouteTarget::SignIn),
            GateDecision::Redirect(target) => Some(target),
        }
    }
}

/// Maps a snapshot to a gate decision.
///
/// A missing role routes exactly like a non-admin role: an unresolved role is
/// never granted admin routing.
#[must_use]
pub fn decide(snapshot: &IdentitySnapshot) -> GateDecision {
    if snapshot.is_loading {
        return GateDecision::Wait;
    }
    if snapshot.user.is_none() {
        return GateDecision::Deny;
    }
    match snapshot.role_kind() {
        Some(Role::Admin) => GateDecision::Redirect(RouteTarget::AdminDashboard),
        _ => GateDecision::Redirect(RouteTarget::GuestDashboard),
    }
}

/// Outcome of guarding a page that requires a role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Wait,
    SignIn,
    Restricted,
    Granted,
}

/// Checks a snapshot against the role a page requires.
///
/// A signed-in user without a resolved role only passes guest pages.
#[must_use]
pub fn authorize(snapshot: &IdentitySnapshot, required: Role) -> AccessDecision {
    if snapshot.is_loading {
        return AccessDecision::Wait;
    }
    if snapshot.user.is_none() {
        return AccessDecision::SignIn;
    }
    let held = snapshot.role_kind().unwrap_or(Role::Guest);
    if held.satisfies(required) {
        AccessDecision::Granted
    } else {
        AccessDecision::Restricted
    }
}
