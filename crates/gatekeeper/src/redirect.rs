//! One-shot navigation for the dashboard entry point.
//!
//! The controller bridges [`decide`] to a replace-style navigation. It is fed
//! every snapshot the provider publishes and navigates at most once per
//! distinct resolved `(is_loading, user, role)` tuple. Loading snapshots never
//! navigate, which keeps an authenticated user from flashing through the
//! sign-in route while their role is still being fetched.

use crate::{
    gate::{decide, GateDecision},
    identity::{IdentityKey, IdentitySnapshot},
    route::{Navigator, RouteTarget},
};
use tracing::debug;

/// What the entry point should show after observing a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observation {
    /// Identity unknown; show the loading indicator.
    Waiting,
    /// A navigation to `target` was issued by this observation.
    Navigated(RouteTarget),
    /// The same resolved tuple was already acted on; nothing was issued.
    Settled(RouteTarget),
}

impl Observation {
    #[must_use]
    pub const fn shows_placeholder(self) -> bool {
        matches!(self, Observation::Waiting)
    }

    #[must_use]
    pub const fn target(self) -> Option<RouteTarget> {
        match self {
            Observation::Waiting => None,
            Observation::Navigated(target) | Observation::Settled(target) => Some(target),
        }
    }
}

#[derive(Debug, Default)]
pub struct RedirectController {
    last_resolved: Option<IdentityKey>,
}

impl RedirectController {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_resolved: None,
        }
    }

    /// Decides on `snapshot` and navigates if its resolved tuple is new.
    pub fn observe<N: Navigator>(
        &mut self,
        snapshot: &IdentitySnapshot,
        navigator: &N,
    ) -> Observation {
        let decision = decide(snapshot);
        let Some(target) = decision.destination() else {
            debug!("identity loading; holding redirect");
            return Observation::Waiting;
        };

        let key = snapshot.key();
        if self.last_resolved.as_ref() == Some(&key) {
            return Observation::Settled(target);
        }

        debug!(
            route = target.name(),
            user_id = key.user_id.as_deref().unwrap_or("-"),
            denied = matches!(decision, GateDecision::Deny),
            "redirecting from dashboard entry"
        );
        self.last_resolved = Some(key);
        navigator.navigate_replace(target);
        Observation::Navigated(target)
    }

    /// Forgets the last acted-on tuple so the next resolved snapshot navigates.
    pub fn reset(&mut self) {
        self.last_resolved = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{Role, UserRef};
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<RouteTarget>>);

    impl Navigator for Recorder {
        fn navigate_replace(&self, target: RouteTarget) {
            self.0.borrow_mut().push(target);
        }
    }

    #[test]
    fn waiting_never_navigates() {
        let navigator = Recorder::default();
        let mut controller = RedirectController::new();

        let observation = controller.observe(&IdentitySnapshot::loading(), &navigator);

        assert_eq!(observation, Observation::Waiting);
        assert!(observation.shows_placeholder());
        assert!(navigator.0.borrow().is_empty());
    }

    #[test]
    fn identical_snapshot_navigates_once() {
        let navigator = Recorder::default();
        let mut controller = RedirectController::new();
        let snapshot = IdentitySnapshot::signed_in(UserRef::new("u1"), Some(Role::Admin));

        let first = controller.observe(&snapshot, &navigator);
        let second = controller.observe(&snapshot, &navigator);

        assert_eq!(first, Observation::Navigated(RouteTarget::AdminDashboard));
        assert_eq!(second, Observation::Settled(RouteTarget::AdminDashboard));
        assert_eq!(*navigator.0.borrow(), vec![RouteTarget::AdminDashboard]);
    }

    #[test]
    fn loading_flicker_does_not_refire() {
        let navigator = Recorder::default();
        let mut controller = RedirectController::new();
        let snapshot = IdentitySnapshot::signed_in(UserRef::new("u1"), None);

        controller.observe(&snapshot, &navigator);
        controller.observe(&IdentitySnapshot::loading(), &navigator);
        controller.observe(&snapshot, &navigator);

        assert_eq!(*navigator.0.borrow(), vec![RouteTarget::GuestDashboard]);
    }

    #[test]
    fn new_tuple_fires_again() {
        let navigator = Recorder::default();
        let mut controller = RedirectController::new();

        controller.observe(
            &IdentitySnapshot::signed_in(UserRef::new("u1"), None),
            &navigator,
        );
        controller.observe(
            &IdentitySnapshot::signed_in(UserRef::new("u1"), Some(Role::Admin)),
            &navigator,
        );
        controller.observe(&IdentitySnapshot::signed_out(), &navigator);

        assert_eq!(
            *navigator.0.borrow(),
            vec![
                RouteTarget::GuestDashboard,
                RouteTarget::AdminDashboard,
                RouteTarget::SignIn
            ]
        );
    }

    #[test]
    fn reset_allows_renavigation() {
        let navigator = Recorder::default();
        let mut controller = RedirectController::new();
        let snapshot = IdentitySnapshot::signed_out();

        controller.observe(&snapshot, &navigator);
        controller.reset();
        controller.observe(&snapshot, &navigator);

        assert_eq!(navigator.0.borrow().len(), 2);
    }
}
