use gatekeeper::{
    IdentitySnapshot, Navigator, Observation, RedirectController, Role, RoleRef, RouteTarget,
    UserRef,
};
use std::cell::RefCell;

#[derive(Default)]
struct RecordingNavigator {
    calls: RefCell<Vec<&'static str>>,
}

impl Navigator for RecordingNavigator {
    fn navigate_replace(&self, target: RouteTarget) {
        self.calls.borrow_mut().push(target.name());
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

#[test]
fn loading_then_signed_in_without_role_lands_on_guest_dashboard() {
    init_tracing();
    let navigator = RecordingNavigator::default();
    let mut controller = RedirectController::new();

    let waiting = controller.observe(&IdentitySnapshot::loading(), &navigator);
    assert!(waiting.shows_placeholder());
    assert!(navigator.calls.borrow().is_empty());

    let resolved = IdentitySnapshot::signed_in(UserRef::new("u1"), None);
    let observation = controller.observe(&resolved, &navigator);

    assert_eq!(observation, Observation::Navigated(RouteTarget::GuestDashboard));
    assert!(!observation.shows_placeholder());
    assert_eq!(*navigator.calls.borrow(), vec!["guest-dashboard"]);
}

#[test]
fn signed_out_navigates_to_sign_in_exactly_once() {
    init_tracing();
    let navigator = RecordingNavigator::default();
    let mut controller = RedirectController::new();
    let snapshot = IdentitySnapshot::signed_out();

    controller.observe(&snapshot, &navigator);
    controller.observe(&snapshot, &navigator);

    assert_eq!(*navigator.calls.borrow(), vec!["sign-in"]);
}

#[test]
fn identical_resolved_snapshot_is_idempotent() {
    init_tracing();
    let navigator = RecordingNavigator::default();
    let mut controller = RedirectController::new();
    let snapshot = IdentitySnapshot::signed_in(UserRef::new("planner-1"), Some(Role::Admin));

    let first = controller.observe(&snapshot, &navigator);
    let second = controller.observe(&snapshot.clone(), &navigator);

    assert_eq!(first.target(), Some(RouteTarget::AdminDashboard));
    assert_eq!(second, Observation::Settled(RouteTarget::AdminDashboard));
    assert_eq!(navigator.calls.borrow().len(), 1);
}

#[test]
fn role_arriving_late_never_flashes_sign_in() {
    init_tracing();
    let navigator = RecordingNavigator::default();
    let mut controller = RedirectController::new();

    // Session known, role fetch still in flight: the provider keeps loading.
    let pending_role = IdentitySnapshot {
        is_loading: true,
        user: Some(UserRef::new("u7")),
        role: None,
    };
    controller.observe(&IdentitySnapshot::loading(), &navigator);
    controller.observe(&pending_role, &navigator);
    controller.observe(
        &IdentitySnapshot::signed_in(UserRef::new("u7"), Some(Role::Admin)),
        &navigator,
    );

    assert_eq!(*navigator.calls.borrow(), vec!["admin-dashboard"]);
}

#[test]
fn signed_out_with_orphan_role_does_not_navigate_again() {
    let navigator = RecordingNavigator::default();
    let mut controller = RedirectController::new();
    let orphan = IdentitySnapshot {
        is_loading: false,
        user: None,
        role: Some(RoleRef::new(Role::Admin)),
    };

    controller.observe(&IdentitySnapshot::signed_out(), &navigator);
    let observation = controller.observe(&orphan, &navigator);

    assert_eq!(observation, Observation::Settled(RouteTarget::SignIn));
    assert_eq!(*navigator.calls.borrow(), vec!["sign-in"]);
}

#[test]
fn closure_navigator_receives_route_paths() {
    let seen = RefCell::new(Vec::new());
    let navigator = |target: RouteTarget| seen.borrow_mut().push(target.path());
    let mut controller = RedirectController::new();

    controller.observe(
        &IdentitySnapshot::signed_in(UserRef::new("u2"), Some(Role::Couple)),
        &navigator,
    );

    assert_eq!(*seen.borrow(), vec!["/dashboard"]);
}
