//! Keyboard and scroll lock lifecycle for dismissible overlays.
//!
//! The global cancel-key listener and the document scroll lock are process-wide
//! singletons. [`OverlayController`] owns both for as long as its overlay is
//! open and always acquires and releases them together. Only one controller is
//! expected to hold them at a time; nested overlays are not coordinated.

use tracing::debug;

/// Key values that dismiss an overlay.
const CANCEL_KEYS: [&str; 2] = ["Escape", "Esc"];

/// Whether a `KeyboardEvent.key` value is a cancel key.
#[must_use]
pub fn is_cancel_key(key: &str) -> bool {
    CANCEL_KEYS.contains(&key)
}

/// Document-level resources an overlay needs.
pub trait OverlayHost {
    /// Handle for a bound key listener, returned to [`Self::unbind_key_listener`].
    type Listener;

    /// Binds a global key listener. `on_key` receives each event's key value.
    fn bind_key_listener(&mut self, on_key: Box<dyn Fn(&str)>) -> Self::Listener;

    fn unbind_key_listener(&mut self, listener: Self::Listener);

    fn lock_scroll(&mut self);

    fn unlock_scroll(&mut self);
}

enum LockState<L> {
    Detached,
    Attached(L),
}

/// Reactive subscription keyed on an overlay's `is_open` flag.
///
/// The controller never owns `is_open`; it observes it and calls the caller's
/// close callback on cancel keys. Dropping an attached controller releases
/// everything it holds.
pub struct OverlayController<H: OverlayHost> {
    host: H,
    state: LockState<H::Listener>,
}

impl<H: OverlayHost> OverlayController<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            state: LockState::Detached,
        }
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        matches!(self.state, LockState::Attached(_))
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Re-observes `is_open`. A false to true change binds the listener and
    /// locks scroll, true to false releases both, anything else is a no-op.
    ///
    /// `on_close` runs once per cancel key press while attached. It must not
    /// assume the overlay closes; the controller detaches only when it later
    /// observes `is_open == false`.
    pub fn observe<F>(&mut self, is_open: bool, on_close: F)
    where
        F: Fn() + 'static,
    {
        match (self.is_attached(), is_open) {
            (false, true) => self.attach(on_close),
            (true, false) => self.detach(),
            _ => {}
        }
    }

    fn attach<F>(&mut self, on_close: F)
    where
        F: Fn() + 'static,
    {
        let listener = self.host.bind_key_listener(Box::new(move |key: &str| {
            if is_cancel_key(key) {
                on_close();
            }
        }));
        self.host.lock_scroll();
        self.state = LockState::Attached(listener);
        debug!("overlay attached; scroll locked");
    }

    /// Releases the listener and scroll lock if held. Safe to call repeatedly.
    pub fn detach(&mut self) {
        if let LockState::Attached(listener) =
            std::mem::replace(&mut self.state, LockState::Detached)
        {
            self.host.unbind_key_listener(listener);
            self.host.unlock_scroll();
            debug!("overlay detached; scroll released");
        }
    }
}

impl<H: OverlayHost> Drop for OverlayController<H> {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    #[derive(Default)]
    struct CountingHost {
        bound: Option<Box<dyn Fn(&str)>>,
        binds: usize,
        unbinds: usize,
        locked: bool,
    }

    impl OverlayHost for CountingHost {
        type Listener = ();

        fn bind_key_listener(&mut self, on_key: Box<dyn Fn(&str)>) -> Self::Listener {
            self.bound = Some(on_key);
            self.binds += 1;
        }

        fn unbind_key_listener(&mut self, _listener: Self::Listener) {
            self.bound = None;
            self.unbinds += 1;
        }

        fn lock_scroll(&mut self) {
            self.locked = true;
        }

        fn unlock_scroll(&mut self) {
            self.locked = false;
        }
    }

    impl CountingHost {
        fn press(&self, key: &str) {
            if let Some(handler) = &self.bound {
                handler(key);
            }
        }
    }

    #[test]
    fn cancel_keys() {
        assert!(is_cancel_key("Escape"));
        assert!(is_cancel_key("Esc"));
        assert!(!is_cancel_key("Enter"));
        assert!(!is_cancel_key("escape"));
    }

    #[test]
    fn repeated_open_does_not_rebind() {
        let mut controller = OverlayController::new(CountingHost::default());

        controller.observe(true, || {});
        controller.observe(true, || {});

        assert_eq!(controller.host().binds, 1);
        assert!(controller.host().locked);
    }

    #[test]
    fn only_cancel_keys_close() {
        let closes = Rc::new(Cell::new(0));
        let mut controller = OverlayController::new(CountingHost::default());
        let counter = Rc::clone(&closes);
        controller.observe(true, move || counter.set(counter.get() + 1));

        controller.host().press("a");
        controller.host().press("Escape");
        controller.host().press("Escape");

        assert_eq!(closes.get(), 2);
        assert!(controller.is_attached());
    }

    #[test]
    fn detach_is_idempotent() {
        let mut controller = OverlayController::new(CountingHost::default());
        controller.observe(true, || {});

        controller.detach();
        controller.detach();
        controller.observe(false, || {});

        assert_eq!(controller.host().unbinds, 1);
        assert!(!controller.host().locked);
        assert!(controller.host().bound.is_none());
    }
}
