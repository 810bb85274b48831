//! Host for dismissible overlays. While open, the overlay holds the global
//! cancel-key listener and the body scroll lock; both are released together
//! when it closes or when its owner is torn down.

use gatekeeper::{OverlayController, OverlayHost};
use leptos::{ev, prelude::*};
use leptos_dom::helpers::{window_event_listener, WindowListenerHandle};
use tracing::warn;

/// Browser implementation of the overlay singletons.
pub struct WebOverlayHost;

impl OverlayHost for WebOverlayHost {
    type Listener = WindowListenerHandle;

    fn bind_key_listener(&mut self, on_key: Box<dyn Fn(&str)>) -> WindowListenerHandle {
        window_event_listener(ev::keydown, move |event| on_key(&event.key()))
    }

    fn unbind_key_listener(&mut self, listener: WindowListenerHandle) {
        listener.remove();
    }

    fn lock_scroll(&mut self) {
        set_body_overflow(Some("hidden"));
    }

    fn unlock_scroll(&mut self) {
        set_body_overflow(None);
    }
}

fn set_body_overflow(value: Option<&str>) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        warn!("document body unavailable; scroll lock skipped");
        return;
    };
    let style = body.style();
    let result = match value {
        Some(value) => style.set_property("overflow", value),
        None => style.remove_property("overflow").map(|_| ()),
    };
    if let Err(err) = result {
        warn!(?err, "failed to update body scroll lock");
    }
}

/// Renders `children` while `is_open` is true and calls `on_close` when a
/// cancel key is pressed. The overlay never closes itself; the owner flips
/// `is_open` in response to `on_close`.
#[component]
pub fn Overlay(
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let controller = StoredValue::new_local(OverlayController::new(WebOverlayHost));

    Effect::new(move |_| {
        let open = is_open.get();
        if let Some(mut controller) = controller.try_write_value() {
            controller.observe(open, move || on_close.run(()));
        }
    });

    on_cleanup(move || {
        if let Some(mut controller) = controller.try_write_value() {
            controller.detach();
        }
    });

    view! {
        <Show when=move || is_open.get()>
            {children()}
        </Show>
    }
}
