//! Blocking interstitial shown in place of a gated page when the signed-in
//! user lacks the required role.

use crate::components::{overlay::Overlay, Button};
use gatekeeper::interstitial::{
    dismisses, ClickTarget, DISMISS_LABEL, RESTRICTED_MESSAGE, RESTRICTED_TITLE,
};
use leptos::prelude::*;

/// Renders the restricted-access overlay. Clicking the scrim, the dismiss
/// button, or pressing a cancel key calls `on_close`.
#[component]
pub fn RestrictedAccess(on_close: Callback<()>) -> impl IntoView {
    let click = move |target: ClickTarget| {
        if dismisses(target) {
            on_close.run(());
        }
    };

    view! {
        <Overlay is_open=true on_close=on_close>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/50 backdrop-blur-sm"
                role="presentation"
                on:click=move |_| click(ClickTarget::Scrim)
            >
                <div
                    class="bg-white dark:bg-gray-800 rounded-xl shadow-xl border border-gray-200 dark:border-gray-700 w-full max-w-md p-8 text-center"
                    role="alertdialog"
                    aria-modal="true"
                    aria-labelledby="restricted-access-title"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <span class="material-symbols-outlined text-6xl text-rose-500 mb-4">"lock"</span>
                    <h2
                        id="restricted-access-title"
                        class="text-2xl font-bold text-gray-900 dark:text-white mb-2"
                    >
                        {RESTRICTED_TITLE}
                    </h2>
                    <p class="text-gray-500 dark:text-gray-400 mb-6 text-sm">{RESTRICTED_MESSAGE}</p>
                    <Button on_click=Callback::new(move |()| click(ClickTarget::DismissButton))>
                        {DISMISS_LABEL}
                    </Button>
                </div>
            </div>
        </Overlay>
    }
}
