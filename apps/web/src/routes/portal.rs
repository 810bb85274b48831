//! Dashboard entry point. Visitors land here after signing in or following the
//! invitation link; the page waits for the identity provider and then replaces
//! itself with the dashboard their role maps to, or with sign-in.

use crate::{
    components::{AppShell, Spinner},
    features::auth::{navigation::use_replace_navigator, state::use_auth},
};
use gatekeeper::{Observation, RedirectController};
use leptos::prelude::*;

/// Renders a loading indicator while identity is unknown and performs exactly
/// one replace-style navigation per resolved identity.
#[component]
pub fn DashboardRedirect() -> impl IntoView {
    let auth = use_auth();
    let navigator = StoredValue::new_local(use_replace_navigator());
    let controller = StoredValue::new_local(RedirectController::new());
    let observation = RwSignal::new(Observation::Waiting);

    Effect::new(move |_| {
        let snapshot = auth.identity.get();
        let (Some(navigate), Some(mut redirect)) =
            (navigator.try_read_value(), controller.try_write_value())
        else {
            return;
        };
        observation.set(redirect.observe(&snapshot, &*navigate));
    });

    view! {
        <AppShell>
            <Show when=move || observation.get().shows_placeholder()>
                <div class="flex justify-center items-center min-h-[50vh]" aria-busy="true">
                    <Spinner />
                </div>
            </Show>
        </AppShell>
    }
}
