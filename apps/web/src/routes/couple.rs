//! Private area for the couple, available only when the `couple-area` flag is on.

use crate::{
    app_lib::config::AppConfig,
    components::AppShell,
    features::auth::RequireRole,
    routes::NotFoundPage,
};
use gatekeeper::{FeatureFlag, Role};
use leptos::prelude::*;

#[component]
pub fn CouplePage() -> impl IntoView {
    if !AppConfig::load().features.is_enabled(FeatureFlag::CoupleArea) {
        return view! { <NotFoundPage /> }.into_any();
    }

    view! {
        <AppShell>
            <RequireRole required=Role::Couple children=ToChildren::to_children(move || view! {
                <div class="space-y-4">
                    <h1 class="text-2xl font-serif text-gray-900 dark:text-white">"Just the two of you"</h1>
                    <p class="text-sm text-gray-500">
                        "Planning notes, vendor contacts, and the seating chart draft live here."
                    </p>
                </div>
            }) />
        </AppShell>
    }
    .into_any()
}
