//! Planner dashboard for admins.

use crate::{
    app_lib::config::AppConfig,
    components::AppShell,
    features::auth::RequireRole,
    routes::paths,
};
use gatekeeper::{FeatureFlag, Role};
use leptos::prelude::*;
use leptos_router::components::A;

const CARD: &str = "group p-6 bg-white dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700 shadow-sm hover:border-rose-500 transition-all";

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let features = AppConfig::load().features;

    view! {
        <AppShell>
            <RequireRole required=Role::Admin children=ToChildren::to_children(move || view! {
                <div class="space-y-6">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            "Planner Dashboard"
                        </h1>
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            "Guest list, responses, and site sections."
                        </p>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <A href={paths::GUEST_DASHBOARD} {..} class=CARD>
                            <h2 class="font-semibold text-gray-900 dark:text-white">"Guest view"</h2>
                            <p class="text-sm text-gray-500">"See the site the way invited guests do."</p>
                        </A>
                        {features.is_enabled(FeatureFlag::CoupleArea).then(|| view! {
                            <A href={paths::COUPLE} {..} class=CARD>
                                <h2 class="font-semibold text-gray-900 dark:text-white">"Couple area"</h2>
                                <p class="text-sm text-gray-500">"Planning notes shared with the couple."</p>
                            </A>
                        })}
                    </div>
                    <ul class="text-sm text-gray-500 space-y-1">
                        {FeatureFlag::ALL
                            .into_iter()
                            .map(|flag| {
                                let state = if features.is_enabled(flag) { "on" } else { "off" };
                                view! { <li><span class="font-mono">{flag.key()}</span> ": " {state}</li> }
                            })
                            .collect_view()}
                    </ul>
                </div>
            }) />
        </AppShell>
    }
}
