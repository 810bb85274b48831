//! Guest dashboard. Sections follow the site feature flags; the schedule opens
//! in a dismissible overlay.

use crate::{
    app_lib::config::AppConfig,
    components::{Alert, AlertKind, AppShell, Button, Overlay},
    features::auth::RequireRole,
};
use gatekeeper::{FeatureFlag, Role};
use leptos::prelude::*;

const CARD: &str = "p-6 bg-white dark:bg-gray-800 rounded-xl border border-rose-100 dark:border-gray-700 shadow-sm space-y-2";

const SCHEDULE: [(&str, &str); 4] = [
    ("15:00", "Ceremony in the garden"),
    ("16:00", "Drinks on the terrace"),
    ("18:30", "Dinner"),
    ("21:00", "Dancing"),
];

#[component]
pub fn GuestDashboardPage() -> impl IntoView {
    let features = AppConfig::load().features;
    let (schedule_open, set_schedule_open) = signal(false);
    let close_schedule = Callback::new(move |()| set_schedule_open.set(false));

    view! {
        <AppShell>
            <RequireRole required=Role::Guest children=ToChildren::to_children(move || view! {
                <div class="space-y-6">
                    <h1 class="text-2xl font-serif text-gray-900 dark:text-white">"Welcome"</h1>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <div class=CARD>
                            <h2 class="font-semibold text-gray-900 dark:text-white">"The day"</h2>
                            <p class="text-sm text-gray-500">"Everything happens in one place, from the vows to the last dance."</p>
                            <Button on_click=Callback::new(move |()| set_schedule_open.set(true))>
                                "View schedule"
                            </Button>
                        </div>
                        {features.is_enabled(FeatureFlag::Rsvp).then(|| view! {
                            <div class=CARD>
                                <h2 class="font-semibold text-gray-900 dark:text-white">"RSVP"</h2>
                                <p class="text-sm text-gray-500">"Let us know if you can make it and about any dietary needs."</p>
                            </div>
                        })}
                        {features.is_enabled(FeatureFlag::Gallery).then(|| view! {
                            <div class=CARD>
                                <h2 class="font-semibold text-gray-900 dark:text-white">"Gallery"</h2>
                                <p class="text-sm text-gray-500">"Photos from the engagement and, afterwards, the day itself."</p>
                            </div>
                        })}
                        {features.is_enabled(FeatureFlag::Registry).then(|| view! {
                            <div class=CARD>
                                <h2 class="font-semibold text-gray-900 dark:text-white">"Registry"</h2>
                                <p class="text-sm text-gray-500">"Your presence is the present, but if you insist."</p>
                            </div>
                        })}
                    </div>
                    {(!features.is_enabled(FeatureFlag::Rsvp)).then(|| view! {
                        <Alert kind=AlertKind::Info message="RSVPs are closed.".to_string() />
                    })}
                    <Overlay is_open=schedule_open on_close=close_schedule>
                        <div
                            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/50"
                            on:click=move |_| close_schedule.run(())
                        >
                            <div
                                class="bg-white dark:bg-gray-800 rounded-xl shadow-xl w-full max-w-md p-6 space-y-4"
                                role="dialog"
                                aria-modal="true"
                                on:click=|ev| ev.stop_propagation()
                            >
                                <h2 class="text-lg font-semibold text-gray-900 dark:text-white">"Schedule"</h2>
                                <ul class="divide-y divide-gray-100 dark:divide-gray-700">
                                    {SCHEDULE
                                        .iter()
                                        .map(|(time, item)| view! {
                                            <li class="py-2 flex justify-between text-sm">
                                                <span class="font-mono text-gray-500">{*time}</span>
                                                <span class="text-gray-900 dark:text-white">{*item}</span>
                                            </li>
                                        })
                                        .collect_view()}
                                </ul>
                                <Button on_click=close_schedule>"Close"</Button>
                            </div>
                        </div>
                    </Overlay>
                </div>
            }) />
        </AppShell>
    }
}
