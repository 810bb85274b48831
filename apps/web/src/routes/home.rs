//! Public landing page. Nothing here depends on identity.

use crate::{components::AppShell, routes::paths};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <AppShell>
            <section class="max-w-2xl mx-auto text-center space-y-6 py-12">
                <h1 class="text-4xl font-serif text-gray-900 dark:text-white">"We're getting married"</h1>
                <p class="text-gray-500 dark:text-gray-400">
                    "Sign in with the email from your invitation to see the schedule, travel notes, and more."
                </p>
                <A
                    href={paths::PORTAL}
                    {..}
                    class="inline-flex items-center px-6 py-3 text-base font-medium text-white bg-rose-600 rounded-lg hover:bg-rose-700 transition-all shadow-md"
                >
                    "Open my invitation"
                </A>
            </section>
        </AppShell>
    }
}
