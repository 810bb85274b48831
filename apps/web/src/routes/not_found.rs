//! 404 page for unknown routes and for sections switched off by feature flags.

use crate::{components::AppShell, routes::paths};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4 space-y-6">
                <h1 class="text-7xl font-black text-gray-200 select-none">"404"</h1>
                <p class="text-gray-500 dark:text-gray-400 max-w-sm mx-auto">
                    "The page you are looking for doesn't exist."
                </p>
                <A
                    href={paths::HOME}
                    {..}
                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-rose-600 rounded-lg hover:bg-rose-700 transition-all"
                >
                    "Go Home"
                </A>
            </div>
        </AppShell>
    }
}
