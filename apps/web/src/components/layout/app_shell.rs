//! Shared layout wrapper with the site header, sign-in/out control, and the
//! content container. Navigation is client-side only; the backend enforces
//! access on every data request.

use crate::{
    app_lib::build_info,
    features::auth::{client, state::use_auth},
    routes::paths,
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::use_location};
use tracing::warn;

const NAV_LINK: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:hover:text-rose-600 md:p-0 dark:text-white";

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let pathname = use_location().pathname;
    let on_sign_in = move || pathname.get() == paths::SIGN_IN;

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-rose-100">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href={paths::HOME} {..} class="font-serif text-xl text-gray-900 dark:text-white">
                        "Our Wedding"
                    </A>
                    <ul class="font-medium flex flex-row space-x-8">
                        <Show when=move || is_authenticated.get()>
                            <li>
                                <A href={paths::PORTAL} {..} class=NAV_LINK>
                                    "My Dashboard"
                                </A>
                            </li>
                        </Show>
                        <li>
                            <Show
                                when=move || is_authenticated.get()
                                fallback=move || {
                                    view! {
                                        <Show when=move || !on_sign_in()>
                                            <A href={paths::SIGN_IN} {..} class=NAV_LINK>
                                                "Sign In"
                                            </A>
                                        </Show>
                                    }
                                }
                            >
                                <button
                                    type="button"
                                    class=NAV_LINK
                                    on:click=move |_| {
                                        spawn_local(async move {
                                            if let Err(err) = client::sign_out().await {
                                                warn!(%err, "sign-out request failed");
                                            }
                                            auth.clear();
                                        });
                                    }
                                >
                                    "Sign Out"
                                </button>
                            </Show>
                        </li>
                    </ul>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
            <footer class="p-4 text-center text-xs text-gray-400">
                "build " {build_info::git_commit_hash()}
            </footer>
        </div>
    }
}
