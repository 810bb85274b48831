use crate::{
    features::auth::{client, state::use_auth},
    routes::paths,
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;
use tracing::warn;

/// Renders the signed-in state for the sign-in route.
#[component]
pub fn AlreadySignedInPanel() -> impl IntoView {
    let auth = use_auth();
    let user_email = Signal::derive(move || {
        auth.identity
            .with(|snapshot| snapshot.user.as_ref().and_then(|user| user.email.clone()))
            .unwrap_or_else(|| "your invitation".to_string())
    });

    view! {
        <div class="max-w-sm mx-auto text-center space-y-6 py-8">
            <div class="space-y-2">
                <h2 class="text-xl font-bold text-gray-900 dark:text-white">
                    "Already Signed In"
                </h2>
                <p class="text-gray-500 dark:text-gray-400">
                    "You are currently signed in as "
                    <span class="font-medium text-gray-900 dark:text-gray-200">
                        {move || user_email.get()}
                    </span> "."
                </p>
            </div>
            <div class="flex flex-col gap-3">
                <A
                    href={paths::PORTAL}
                    {..}
                    class="w-full inline-flex justify-center items-center px-5 py-2.5 text-sm font-medium text-white bg-rose-600 rounded-lg hover:bg-rose-700 transition-all shadow-sm"
                >
                    "Go to my dashboard"
                </A>
                <button
                    on:click=move |_| {
                        spawn_local(async move {
                            if let Err(err) = client::sign_out().await {
                                warn!(%err, "sign-out request failed");
                            }
                            auth.clear();
                        });
                    }
                    class="w-full inline-flex justify-center items-center px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100 hover:text-rose-700 transition-all"
                >
                    "Sign Out"
                </button>
            </div>
        </div>
    }
}
