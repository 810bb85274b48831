use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AlreadySignedInPanel, AppShell, Button, Spinner};
use crate::features::auth::{client, navigation::replace_options, state::use_auth};
use crate::features::auth::types::SignInRequest;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-rose-500 focus:border-rose-500 block w-full p-2.5";

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let sign_in_action = Action::new_local(move |request: &SignInRequest| {
        let request = request.clone();
        async move { client::sign_in(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = sign_in_action.value().get() {
            match result {
                Ok(session) => {
                    auth.complete_sign_in(session.into_user());
                    navigate(paths::PORTAL, replace_options());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some(AppError::Validation(
                "Email and password are required.".to_string(),
            )));
            return;
        }

        sign_in_action.dispatch(SignInRequest {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <Show
                when=move || !auth.is_authenticated.get()
                fallback=|| view! { <AlreadySignedInPanel /> }
            >
                <form class="max-w-sm mx-auto" on:submit=on_submit>
                    <h1 class="mb-6 text-2xl font-serif text-gray-900 dark:text-white">
                        "Sign in with your invitation"
                    </h1>
                    <div class="mb-5">
                        <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="email">
                            "Email"
                        </label>
                        <input
                            id="email"
                            type="email"
                            class=INPUT_CLASS
                            autocomplete="email"
                            required
                            on:input=move |event| set_email.set(event_target_value(&event))
                        />
                    </div>
                    <div class="mb-5">
                        <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white" for="password">
                            "Password"
                        </label>
                        <input
                            id="password"
                            type="password"
                            class=INPUT_CLASS
                            autocomplete="current-password"
                            required
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                    </div>
                    <Button button_type="submit" disabled=sign_in_action.pending()>
                        "Sign In"
                    </Button>
                    {move || {
                        sign_in_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-4"><Spinner /></div> })
                    }}
                    {move || {
                        error
                            .get()
                            .map(|err| {
                                view! {
                                    <div class="mt-4">
                                        <Alert kind=AlertKind::Error message=err.to_string() />
                                    </div>
                                }
                            })
                    }}
                </form>
            </Show>
        </AppShell>
    }
}
