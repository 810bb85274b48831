use crate::{
    components::{RestrictedAccess, Spinner},
    features::auth::{navigation::use_replace_navigator, state::use_auth},
};
use gatekeeper::{authorize, decide, AccessDecision, Navigator, Role, RouteTarget};
use leptos::prelude::*;
use tracing::debug;

/// Renders `children` only for users whose role satisfies `required`.
///
/// Signed-out visitors are sent to sign-in; signed-in users without the role
/// get the restricted-access interstitial, whose dismissal sends them wherever
/// the dashboard gate would. UX-only guard; the backend enforces access on
/// every data request.
#[component]
pub fn RequireRole(required: Role, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigator = StoredValue::new_local(use_replace_navigator());
    let access = Memo::new(move |_| auth.identity.with(|snapshot| authorize(snapshot, required)));

    Effect::new(move |_| {
        if access.get() == AccessDecision::SignIn {
            if let Some(navigate) = navigator.try_read_value() {
                navigate.navigate_replace(RouteTarget::SignIn);
            }
        }
    });

    let on_close = Callback::new(move |()| {
        let destination = auth
            .identity
            .with_untracked(|snapshot| decide(snapshot).destination());
        if let (Some(target), Some(navigate)) = (destination, navigator.try_read_value()) {
            debug!(route = target.name(), "restricted access dismissed");
            navigate.navigate_replace(target);
        }
    });

    view! {
        {move || match access.get() {
            AccessDecision::Granted => children().into_any(),
            AccessDecision::Restricted => view! { <RestrictedAccess on_close=on_close /> }.into_any(),
            AccessDecision::Wait | AccessDecision::SignIn => {
                view! {
                    <div class="flex justify-center items-center min-h-[50vh]">
                        <Spinner />
                    </div>
                }
                .into_any()
            }
        }}
    }
}
