use gatekeeper::{Navigator, RouteTarget};
use leptos_router::{hooks::use_navigate, NavigateOptions};

/// Navigation options for gate redirects: replace the current entry so the
/// back button cannot return to a gated page.
pub fn replace_options() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}

/// Router-backed [`Navigator`] for the current component tree.
pub fn use_replace_navigator() -> impl Navigator + Clone + 'static {
    let navigate = use_navigate();
    move |target: RouteTarget| navigate(target.path(), replace_options())
}
