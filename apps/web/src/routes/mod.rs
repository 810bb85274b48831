mod admin;
mod couple;
mod dashboard;
mod home;
mod not_found;
pub(crate) mod paths;
mod portal;
mod sign_in;

pub(crate) use admin::AdminDashboardPage;
pub(crate) use couple::CouplePage;
pub(crate) use dashboard::GuestDashboardPage;
pub(crate) use home::HomePage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use portal::DashboardRedirect;
pub(crate) use sign_in::SignInPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/portal") view=DashboardRedirect />
            <Route path=path!("/sign-in") view=SignInPage />
            <Route path=path!("/dashboard") view=GuestDashboardPage />
            <Route path=path!("/admin") view=AdminDashboardPage />
            <Route path=path!("/couple") view=CouplePage />
        </Routes>
    }
}
