//! Browser paths for every route. Gate destinations come from
//! [`RouteTarget::path`] so redirects and the route table cannot drift apart.

use gatekeeper::RouteTarget;

pub const HOME: &str = "/";
pub const PORTAL: &str = "/portal";
pub const SIGN_IN: &str = RouteTarget::SignIn.path();
pub const GUEST_DASHBOARD: &str = RouteTarget::GuestDashboard.path();
pub const ADMIN_DASHBOARD: &str = RouteTarget::AdminDashboard.path();
pub const COUPLE: &str = "/couple";
