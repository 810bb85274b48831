//! Auth feature module: the identity provider context, the role guard for
//! gated pages, and router-backed navigation for gate redirects. Guest email
//! addresses pass through here and must never be logged.
//!
//! Flow Overview: the provider publishes a loading snapshot, resolves the
//! session cookie, then the role, and only then publishes the resolved
//! snapshot. Gates and the dashboard entry point recompute their decision from
//! each published snapshot.

pub(crate) mod client;
mod guards;
pub(crate) mod navigation;
pub(crate) mod state;
pub(crate) mod types;

pub(crate) use guards::RequireRole;
