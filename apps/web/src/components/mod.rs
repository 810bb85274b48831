//! Shared UI components exported for routes and features.

mod already_signed_in;
pub(crate) mod layout;
pub(crate) mod overlay;
mod restricted_access;
pub(crate) mod ui;

pub(crate) use already_signed_in::AlreadySignedInPanel;
pub(crate) use layout::AppShell;
pub(crate) use overlay::Overlay;
pub(crate) use restricted_access::RestrictedAccess;
pub(crate) use ui::{Alert, AlertKind, Button, Spinner};
