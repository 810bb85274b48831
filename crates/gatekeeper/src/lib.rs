//! Access gating for the wedding site frontend.
//!
//! The crate keeps every decision the UI makes about identity out of the view
//! layer: which page a signed-in guest lands on, when nothing may happen yet
//! because the identity provider is still loading, and how a dismissible overlay
//! acquires and releases the document-wide key listener and scroll lock.
//!
//! Nothing here touches the DOM. The frontend supplies a [`Navigator`] and an
//! [`OverlayHost`]; tests supply recording fakes.
//!
//! Client-side gating is a UX layer only. The hosted backend enforces access on
//! every data request.

mod error;
pub mod features;
pub mod gate;
pub mod identity;
pub mod interstitial;
pub mod overlay;
pub mod redirect;
pub mod route;

pub use error::{Error, Result};
pub use features::{FeatureFlag, FeatureFlags};
pub use gate::{authorize, decide, AccessDecision, GateDecision};
pub use identity::{IdentityKey, IdentitySnapshot, Role, RoleRef, UserRef};
pub use overlay::{is_cancel_key, OverlayController, OverlayHost};
pub use redirect::{Observation, RedirectController};
pub use route::{Navigator, RouteTarget};
