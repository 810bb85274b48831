//! Identity provider context for the frontend. The provider publishes a fresh
//! [`IdentitySnapshot`] on every auth change and keeps the snapshot loading
//! until both the session and the role have resolved, so gates never see a
//! signed-in user with a role that is merely "not fetched yet".

use crate::features::auth::client;
use gatekeeper::{IdentitySnapshot, Role, UserRef};
use leptos::{prelude::*, task::spawn_local};
use tracing::{debug, warn};

/// Identity context shared through Leptos.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub identity: RwSignal<IdentitySnapshot>,
    pub is_authenticated: Signal<bool>,
    generation: StoredValue<u64>,
}

impl AuthContext {
    fn new(identity: RwSignal<IdentitySnapshot>) -> Self {
        let is_authenticated = Signal::derive(move || {
            identity.with(|snapshot| !snapshot.is_loading && snapshot.user.is_some())
        });
        Self {
            identity,
            is_authenticated,
            generation: StoredValue::new(0),
        }
    }

    /// Replaces the current snapshot wholesale. Any lookup started before this
    /// call is stale afterwards and its result is dropped.
    pub fn publish(&self, snapshot: IdentitySnapshot) {
        self.generation.update_value(|generation| *generation += 1);
        debug!(
            loading = snapshot.is_loading,
            user_id = snapshot.user.as_ref().map_or("-", |user| user.id.as_str()),
            role = snapshot.role_kind().map_or("-", Role::as_str),
            "identity snapshot published"
        );
        self.identity.set(snapshot);
    }

    /// Generation to hand to [`Self::publish_if_current`] from an async lookup.
    fn ticket(&self) -> u64 {
        self.generation.get_value()
    }

    /// Publishes `snapshot` only if nothing was published since `ticket` was
    /// taken. Returns whether it was published.
    fn publish_if_current(&self, ticket: u64, snapshot: IdentitySnapshot) -> bool {
        if self.ticket() != ticket {
            debug!(
                loading = snapshot.is_loading,
                "dropping identity lookup superseded by a newer snapshot"
            );
            return false;
        }
        self.publish(snapshot);
        true
    }

    /// Resolves the role for a user who just signed in. The snapshot stays
    /// loading while the role is fetched.
    pub fn complete_sign_in(&self, user: UserRef) {
        self.publish(IdentitySnapshot::loading());
        let auth = *self;
        let ticket = auth.ticket();
        spawn_local(async move {
            let role = fetch_role().await;
            auth.publish_if_current(ticket, IdentitySnapshot::signed_in(user, role));
        });
    }

    /// Clears the identity, typically after sign-out.
    pub fn clear(&self) {
        self.publish(IdentitySnapshot::signed_out());
    }
}

/// Resolves the session and then the role. Backend failures resolve to signed
/// out rather than leaving the snapshot loading.
async fn hydrate() -> IdentitySnapshot {
    match client::fetch_session().await {
        Ok(Some(session)) => {
            let user = session.into_user();
            let role = fetch_role().await;
            IdentitySnapshot::signed_in(user, role)
        }
        Ok(None) => IdentitySnapshot::signed_out(),
        Err(err) => {
            warn!(%err, "session lookup failed; treating visitor as signed out");
            IdentitySnapshot::signed_out()
        }
    }
}

/// A failed or unrecognized role lookup yields no role, which gates treat as
/// a guest.
async fn fetch_role() -> Option<Role> {
    match client::fetch_role().await {
        Ok(Some(response)) => response.resolve().unwrap_or_else(|err| {
            warn!(%err, "unrecognized role from backend");
            None
        }),
        Ok(None) => None,
        Err(err) => {
            warn!(%err, "role lookup failed");
            None
        }
    }
}

/// Provides identity context and hydrates it once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let identity = RwSignal::new(IdentitySnapshot::loading());
    let auth = AuthContext::new(identity);
    provide_context(auth);

    let ticket = auth.ticket();
    spawn_local(async move {
        auth.publish_if_current(ticket, hydrate().await);
    });

    view! { {children()} }
}

/// Returns the current identity context, or a context that stays loading when
/// no provider is mounted.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .unwrap_or_else(|| AuthContext::new(RwSignal::new(IdentitySnapshot::loading())))
}

#[cfg(test)]
mod tests {
    use super::AuthContext;
    use gatekeeper::{IdentitySnapshot, Role, UserRef};
    use leptos::prelude::*;

    fn context() -> AuthContext {
        AuthContext::new(RwSignal::new(IdentitySnapshot::loading()))
    }

    #[test]
    fn mount_lookup_finishing_after_sign_in_is_dropped() {
        let owner = Owner::new();
        owner.set();
        let auth = context();
        let mount_ticket = auth.ticket();

        let signed_in = IdentitySnapshot::signed_in(UserRef::new("u1"), Some(Role::Guest));
        auth.publish(signed_in.clone());

        assert!(!auth.publish_if_current(mount_ticket, IdentitySnapshot::signed_out()));
        assert_eq!(auth.identity.get_untracked().key(), signed_in.key());
    }

    #[test]
    fn role_lookup_finishing_after_sign_out_is_dropped() {
        let owner = Owner::new();
        owner.set();
        let auth = context();
        auth.publish(IdentitySnapshot::loading());
        let role_ticket = auth.ticket();

        auth.clear();

        let late = IdentitySnapshot::signed_in(UserRef::new("u1"), Some(Role::Admin));
        assert!(!auth.publish_if_current(role_ticket, late));
        assert_eq!(
            auth.identity.get_untracked().key(),
            IdentitySnapshot::signed_out().key()
        );
    }

    #[test]
    fn current_lookup_is_published() {
        let owner = Owner::new();
        owner.set();
        let auth = context();
        let ticket = auth.ticket();

        let resolved = IdentitySnapshot::signed_in(UserRef::new("u2"), None);
        assert!(auth.publish_if_current(ticket, resolved.clone()));
        assert_eq!(auth.identity.get_untracked().key(), resolved.key());
        assert!(auth.is_authenticated.get_untracked());
    }
}
