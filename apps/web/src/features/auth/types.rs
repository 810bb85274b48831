//! Request and response types for identity calls. Responses carry guest email
//! addresses, so they must never be logged.

use gatekeeper::{Role, UserRef};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Session summary returned by the backend to hydrate the identity snapshot.
pub struct SessionResponse {
    pub user_id: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl SessionResponse {
    pub fn into_user(self) -> UserRef {
        UserRef {
            id: self.user_id,
            email: self.email,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Role lookup result. The role is kept as a string so an unknown value from
/// the backend degrades to "no role" instead of failing the whole hydration.
pub struct RoleResponse {
    pub role: Option<String>,
}

impl RoleResponse {
    pub fn resolve(&self) -> Result<Option<Role>, gatekeeper::Error> {
        self.role.as_deref().map(str::parse::<Role>).transpose()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_response_without_email() {
        let session: SessionResponse =
            serde_json::from_str(r#"{"user_id":"u-123"}"#).expect("Failed to deserialize");
        let user = session.into_user();
        assert_eq!(user.id, "u-123");
        assert!(user.email.is_none());
    }

    #[test]
    fn role_response_resolves_known_roles() {
        let response: RoleResponse =
            serde_json::from_str(r#"{"role":"couple"}"#).expect("Failed to deserialize");
        assert_eq!(response.resolve(), Ok(Some(Role::Couple)));

        let empty: RoleResponse =
            serde_json::from_str(r#"{"role":null}"#).expect("Failed to deserialize");
        assert_eq!(empty.resolve(), Ok(None));
    }

    #[test]
    fn role_response_rejects_unknown_roles() {
        let response = RoleResponse {
            role: Some("florist".to_string()),
        };
        assert!(response.resolve().is_err());
    }
}
