use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A session returned from the token endpoint (sign-in, refresh).
///
/// Matches the GoTrue token response. The client does not validate the
/// contents beyond decoding; fields the backend adds that are not modeled
/// here are ignored, and the modeled fields pass through without renaming.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub refresh_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    /// The user object, when the backend includes one. Kept as raw JSON; the
    /// profile endpoints return user data leniently as well.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<JsonValue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_decodes_minimal_token_response() {
        let json = r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "rt"
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.access_token, "jwt");
        assert_eq!(session.token_type, "bearer");
        assert_eq!(session.expires_in, 3600);
        assert_eq!(session.refresh_token, "rt");
        assert!(session.expires_at.is_none());
        assert!(session.user.is_none());
    }

    #[test]
    fn session_keeps_user_payload_as_raw_json() {
        let json = r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "rt",
            "expires_at": 1735689600,
            "user": {"id": "u1", "email": "a@b.c"}
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.expires_at, Some(1735689600));
        assert_eq!(session.user.unwrap()["email"], "a@b.c");
    }

    #[test]
    fn session_ignores_unknown_backend_fields() {
        let json = r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "rt",
            "provider_token": "pt"
        }"#;
        assert!(serde_json::from_str::<Session>(json).is_ok());
    }

    #[test]
    fn session_rejects_missing_access_token() {
        let json = r#"{"token_type": "bearer", "expires_in": 3600, "refresh_token": "rt"}"#;
        assert!(serde_json::from_str::<Session>(json).is_err());
    }
}
