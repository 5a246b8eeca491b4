use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// Email and password pair used by sign-up and sign-in.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Payload for `token?grant_type=refresh_token`.
#[derive(Debug, Clone, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Single-email payload used by magic link, recovery, and invite.
#[derive(Debug, Clone, Serialize)]
pub struct EmailRequest {
    pub email: String,
}

/// Payload for OTP verification.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub token: String,
    #[serde(rename = "type")]
    pub otp_type: OtpType,
}

/// The challenge flow an OTP belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpType {
    Signup,
    Magiclink,
    Recovery,
    Invite,
    Email,
}

impl fmt::Display for OtpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signup => write!(f, "signup"),
            Self::Magiclink => write!(f, "magiclink"),
            Self::Recovery => write!(f, "recovery"),
            Self::Invite => write!(f, "invite"),
            Self::Email => write!(f, "email"),
        }
    }
}

/// Payload for `reset?grant_type=reset_password`.
#[derive(Debug, Clone, Serialize)]
pub struct PasswordResetRequest {
    pub token: String,
    pub password: String,
}

/// Attributes accepted by the user-update endpoint. Absent fields are left
/// untouched by the backend.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpdateUserParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn credentials_serialize_to_email_password() {
        let creds = Credentials {
            email: "a@b.c".into(),
            password: "pw".into(),
        };
        assert_eq!(
            serde_json::to_value(&creds).unwrap(),
            json!({"email": "a@b.c", "password": "pw"})
        );
    }

    #[test]
    fn verify_otp_renames_type_field() {
        let req = VerifyOtpRequest {
            email: "a@b.c".into(),
            token: "123456".into(),
            otp_type: OtpType::Magiclink,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"email": "a@b.c", "token": "123456", "type": "magiclink"})
        );
    }

    #[test]
    fn update_user_skips_absent_fields() {
        let params = UpdateUserParams {
            password: Some("new-pw".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"password": "new-pw"})
        );
    }

    #[test]
    fn otp_type_display_matches_wire_format() {
        for otp in [
            OtpType::Signup,
            OtpType::Magiclink,
            OtpType::Recovery,
            OtpType::Invite,
            OtpType::Email,
        ] {
            let wire = serde_json::to_value(otp).unwrap();
            assert_eq!(wire, json!(otp.to_string()));
        }
    }
}
