use async_trait::async_trait;
use tracing::debug;

use supawrap_core::{Client, HttpMethod, ResponseBody, Result};

use crate::endpoints;
use crate::params::{
    Credentials, EmailRequest, PasswordResetRequest, RefreshTokenRequest, UpdateUserParams,
    VerifyOtpRequest,
};
use crate::types::Session;

/// Auth and user operations, implemented for [`Client`].
///
/// Each method is a payload/endpoint builder delegating to one of the two
/// request primitives. `sign_in` and `refresh_token` go through the strict
/// token primitive and return a decoded [`Session`]; everything else uses
/// the lenient generic primitive and returns the parsed [`ResponseBody`].
///
/// None of these methods touch the stored bearer token. After a successful
/// sign-in, call [`Client::set_token`] with the session's access token to
/// authenticate subsequent requests.
#[async_trait]
pub trait AuthApi {
    /// Register a new user with email and password.
    async fn sign_up(&self, email: &str, password: &str) -> Result<ResponseBody>;

    /// Exchange email and password for a session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session>;

    /// Exchange a refresh token for a new session.
    async fn refresh_token(&self, refresh_token: &str) -> Result<Session>;

    /// Email a one-time sign-in link.
    async fn send_magic_link(&self, email: &str) -> Result<ResponseBody>;

    /// Email a password-recovery link.
    async fn send_password_recovery(&self, email: &str) -> Result<ResponseBody>;

    /// Verify a one-time password against its challenge.
    async fn verify_otp(&self, request: VerifyOtpRequest) -> Result<ResponseBody>;

    /// Fetch the user identified by the current bearer token.
    async fn get_user(&self) -> Result<ResponseBody>;

    /// Update attributes of the user identified by the current bearer token.
    async fn update_user(&self, params: UpdateUserParams) -> Result<ResponseBody>;

    /// Invalidate the current session server-side.
    async fn sign_out(&self) -> Result<ResponseBody>;

    /// Send an invitation email. Requires a privileged API key.
    async fn invite_user(&self, email: &str) -> Result<ResponseBody>;

    /// Complete a password reset with the token from the recovery email.
    async fn reset_password(&self, token: &str, new_password: &str) -> Result<ResponseBody>;
}

#[async_trait]
impl AuthApi for Client {
    async fn sign_up(&self, email: &str, password: &str) -> Result<ResponseBody> {
        let payload = serde_json::to_value(Credentials {
            email: email.to_string(),
            password: password.to_string(),
        })?;
        self.request(HttpMethod::Post, endpoints::SIGN_UP, Some(&payload), None)
            .await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        debug!(email, "signing in with password");
        self.auth_request(
            endpoints::TOKEN_PASSWORD,
            &Credentials {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    async fn refresh_token(&self, refresh_token: &str) -> Result<Session> {
        self.auth_request(
            endpoints::TOKEN_REFRESH,
            &RefreshTokenRequest {
                refresh_token: refresh_token.to_string(),
            },
        )
        .await
    }

    async fn send_magic_link(&self, email: &str) -> Result<ResponseBody> {
        let payload = serde_json::to_value(EmailRequest {
            email: email.to_string(),
        })?;
        self.request(HttpMethod::Post, endpoints::MAGIC_LINK, Some(&payload), None)
            .await
    }

    async fn send_password_recovery(&self, email: &str) -> Result<ResponseBody> {
        let payload = serde_json::to_value(EmailRequest {
            email: email.to_string(),
        })?;
        self.request(HttpMethod::Post, endpoints::RECOVER, Some(&payload), None)
            .await
    }

    async fn verify_otp(&self, request: VerifyOtpRequest) -> Result<ResponseBody> {
        let payload = serde_json::to_value(request)?;
        self.request(HttpMethod::Post, endpoints::VERIFY, Some(&payload), None)
            .await
    }

    async fn get_user(&self) -> Result<ResponseBody> {
        self.request(HttpMethod::Get, endpoints::USER, None, None)
            .await
    }

    async fn update_user(&self, params: UpdateUserParams) -> Result<ResponseBody> {
        let payload = serde_json::to_value(params)?;
        self.request(HttpMethod::Put, endpoints::USER, Some(&payload), None)
            .await
    }

    async fn sign_out(&self) -> Result<ResponseBody> {
        self.request(HttpMethod::Post, endpoints::LOGOUT, None, None)
            .await
    }

    async fn invite_user(&self, email: &str) -> Result<ResponseBody> {
        let payload = serde_json::to_value(EmailRequest {
            email: email.to_string(),
        })?;
        self.request(HttpMethod::Post, endpoints::INVITE, Some(&payload), None)
            .await
    }

    async fn reset_password(&self, token: &str, new_password: &str) -> Result<ResponseBody> {
        let payload = serde_json::to_value(PasswordResetRequest {
            token: token.to_string(),
            password: new_password.to_string(),
        })?;
        self.request(HttpMethod::Post, endpoints::RESET, Some(&payload), None)
            .await
    }
}
