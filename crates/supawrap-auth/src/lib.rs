//! Auth and user-management operations for a Supabase-style GoTrue API.
//!
//! This crate hangs the auth surface off the core [`Client`] via the
//! [`AuthApi`] extension trait, so one client object carries sign-up,
//! sign-in, token refresh, OTP, and user-profile calls alongside the raw
//! request primitives.
//!
//! # Usage
//!
//! ```ignore
//! use supawrap_core::{Client, ClientConfig};
//! use supawrap_auth::AuthApi;
//!
//! let client = Client::new(ClientConfig::new(url, anon_key))?;
//! let session = client.sign_in("user@example.com", "password").await?;
//! client.set_token(session.access_token.clone());
//! let user = client.get_user().await?;
//! ```

pub mod api;
pub mod endpoints;
pub mod params;
pub mod types;

pub use api::AuthApi;
pub use params::{
    Credentials, EmailRequest, OtpType, PasswordResetRequest, RefreshTokenRequest,
    UpdateUserParams, VerifyOtpRequest,
};
pub use types::Session;
