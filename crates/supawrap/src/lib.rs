//! Thin HTTP client for a Supabase-style backend-as-a-service API.
//!
//! One [`Client`] object carries the whole surface: the raw request
//! primitives, token management, the auth/user methods (feature `auth`),
//! and generic table CRUD (feature `rest`).
//!
//! ```ignore
//! use supawrap::prelude::*;
//! use serde_json::json;
//!
//! let client = Client::new(ClientConfig::new(
//!     "https://your-project.supabase.co",
//!     "your-anon-key",
//! ))?;
//!
//! let session = client.sign_in("user@example.com", "password").await?;
//! client.set_token(session.access_token.clone());
//!
//! let rows = client.get("todos", None).await?;
//! client.post("todos", &json!({"title": "ship it"})).await?;
//! ```

// Re-export core (always available)
pub use supawrap_core::*;

#[cfg(feature = "auth")]
pub use supawrap_auth;

#[cfg(feature = "rest")]
pub use supawrap_rest;

/// Prelude module for convenient imports.
///
/// ```ignore
/// use supawrap::prelude::*;
/// ```
pub mod prelude {
    pub use supawrap_core::{
        Client, ClientConfig, Error, HttpMethod, QueryParams, ResponseBody, Result,
    };

    #[cfg(feature = "auth")]
    pub use supawrap_auth::{
        AuthApi, Credentials, EmailRequest, OtpType, PasswordResetRequest, RefreshTokenRequest,
        Session, UpdateUserParams, VerifyOtpRequest,
    };

    #[cfg(feature = "rest")]
    pub use supawrap_rest::{filter, RestApi};
}
