//! Core HTTP client for a Supabase-style backend-as-a-service API.
//!
//! This crate provides the [`Client`] that the `supawrap-auth` and
//! `supawrap-rest` crates build their convenience methods on top of. It owns
//! the connection configuration (base URL, API key, optional bearer token)
//! and the two request primitives:
//!
//! - [`Client::request`] — generic call with lenient response parsing
//!   ([`ResponseBody`]), used for REST table access and most auth endpoints.
//! - [`Client::auth_request`] — always-POST call with strict JSON decoding,
//!   used by the token flows (sign-in, refresh).
//!
//! # Usage
//!
//! ```ignore
//! use supawrap_core::{Client, ClientConfig, HttpMethod};
//!
//! let client = Client::new(
//!     ClientConfig::new("https://your-project.supabase.co", "your-anon-key"),
//! )?;
//! let body = client.request(HttpMethod::Get, "rest/v1/users", None, None).await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod response;

pub use client::{Client, QueryParams};
pub use config::ClientConfig;
pub use error::Error;
pub use response::{HttpMethod, ResponseBody};

/// Result alias using the crate error type.
pub type Result<T> = std::result::Result<T, Error>;
