use crate::error::Error;

/// Configuration for connecting to a Supabase-style backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Project base URL (e.g. "https://your-project.supabase.co").
    pub base_url: String,
    /// API key, sent as the `apikey` header and as the bearer fallback.
    pub api_key: String,
    /// Optional initial bearer token (a user access token).
    pub token: Option<String>,
}

impl ClientConfig {
    /// Create a new config from a base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            token: None,
        }
    }

    /// Set the initial bearer token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Both `base_url` and `api_key` must be non-blank.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.base_url.trim().is_empty() {
            return Err(Error::InvalidConfiguration("base_url is empty".into()));
        }
        if self.api_key.trim().is_empty() {
            return Err(Error::InvalidConfiguration("api_key is empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_ok() {
        let config = ClientConfig::new("https://example.supabase.co", "anon-key");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_base_url() {
        let config = ClientConfig::new("", "anon-key");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid client configuration"));
    }

    #[test]
    fn validate_rejects_blank_api_key() {
        let config = ClientConfig::new("https://example.supabase.co", "   ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn builder_sets_token() {
        let config = ClientConfig::new("https://example.supabase.co", "anon-key")
            .token("user-jwt");
        assert_eq!(config.token.as_deref(), Some("user-jwt"));
    }
}
