/// All errors produced by the supawrap client.
///
/// One tagged type covers the three failure points: invalid configuration at
/// construction, a non-2xx backend status, and a transport-level failure.
/// Callers branch on the variant (or use [`Error::status`] /
/// [`Error::response_body`]) to extract diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or empty required configuration. Raised only at construction.
    #[error("Invalid client configuration: {0}")]
    InvalidConfiguration(String),

    /// The backend responded with a non-success HTTP status. The raw response
    /// text is preserved so callers can inspect backend-provided detail.
    #[error("Request failed with status {status}")]
    RequestFailed { status: u16, body: String },

    /// The transport failed before an HTTP status was obtainable (DNS,
    /// connection refused, transport-enforced timeout).
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// JSON encoding of a payload failed, or a strict auth response was not
    /// well-formed JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The endpoint could not be resolved into a valid URL.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// HTTP status code, if this error came from a backend response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body, if this error came from a backend response.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::RequestFailed { body, .. } => Some(body),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_display_and_accessors() {
        let err = Error::RequestFailed {
            status: 400,
            body: "Bad Request".into(),
        };
        assert_eq!(err.to_string(), "Request failed with status 400");
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.response_body(), Some("Bad Request"));
    }

    #[test]
    fn invalid_configuration_display() {
        let err = Error::InvalidConfiguration("api_key is empty".into());
        assert_eq!(
            err.to_string(),
            "Invalid client configuration: api_key is empty"
        );
        assert_eq!(err.status(), None);
        assert_eq!(err.response_body(), None);
    }

    #[test]
    fn serialization_error_from_serde() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = parse_err.into();
        assert!(err.to_string().starts_with("Serialization error"));
    }
}
