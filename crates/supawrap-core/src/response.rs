use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value as JsonValue};

use crate::error::Error;

/// HTTP methods supported by the request primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Whether this method conventionally carries a request body. Bodies
    /// supplied for other methods are ignored rather than rejected.
    pub fn has_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Patch => write!(f, "PATCH"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// The leniently parsed body of a successful response.
///
/// A successful status never fails on body shape: an empty body becomes an
/// empty JSON object, valid JSON is returned parsed, and anything else is
/// returned as the raw text. This is a normal branch of parsing, not an
/// error path.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(JsonValue),
    Text(String),
}

impl ResponseBody {
    /// Parse a raw response body under the lenient rules.
    pub fn from_text(text: String) -> Self {
        if text.is_empty() {
            return Self::Json(JsonValue::Object(Map::new()));
        }
        match serde_json::from_str(&text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text),
        }
    }

    /// The parsed JSON value, if the body was JSON.
    pub fn as_json(&self) -> Option<&JsonValue> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// The raw text, if the body was not JSON.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Consume the body, returning the JSON value if there was one.
    pub fn into_json(self) -> Option<JsonValue> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Deserialize the body into a concrete type. Text bodies re-attempt a
    /// strict parse so the serialization error carries the real position.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, Error> {
        match self {
            Self::Json(value) => Ok(serde_json::from_value(value)?),
            Self::Text(text) => Ok(serde_json::from_str(&text)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_is_empty_object() {
        let body = ResponseBody::from_text(String::new());
        assert_eq!(body, ResponseBody::Json(json!({})));
    }

    #[test]
    fn json_body_is_parsed() {
        let body = ResponseBody::from_text(r#"[{"id":1,"name":"Test"}]"#.into());
        assert_eq!(body, ResponseBody::Json(json!([{"id": 1, "name": "Test"}])));
    }

    #[test]
    fn non_json_body_degrades_to_text() {
        let body = ResponseBody::from_text("plain text reply".into());
        assert_eq!(body, ResponseBody::Text("plain text reply".into()));
        assert_eq!(body.as_text(), Some("plain text reply"));
        assert!(body.as_json().is_none());
    }

    #[test]
    fn deserialize_json_body() {
        #[derive(serde::Deserialize)]
        struct Row {
            id: i64,
        }
        let body = ResponseBody::from_text(r#"{"id":7}"#.into());
        let row: Row = body.deserialize().unwrap();
        assert_eq!(row.id, 7);
    }

    #[test]
    fn deserialize_text_body_fails() {
        let body = ResponseBody::from_text("nope".into());
        assert!(body.deserialize::<serde_json::Value>().is_err());
    }

    #[test]
    fn method_body_rules() {
        assert!(HttpMethod::Post.has_body());
        assert!(HttpMethod::Put.has_body());
        assert!(HttpMethod::Patch.has_body());
        assert!(!HttpMethod::Get.has_body());
        assert!(!HttpMethod::Delete.has_body());
    }

    #[test]
    fn method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }
}
