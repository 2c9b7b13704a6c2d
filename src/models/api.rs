use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical description of an external API, produced by the analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedApi {
    pub name: String,
    pub base_url: String,
    pub description: String,
    pub endpoints: Vec<ApiEndpoint>,
    pub authentication: Authentication,
    /// Human-readable summary labels, deduplicated, in order of first occurrence.
    pub capabilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEndpoint {
    pub path: String,
    pub method: HttpMethod,
    pub summary: String,
    pub description: String,
    pub tags: Vec<String>,
    pub parameters: Vec<ApiParameter>,
    pub responses: Vec<ApiResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiParameter {
    pub name: String,
    /// Declared type as written in the source document ("string", "integer", ...).
    /// Not validated against a fixed type system.
    pub param_type: String,
    pub required: bool,
    pub description: String,
    pub location: ParameterLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status_code: u16,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
}

/// The five HTTP verbs the analyzer understands. Anything else in a source
/// document (OPTIONS, HEAD, ...) is skipped during ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// Parses an OpenAPI path-item key ("get", "post", ...). Returns `None`
    /// for verbs outside the five-member set and for non-verb keys.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "get" => Some(Self::Get),
            "post" => Some(Self::Post),
            "put" => Some(Self::Put),
            "delete" => Some(Self::Delete),
            "patch" => Some(Self::Patch),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Query,
    Path,
    Body,
    Header,
}

impl ParameterLocation {
    /// Maps an OpenAPI `in` value. Unrecognized locations (e.g. "cookie")
    /// fall back to `Query`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "query" => Self::Query,
            "path" => Self::Path,
            "body" => Self::Body,
            "header" => Self::Header,
            _ => Self::Query,
        }
    }
}

/// How the described API authenticates callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Authentication {
    #[serde(rename = "apiKey")]
    ApiKey {
        #[serde(skip_serializing_if = "Option::is_none")]
        location: Option<ApiKeyLocation>,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    #[serde(rename = "bearer")]
    Bearer,
    #[serde(rename = "oauth")]
    OAuth,
    #[serde(rename = "basic")]
    Basic,
}

impl Authentication {
    /// The safe default when a document declares no usable security scheme.
    pub fn unspecified_api_key() -> Self {
        Self::ApiKey {
            location: None,
            name: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyLocation {
    Header,
    Query,
}

impl ApiKeyLocation {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "header" => Some(Self::Header),
            "query" => Some(Self::Query),
            _ => None,
        }
    }
}

/// Envelope written by the CLI and returned by the web interface. The
/// timestamp lives here rather than on `ParsedApi`, which stays a pure
/// function of its input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analyzed_at: chrono::DateTime<chrono::Utc>,
    pub description: String,
    pub api: ParsedApi,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_keys_outside_the_enum_are_rejected() {
        assert_eq!(HttpMethod::from_key("get"), Some(HttpMethod::Get));
        assert_eq!(HttpMethod::from_key("PATCH"), Some(HttpMethod::Patch));
        assert_eq!(HttpMethod::from_key("options"), None);
        assert_eq!(HttpMethod::from_key("head"), None);
        assert_eq!(HttpMethod::from_key("parameters"), None);
    }

    #[test]
    fn authentication_serializes_with_spec_tag_names() {
        let bearer = serde_json::to_value(Authentication::Bearer).unwrap();
        assert_eq!(bearer, serde_json::json!({"type": "bearer"}));

        let key = serde_json::to_value(Authentication::ApiKey {
            location: Some(ApiKeyLocation::Header),
            name: Some("X-Api-Key".to_string()),
        })
        .unwrap();
        assert_eq!(
            key,
            serde_json::json!({"type": "apiKey", "location": "header", "name": "X-Api-Key"})
        );
    }
}
