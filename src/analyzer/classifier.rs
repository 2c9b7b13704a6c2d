use thiserror::Error;

use crate::analyzer::{catalog, openapi};
use crate::models::{
    ApiEndpoint, ApiResponse, Authentication, HttpMethod, ParsedApi,
};

#[derive(Debug, Error, PartialEq)]
pub enum AnalyzeError {
    #[error("unrecognized input: provide a valid URL or OpenAPI specification")]
    UnrecognizedInput,
}

/// Classifies a free-form API description and returns its canonical form.
///
/// The three strategies are tried in order, first match wins:
/// 1. known-vendor signature (substring match against the catalog),
/// 2. OpenAPI/Swagger document,
/// 3. bare URL (placeholder result, no network discovery).
///
/// Stateless and pure: the same input always yields a structurally equal
/// result.
pub fn analyze(input: &str) -> Result<ParsedApi, AnalyzeError> {
    if let Some(api) = catalog::match_vendor(input) {
        log::debug!("input matched catalog vendor '{}'", api.name);
        return Ok(api.clone());
    }

    if let Some(api) = openapi::detect(input) {
        log::debug!(
            "input parsed as an OpenAPI document with {} endpoints",
            api.endpoints.len()
        );
        return Ok(api);
    }

    if url::Url::parse(input.trim()).is_ok() {
        log::debug!("input parsed as a bare URL");
        return Ok(url_placeholder(input.trim()));
    }

    Err(AnalyzeError::UnrecognizedInput)
}

/// The fixed stub returned for a bare URL. Live endpoint discovery is a
/// collaborator concern; nothing here performs I/O.
fn url_placeholder(input: &str) -> ParsedApi {
    ParsedApi {
        name: "Custom API".to_string(),
        base_url: input.to_string(),
        description: String::new(),
        endpoints: vec![ApiEndpoint {
            path: "/".to_string(),
            method: HttpMethod::Get,
            summary: "Root resource".to_string(),
            description: String::new(),
            tags: vec![],
            parameters: vec![],
            responses: vec![ApiResponse {
                status_code: 200,
                description: "Successful response".to_string(),
                schema: None,
                example: None,
            }],
        }],
        authentication: Authentication::unspecified_api_key(),
        capabilities: vec!["General API operations".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn vendor_signature_returns_the_catalog_record_unchanged() {
        let api = analyze("I use stripe for payments").unwrap();
        assert_eq!(&api, catalog::match_vendor("stripe").unwrap());

        let by_url = analyze("https://api.stripe.com/v1/charges").unwrap();
        assert_eq!(by_url, api);
    }

    #[test]
    fn vendor_match_takes_precedence_over_a_valid_document() {
        // A real OpenAPI document whose text happens to contain a vendor
        // signature still classifies as that vendor. Documented
        // false-positive of the substring strategy.
        let doc = json!({
            "openapi": "3.0.0",
            "info": {"title": "Stripe-adjacent service"},
            "paths": {}
        });
        let api = analyze(&doc.to_string()).unwrap();
        assert_eq!(api.name, "Stripe");
    }

    #[test]
    fn openapi_document_classifies_second() {
        let doc = json!({
            "openapi": "3.0.0",
            "info": {"title": "Pets", "description": "Pet store"},
            "servers": [{"url": "https://pets.example.com"}],
            "paths": {
                "/pets": {"get": {"tags": ["pets"], "responses": {"200": {"description": "ok"}}}}
            }
        });
        let api = analyze(&doc.to_string()).unwrap();
        assert_eq!(api.name, "Pets");
        assert_eq!(api.base_url, "https://pets.example.com");
        assert_eq!(api.endpoints.len(), 1);
        assert_eq!(api.capabilities, vec!["Manage pets", "Retrieve data"]);
    }

    #[test]
    fn bare_url_yields_the_placeholder() {
        let api = analyze("http://x").unwrap();
        assert_eq!(api.name, "Custom API");
        assert_eq!(api.base_url, "http://x");
        assert_eq!(api.endpoints.len(), 1);
        assert_eq!(api.endpoints[0].method, HttpMethod::Get);
        assert_eq!(api.endpoints[0].path, "/");
        assert_eq!(api.endpoints[0].responses[0].status_code, 200);
        assert!(api.endpoints[0].parameters.is_empty());
        assert_eq!(api.capabilities, vec!["General API operations"]);
        assert_eq!(api.authentication, Authentication::unspecified_api_key());
    }

    #[test]
    fn malformed_json_that_is_a_url_falls_through_to_url_detection() {
        // Not valid JSON, but a syntactically valid URL.
        let api = analyze("https://internal.example.com/v2?mode={raw}").unwrap();
        assert_eq!(api.name, "Custom API");
    }

    #[test]
    fn unclassifiable_input_fails() {
        assert_eq!(
            analyze("{definitely not json and not a url"),
            Err(AnalyzeError::UnrecognizedInput)
        );
        assert_eq!(
            analyze("plain words only"),
            Err(AnalyzeError::UnrecognizedInput)
        );
    }

    #[test]
    fn analyze_is_idempotent() {
        let doc = json!({
            "openapi": "3.0.0",
            "info": {"title": "Twice"},
            "paths": {"/a": {"post": {"responses": {"201": {"description": "ok"}}}}}
        })
        .to_string();
        assert_eq!(analyze(&doc).unwrap(), analyze(&doc).unwrap());
        assert_eq!(analyze("http://x").unwrap(), analyze("http://x").unwrap());
    }
}
