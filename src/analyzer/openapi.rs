use serde_json::Value;

use crate::models::{
    ApiEndpoint, ApiKeyLocation, ApiParameter, ApiResponse, Authentication, HttpMethod,
    ParameterLocation, ParsedApi,
};
use crate::summary::derive_capabilities;

/// Tries to read the input as an OpenAPI/Swagger document. `None` means "not
/// this format" (unparsable JSON, or no truthy top-level `openapi`/`swagger`
/// field) and is never an error: the classifier falls through to URL
/// detection. Misses are logged at debug level for diagnostics.
pub fn detect(input: &str) -> Option<ParsedApi> {
    let doc: Value = match serde_json::from_str(input) {
        Ok(doc) => doc,
        Err(err) => {
            log::debug!("input is not a JSON document: {}", err);
            return None;
        }
    };

    let is_openapi = doc.get("openapi").is_some_and(is_truthy)
        || doc.get("swagger").is_some_and(is_truthy);
    if !is_openapi {
        log::debug!("JSON document has no openapi/swagger version field");
        return None;
    }

    Some(transform(&doc))
}

/// JavaScript-style truthiness, matching how the version field is tested.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn transform(doc: &Value) -> ParsedApi {
    let name = doc
        .pointer("/info/title")
        .and_then(Value::as_str)
        .unwrap_or("Unknown API")
        .to_string();
    let description = doc
        .pointer("/info/description")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    let base_url = doc
        .pointer("/servers/0/url")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    let mut endpoints = Vec::new();
    if let Some(paths) = doc.get("paths").and_then(Value::as_object) {
        for (path, item) in paths {
            let Some(item) = item.as_object() else {
                continue;
            };
            for (key, operation) in item {
                // Path items also carry non-verb keys ("parameters",
                // "summary"); from_key skips those along with verbs
                // outside the five-member set.
                let Some(method) = HttpMethod::from_key(key) else {
                    continue;
                };
                endpoints.push(build_endpoint(path, method, operation));
            }
        }
    }

    let capabilities = derive_capabilities(&endpoints);
    ParsedApi {
        name,
        base_url,
        description,
        endpoints,
        authentication: authentication(doc),
        capabilities,
    }
}

fn build_endpoint(path: &str, method: HttpMethod, operation: &Value) -> ApiEndpoint {
    let tags = operation
        .get("tags")
        .and_then(Value::as_array)
        .map(|tags| {
            tags.iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    let mut parameters: Vec<ApiParameter> = operation
        .get("parameters")
        .and_then(Value::as_array)
        .map(|params| params.iter().map(declared_parameter).collect())
        .unwrap_or_default();
    parameters.extend(body_parameters(operation));

    ApiEndpoint {
        path: path.to_string(),
        method,
        summary: str_or_empty(operation.get("summary")),
        description: str_or_empty(operation.get("description")),
        tags,
        parameters,
        responses: responses(operation),
    }
}

fn declared_parameter(param: &Value) -> ApiParameter {
    // OpenAPI 3.x nests the type under `schema`; Swagger 2.0 declares it
    // inline. Missing types default to "string".
    let param_type = param
        .pointer("/schema/type")
        .or_else(|| param.get("type"))
        .and_then(Value::as_str)
        .unwrap_or("string")
        .to_string();

    ApiParameter {
        name: str_or_empty(param.get("name")),
        param_type,
        required: param
            .get("required")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        description: str_or_empty(param.get("description")),
        location: param
            .get("in")
            .and_then(Value::as_str)
            .map(ParameterLocation::from_key)
            .unwrap_or(ParameterLocation::Query),
        example: param
            .get("example")
            .or_else(|| param.pointer("/schema/example"))
            .cloned(),
    }
}

/// One body parameter per property of the JSON request body schema. A
/// property is required iff its name appears in the schema's `required`
/// list; a missing list means none are.
fn body_parameters(operation: &Value) -> Vec<ApiParameter> {
    let Some(schema) = operation.pointer("/requestBody/content/application~1json/schema") else {
        return Vec::new();
    };
    let required: Vec<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return Vec::new();
    };

    properties
        .iter()
        .map(|(name, property)| ApiParameter {
            name: name.clone(),
            param_type: property
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("string")
                .to_string(),
            required: required.contains(&name.as_str()),
            description: str_or_empty(property.get("description")),
            location: ParameterLocation::Body,
            example: property.get("example").cloned(),
        })
        .collect()
}

fn responses(operation: &Value) -> Vec<ApiResponse> {
    let Some(map) = operation.get("responses").and_then(Value::as_object) else {
        return Vec::new();
    };
    map.iter()
        .filter_map(|(status, body)| {
            // Non-numeric keys like "default" have no status code to carry.
            let status_code = status.parse::<u16>().ok()?;
            Some(ApiResponse {
                status_code,
                description: str_or_empty(body.get("description")),
                schema: body
                    .pointer("/content/application~1json/schema")
                    .cloned(),
                example: body
                    .pointer("/content/application~1json/example")
                    .cloned(),
            })
        })
        .collect()
}

/// The first declared security scheme, in declaration order. HTTP bearer
/// becomes `Bearer`; apiKey carries its `in`/`name` through; anything else
/// (or nothing) defaults to an unspecified apiKey.
fn authentication(doc: &Value) -> Authentication {
    let scheme = doc
        .pointer("/components/securitySchemes")
        .and_then(Value::as_object)
        .and_then(|schemes| schemes.values().next());
    let Some(scheme) = scheme else {
        return Authentication::unspecified_api_key();
    };

    let scheme_type = scheme.get("type").and_then(Value::as_str);
    match scheme_type {
        Some("http")
            if scheme.get("scheme").and_then(Value::as_str) == Some("bearer") =>
        {
            Authentication::Bearer
        }
        Some("apiKey") => Authentication::ApiKey {
            location: scheme
                .get("in")
                .and_then(Value::as_str)
                .and_then(ApiKeyLocation::from_key),
            name: scheme
                .get("name")
                .and_then(Value::as_str)
                .map(String::from),
        },
        _ => Authentication::unspecified_api_key(),
    }
}

fn str_or_empty(value: Option<&Value>) -> String {
    value.and_then(Value::as_str).unwrap_or("").to_string()
}
