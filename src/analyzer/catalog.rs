use std::sync::LazyLock;

use crate::models::{
    ApiEndpoint, ApiKeyLocation, ApiParameter, ApiResponse, Authentication, HttpMethod,
    ParameterLocation, ParsedApi,
};
use crate::summary::derive_capabilities;

/// One hand-authored catalog entry plus the lowercase substrings that
/// identify it in free-form input.
struct Vendor {
    signatures: &'static [&'static str],
    api: ParsedApi,
}

/// Loaded once per process, read-only afterwards.
static CATALOG: LazyLock<[Vendor; 3]> = LazyLock::new(|| [stripe(), shopify(), slack()]);

/// Substring match against the vendor signatures, first vendor wins. This is
/// intentionally crude (no URL parsing): any input containing "slack"
/// anywhere matches Slack. Accepted behavior, covered in tests.
pub fn match_vendor(input: &str) -> Option<&'static ParsedApi> {
    let needle = input.to_lowercase();
    CATALOG
        .iter()
        .find(|vendor| vendor.signatures.iter().any(|sig| needle.contains(sig)))
        .map(|vendor| &vendor.api)
}

/// All catalog records, for the introspection route.
pub fn entries() -> impl Iterator<Item = &'static ParsedApi> {
    CATALOG.iter().map(|vendor| &vendor.api)
}

fn endpoint(
    method: HttpMethod,
    path: &str,
    summary: &str,
    tag: &str,
    parameters: Vec<ApiParameter>,
    response_description: &str,
) -> ApiEndpoint {
    ApiEndpoint {
        path: path.to_string(),
        method,
        summary: summary.to_string(),
        description: String::new(),
        tags: vec![tag.to_string()],
        parameters,
        responses: vec![ApiResponse {
            status_code: 200,
            description: response_description.to_string(),
            schema: None,
            example: None,
        }],
    }
}

fn param(
    name: &str,
    param_type: &str,
    required: bool,
    description: &str,
    location: ParameterLocation,
) -> ApiParameter {
    ApiParameter {
        name: name.to_string(),
        param_type: param_type.to_string(),
        required,
        description: description.to_string(),
        location,
        example: None,
    }
}

fn stripe() -> Vendor {
    let endpoints = vec![
        endpoint(
            HttpMethod::Post,
            "/customers",
            "Create a customer",
            "customers",
            vec![
                param(
                    "email",
                    "string",
                    false,
                    "Customer email address",
                    ParameterLocation::Body,
                ),
                param(
                    "name",
                    "string",
                    false,
                    "Customer full name",
                    ParameterLocation::Body,
                ),
            ],
            "The created customer object",
        ),
        endpoint(
            HttpMethod::Get,
            "/customers/{id}",
            "Retrieve a customer",
            "customers",
            vec![param(
                "id",
                "string",
                true,
                "Customer identifier",
                ParameterLocation::Path,
            )],
            "The customer object",
        ),
        endpoint(
            HttpMethod::Get,
            "/customers",
            "List customers",
            "customers",
            vec![param(
                "limit",
                "integer",
                false,
                "Maximum number of customers to return",
                ParameterLocation::Query,
            )],
            "A paginated list of customers",
        ),
        endpoint(
            HttpMethod::Post,
            "/charges",
            "Create a charge",
            "charges",
            vec![
                param(
                    "amount",
                    "integer",
                    true,
                    "Amount in the smallest currency unit",
                    ParameterLocation::Body,
                ),
                param(
                    "currency",
                    "string",
                    true,
                    "Three-letter ISO currency code",
                    ParameterLocation::Body,
                ),
                param(
                    "customer",
                    "string",
                    false,
                    "Customer to charge",
                    ParameterLocation::Body,
                ),
            ],
            "The created charge object",
        ),
        endpoint(
            HttpMethod::Get,
            "/charges/{id}",
            "Retrieve a charge",
            "charges",
            vec![param(
                "id",
                "string",
                true,
                "Charge identifier",
                ParameterLocation::Path,
            )],
            "The charge object",
        ),
        endpoint(
            HttpMethod::Post,
            "/refunds",
            "Create a refund",
            "refunds",
            vec![param(
                "charge",
                "string",
                true,
                "Charge to refund",
                ParameterLocation::Body,
            )],
            "The created refund object",
        ),
    ];
    let capabilities = derive_capabilities(&endpoints);
    Vendor {
        signatures: &["stripe", "api.stripe.com"],
        api: ParsedApi {
            name: "Stripe".to_string(),
            base_url: "https://api.stripe.com/v1".to_string(),
            description: "Payment processing platform for online businesses".to_string(),
            endpoints,
            authentication: Authentication::Bearer,
            capabilities,
        },
    }
}

fn shopify() -> Vendor {
    let endpoints = vec![
        endpoint(
            HttpMethod::Get,
            "/products.json",
            "List products",
            "products",
            vec![param(
                "limit",
                "integer",
                false,
                "Maximum number of products to return",
                ParameterLocation::Query,
            )],
            "A list of products",
        ),
        endpoint(
            HttpMethod::Post,
            "/products.json",
            "Create a product",
            "products",
            vec![param(
                "title",
                "string",
                true,
                "Product title",
                ParameterLocation::Body,
            )],
            "The created product",
        ),
        endpoint(
            HttpMethod::Put,
            "/products/{id}.json",
            "Update a product",
            "products",
            vec![param(
                "id",
                "integer",
                true,
                "Product identifier",
                ParameterLocation::Path,
            )],
            "The updated product",
        ),
        endpoint(
            HttpMethod::Delete,
            "/products/{id}.json",
            "Delete a product",
            "products",
            vec![param(
                "id",
                "integer",
                true,
                "Product identifier",
                ParameterLocation::Path,
            )],
            "Empty response on success",
        ),
        endpoint(
            HttpMethod::Get,
            "/orders.json",
            "List orders",
            "orders",
            vec![param(
                "status",
                "string",
                false,
                "Filter orders by status",
                ParameterLocation::Query,
            )],
            "A list of orders",
        ),
        endpoint(
            HttpMethod::Get,
            "/customers.json",
            "List customers",
            "customers",
            vec![],
            "A list of customers",
        ),
    ];
    let capabilities = derive_capabilities(&endpoints);
    Vendor {
        signatures: &["shopify", "myshopify.com"],
        api: ParsedApi {
            name: "Shopify".to_string(),
            base_url: "https://{shop}.myshopify.com/admin/api/2024-01".to_string(),
            description: "E-commerce platform admin API".to_string(),
            endpoints,
            authentication: Authentication::ApiKey {
                location: Some(ApiKeyLocation::Header),
                name: Some("X-Shopify-Access-Token".to_string()),
            },
            capabilities,
        },
    }
}

fn slack() -> Vendor {
    let endpoints = vec![
        endpoint(
            HttpMethod::Post,
            "/chat.postMessage",
            "Send a message to a channel",
            "messages",
            vec![
                param(
                    "channel",
                    "string",
                    true,
                    "Channel, private group, or IM channel to send the message to",
                    ParameterLocation::Body,
                ),
                param(
                    "text",
                    "string",
                    false,
                    "Message text",
                    ParameterLocation::Body,
                ),
            ],
            "Message delivery confirmation",
        ),
        endpoint(
            HttpMethod::Get,
            "/conversations.list",
            "List channels",
            "channels",
            vec![param(
                "limit",
                "integer",
                false,
                "Maximum number of items to return",
                ParameterLocation::Query,
            )],
            "A list of channel objects",
        ),
        endpoint(
            HttpMethod::Post,
            "/conversations.create",
            "Create a channel",
            "channels",
            vec![param(
                "name",
                "string",
                true,
                "Name of the channel to create",
                ParameterLocation::Body,
            )],
            "The created channel object",
        ),
        endpoint(
            HttpMethod::Get,
            "/users.list",
            "List workspace members",
            "users",
            vec![],
            "A list of user objects",
        ),
    ];
    let capabilities = derive_capabilities(&endpoints);
    Vendor {
        signatures: &["slack", "slack.com/api"],
        api: ParsedApi {
            name: "Slack".to_string(),
            base_url: "https://slack.com/api".to_string(),
            description: "Workspace messaging platform".to_string(),
            endpoints,
            authentication: Authentication::OAuth,
            capabilities,
        },
    }
}
