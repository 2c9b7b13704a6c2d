use crate::models::{ApiEndpoint, HttpMethod, ParsedApi};

/// Builds the capability labels for an endpoint list: one "Manage {tag}" per
/// tag, plus one action label per endpoint keyed on its method. Duplicates
/// are suppressed; order is first occurrence.
pub fn derive_capabilities(endpoints: &[ApiEndpoint]) -> Vec<String> {
    fn push_unique(capabilities: &mut Vec<String>, label: String) {
        if !capabilities.contains(&label) {
            capabilities.push(label);
        }
    }

    let mut capabilities: Vec<String> = Vec::new();
    for endpoint in endpoints {
        for tag in &endpoint.tags {
            push_unique(&mut capabilities, format!("Manage {}", tag));
        }
        let action = match endpoint.method {
            HttpMethod::Get => "Retrieve data",
            HttpMethod::Post => "Create resources",
            HttpMethod::Put | HttpMethod::Patch => "Update resources",
            HttpMethod::Delete => "Delete resources",
        };
        push_unique(&mut capabilities, action.to_string());
    }

    capabilities
}

/// Renders a one-paragraph natural-language summary of a parsed API. Pure
/// formatting, no fallible branches.
pub fn describe(api: &ParsedApi) -> String {
    let mut out = if api.description.is_empty() {
        format!("{} is an external API.", api.name)
    } else {
        format!(
            "{} is an external API: {}.",
            api.name,
            api.description.trim_end_matches('.')
        )
    };

    if !api.capabilities.is_empty() {
        let noun = if api.capabilities.len() == 1 {
            "capability"
        } else {
            "capabilities"
        };
        out.push_str(&format!(
            " It supports {} {}: {}.",
            api.capabilities.len(),
            noun,
            api.capabilities.join(", ")
        ));
    }

    if api.endpoints.is_empty() {
        out.push_str(" It exposes no endpoints.");
    } else {
        let noun = if api.endpoints.len() == 1 {
            "endpoint"
        } else {
            "endpoints"
        };
        out.push_str(&format!(
            " It exposes {} {} ({}).",
            api.endpoints.len(),
            noun,
            method_breakdown(&api.endpoints)
        ));
    }

    out
}

/// "2 GET endpoints, 1 POST endpoint" — grouped by method in order of first
/// occurrence, with singular/plural agreement.
fn method_breakdown(endpoints: &[ApiEndpoint]) -> String {
    let mut counts: Vec<(HttpMethod, usize)> = Vec::new();
    for endpoint in endpoints {
        match counts.iter_mut().find(|(m, _)| *m == endpoint.method) {
            Some((_, count)) => *count += 1,
            None => counts.push((endpoint.method, 1)),
        }
    }

    counts
        .iter()
        .map(|(method, count)| {
            let noun = if *count == 1 { "endpoint" } else { "endpoints" };
            format!("{} {} {}", count, method, noun)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Authentication;

    fn endpoint(method: HttpMethod, tags: &[&str]) -> ApiEndpoint {
        ApiEndpoint {
            path: "/orders".to_string(),
            method,
            summary: String::new(),
            description: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            parameters: vec![],
            responses: vec![],
        }
    }

    #[test]
    fn capabilities_deduplicate_across_endpoints() {
        let endpoints = vec![
            endpoint(HttpMethod::Get, &["orders"]),
            endpoint(HttpMethod::Post, &["orders"]),
        ];
        assert_eq!(
            derive_capabilities(&endpoints),
            vec!["Manage orders", "Retrieve data", "Create resources"]
        );
    }

    #[test]
    fn put_and_patch_share_the_update_label() {
        let endpoints = vec![
            endpoint(HttpMethod::Put, &[]),
            endpoint(HttpMethod::Patch, &[]),
        ];
        assert_eq!(derive_capabilities(&endpoints), vec!["Update resources"]);
    }

    #[test]
    fn describe_pluralizes_the_method_breakdown() {
        let api = ParsedApi {
            name: "Orders API".to_string(),
            base_url: "https://api.example.com".to_string(),
            description: "Order management".to_string(),
            endpoints: vec![
                endpoint(HttpMethod::Get, &["orders"]),
                endpoint(HttpMethod::Get, &["orders"]),
                endpoint(HttpMethod::Post, &["orders"]),
            ],
            authentication: Authentication::Bearer,
            capabilities: vec!["Manage orders".to_string()],
        };

        let text = describe(&api);
        assert!(text.contains("2 GET endpoints, 1 POST endpoint"), "{text}");
        assert!(text.contains("Orders API"));
        assert!(text.contains("It supports 1 capability: Manage orders."));
        assert!(text.contains("It exposes 3 endpoints"));
    }

    #[test]
    fn describe_handles_the_degenerate_empty_api() {
        let api = ParsedApi {
            name: "Empty".to_string(),
            base_url: String::new(),
            description: String::new(),
            endpoints: vec![],
            authentication: Authentication::unspecified_api_key(),
            capabilities: vec![],
        };
        assert_eq!(
            describe(&api),
            "Empty is an external API. It exposes no endpoints."
        );
    }
}
