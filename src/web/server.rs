use crate::analyzer::{self, catalog};
use crate::models::AnalysisReport;
use crate::summary;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use warp::Filter;
use warp::http::StatusCode;

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    input: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub async fn run_server(port: u16) -> Result<()> {
    // Classification is synchronous and stateless, so the handler needs no
    // shared state beyond the process-wide catalog.
    let analyze_route = warp::path("analyze")
        .and(warp::post())
        .and(warp::body::json())
        .map(|request: AnalyzeRequest| {
            println!("Analyzing input ({} bytes)", request.input.len());

            match analyzer::analyze(&request.input) {
                Ok(api) => {
                    let description = summary::describe(&api);
                    println!(
                        "Classified as '{}' with {} endpoints",
                        api.name,
                        api.endpoints.len()
                    );
                    let report = AnalysisReport {
                        analyzed_at: chrono::Utc::now(),
                        description,
                        api,
                    };
                    warp::reply::with_status(warp::reply::json(&report), StatusCode::OK)
                }
                Err(err) => {
                    println!("Classification failed: {}", err);
                    warp::reply::with_status(
                        warp::reply::json(&ErrorResponse {
                            error: err.to_string(),
                        }),
                        StatusCode::UNPROCESSABLE_ENTITY,
                    )
                }
            }
        });

    let health_route =
        warp::path("health").map(|| warp::reply::json(&serde_json::json!({"status": "healthy"})));

    // Introspection route to see what the vendor catalog holds
    let catalog_route = warp::path("catalog").and(warp::get()).map(|| {
        let vendors: Vec<_> = catalog::entries()
            .map(|api| {
                serde_json::json!({
                    "name": api.name,
                    "base_url": api.base_url,
                    "endpoints": api.endpoints.len(),
                    "capabilities": api.capabilities,
                })
            })
            .collect();
        warp::reply::json(&serde_json::json!({ "vendors": vendors }))
    });

    let routes = analyze_route
        .or(health_route)
        .or(catalog_route)
        .with(warp::cors().allow_any_origin());

    println!("Server running on http://localhost:{}", port);
    warp::serve(routes).run(([127, 0, 0, 1], port)).await;

    Ok(())
}
