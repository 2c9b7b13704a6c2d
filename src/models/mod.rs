mod api;

pub use api::{
    AnalysisReport, ApiEndpoint, ApiKeyLocation, ApiParameter, ApiResponse, Authentication,
    HttpMethod, ParameterLocation, ParsedApi,
};
