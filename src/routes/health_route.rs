use chrono::Utc;
use rocket::serde::json::Json;
use rocket_okapi::openapi;
use schemars::JsonSchema;
use serde::Serialize;

#[derive(Debug, Serialize, JsonSchema)]
pub struct HealthResponse {
    pub success: bool,
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

/// Liveness probe
#[openapi(tag = "Health")]
#[get("/health")]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        status: "healthy".to_string(),
        service: "RideNaija".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
