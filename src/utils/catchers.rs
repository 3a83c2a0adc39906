use rocket::serde::json::Json;
use serde_json::{json, Value};

// Rocket-level failures (guard rejections, routing misses, body parse
// errors) rendered in the same envelope the routes use.

#[catch(401)]
pub fn unauthorized() -> Json<Value> {
    Json(json!({ "success": false, "error": "Authentication required" }))
}

#[catch(404)]
pub fn not_found() -> Json<Value> {
    Json(json!({ "success": false, "error": "Resource not found" }))
}

#[catch(422)]
pub fn unprocessable() -> Json<Value> {
    Json(json!({ "success": false, "error": "Malformed request body" }))
}

#[catch(500)]
pub fn internal_error() -> Json<Value> {
    Json(json!({ "success": false, "error": "Internal server error" }))
}
