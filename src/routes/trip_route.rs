use crate::models::trip::TripSearchResponse;
use crate::services::trip_service::TripService;
use crate::utils::error::AppError;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

/// Search bookable trips
#[openapi(tag = "Trips")]
#[get("/trips?<from>&<to>&<date>")]
pub async fn search_trips(
    from: Option<String>,
    to: Option<String>,
    date: Option<String>,
    trip_service: &State<TripService>,
) -> Result<Json<TripSearchResponse>, AppError> {
    let trips = trip_service.search(from, to, date).await?;

    Ok(Json(TripSearchResponse {
        success: true,
        count: trips.len(),
        trips,
    }))
}
