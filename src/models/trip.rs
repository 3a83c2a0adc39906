use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use uuid::Uuid;

#[allow(dead_code)]
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Trip {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub available_seats: i64,
    pub total_seats: i64,
    pub price_per_seat: f64,
    pub car_model: Option<String>,
    pub car_plate: Option<String>,
    pub car_type: String,
    pub amenities: String,
    pub status: TripStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, sqlx::Type, Display,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TripStatus {
    Scheduled,
    Completed,
    Cancelled,
}

// Search result row: a trip joined with its driver (driver may be gone)
#[derive(Debug, sqlx::FromRow)]
pub struct TripSearchRow {
    pub id: Uuid,
    pub origin: String,
    pub destination: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub available_seats: i64,
    pub price_per_seat: f64,
    pub car_model: Option<String>,
    pub car_plate: Option<String>,
    pub car_type: String,
    pub amenities: String,
    pub status: TripStatus,
    pub driver_name: Option<String>,
    pub driver_rating: Option<f64>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct TripView {
    pub id: String,
    pub driver_name: String,
    pub driver_rating: f64,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub available_seats: i64,
    pub price_per_seat: f64,
    pub car_model: Option<String>,
    pub car_plate: Option<String>,
    pub car_type: String,
    pub amenities: Vec<String>,
    pub status: String,
}

impl From<TripSearchRow> for TripView {
    fn from(row: TripSearchRow) -> Self {
        TripView {
            id: row.id.to_string(),
            driver_name: row.driver_name.unwrap_or_else(|| "Unknown Driver".to_string()),
            driver_rating: row.driver_rating.unwrap_or(0.0),
            origin: row.origin,
            destination: row.destination,
            departure_time: row.departure_time.to_rfc3339(),
            arrival_time: row.arrival_time.to_rfc3339(),
            available_seats: row.available_seats,
            price_per_seat: row.price_per_seat,
            car_model: row.car_model,
            car_plate: row.car_plate,
            car_type: row.car_type,
            // Amenities are stored as a JSON array; malformed text degrades
            // to an empty list rather than failing the search.
            amenities: serde_json::from_str(&row.amenities).unwrap_or_default(),
            status: row.status.to_string(),
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct TripSearchResponse {
    pub success: bool,
    pub count: usize,
    pub trips: Vec<TripView>,
}
