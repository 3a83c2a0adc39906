use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use uuid::Uuid;

#[allow(dead_code)]
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub passenger_id: Uuid,
    pub seats: i64,
    pub total_price: f64,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub notes: Option<String>,
    pub booking_reference: String,
    pub receipt_number: String,
    pub created_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, sqlx::Type, Display,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, sqlx::Type, Display,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
}

fn default_seats() -> i64 {
    1
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateBookingRequest {
    pub trip_id: String,
    #[serde(default = "default_seats")]
    pub seats: i64,
    pub notes: Option<String>,
}

// A booking joined with the current state of its trip and driver. The LEFT
// JOINs keep bookings visible even when the trip row has since vanished.
#[derive(Debug, sqlx::FromRow)]
pub struct BookingWithTripRow {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub passenger_id: Uuid,
    pub seats: i64,
    pub total_price: f64,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub notes: Option<String>,
    pub booking_reference: String,
    pub receipt_number: String,
    pub created_at: DateTime<Utc>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub departure_time: Option<DateTime<Utc>>,
    pub arrival_time: Option<DateTime<Utc>>,
    pub price_per_seat: Option<f64>,
    pub car_model: Option<String>,
    pub car_plate: Option<String>,
    pub driver_name: Option<String>,
}

// Trip summary embedded in booking payloads
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct TripSummary {
    pub origin: String,
    pub destination: String,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub price_per_seat: f64,
    pub driver_name: String,
    pub car_model: Option<String>,
    pub car_plate: Option<String>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct BookingView {
    pub id: String,
    pub trip_id: String,
    pub seats: i64,
    pub total_price: f64,
    pub status: String,
    pub payment_status: String,
    pub notes: Option<String>,
    pub booking_reference: String,
    pub receipt_number: String,
    pub created_at: String,
    pub trip_details: TripSummary,
}

impl From<BookingWithTripRow> for BookingView {
    fn from(row: BookingWithTripRow) -> Self {
        BookingView {
            id: row.id.to_string(),
            trip_id: row.trip_id.to_string(),
            seats: row.seats,
            total_price: row.total_price,
            status: row.status.to_string(),
            payment_status: row.payment_status.to_string(),
            notes: row.notes,
            booking_reference: row.booking_reference,
            receipt_number: row.receipt_number,
            created_at: row.created_at.to_rfc3339(),
            trip_details: TripSummary {
                origin: row.origin.unwrap_or_else(|| "Unknown".to_string()),
                destination: row.destination.unwrap_or_else(|| "Unknown".to_string()),
                departure_time: row.departure_time.map(|t| t.to_rfc3339()),
                arrival_time: row.arrival_time.map(|t| t.to_rfc3339()),
                price_per_seat: row.price_per_seat.unwrap_or(0.0),
                driver_name: row.driver_name.unwrap_or_else(|| "Unknown Driver".to_string()),
                car_model: row.car_model,
                car_plate: row.car_plate,
            },
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct BookingCreateResponse {
    pub success: bool,
    pub message: String,
    pub booking: BookingView,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct BookingListResponse {
    pub success: bool,
    pub count: usize,
    pub bookings: Vec<BookingView>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct BookingDetailResponse {
    pub success: bool,
    pub booking: BookingView,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PaymentRequest {
    pub booking_id: String,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ReceiptView {
    pub booking_reference: String,
    pub receipt_number: String,
    pub total_amount: f64,
    pub payment_date: String,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct PaymentResponse {
    pub success: bool,
    pub message: String,
    pub receipt: ReceiptView,
}
