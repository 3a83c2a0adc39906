use crate::models::booking::{
    BookingCreateResponse, BookingDetailResponse, BookingListResponse, CreateBookingRequest,
};
use crate::services::booking_service::BookingService;
use crate::utils::error::AppError;
use crate::utils::jwt::AuthenticatedUser;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;
use uuid::Uuid;

/// Reserve seats on a trip
#[openapi(tag = "Bookings")]
#[post("/bookings", format = "json", data = "<request>")]
pub async fn create_booking(
    request: Json<CreateBookingRequest>,
    auth: AuthenticatedUser,
    booking_service: &State<BookingService>,
) -> Result<Json<BookingCreateResponse>, AppError> {
    let booking = booking_service
        .create_booking(auth.user_id, request.into_inner())
        .await?;

    Ok(Json(BookingCreateResponse {
        success: true,
        message: "Booking created successfully".to_string(),
        booking,
    }))
}

/// List the caller's bookings, newest first
#[openapi(tag = "Bookings")]
#[get("/bookings/user")]
pub async fn list_user_bookings(
    auth: AuthenticatedUser,
    booking_service: &State<BookingService>,
) -> Result<Json<BookingListResponse>, AppError> {
    let bookings = booking_service.list_for_passenger(auth.user_id).await?;

    Ok(Json(BookingListResponse {
        success: true,
        count: bookings.len(),
        bookings,
    }))
}

/// Fetch one booking; only its passenger may see it
#[openapi(tag = "Bookings")]
#[get("/bookings/<booking_id>")]
pub async fn get_booking(
    booking_id: String,
    auth: AuthenticatedUser,
    booking_service: &State<BookingService>,
) -> Result<Json<BookingDetailResponse>, AppError> {
    let booking_id = Uuid::parse_str(&booking_id)
        .map_err(|_| AppError::BadRequest("Invalid booking ID".into()))?;

    let booking = booking_service
        .get_booking(booking_id, auth.user_id)
        .await?;

    Ok(Json(BookingDetailResponse {
        success: true,
        booking,
    }))
}
