use crate::models::booking::{PaymentRequest, PaymentResponse};
use crate::services::payment_service::PaymentService;
use crate::utils::error::AppError;
use crate::utils::jwt::AuthenticatedUser;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;
use uuid::Uuid;

/// Mark a booking as paid and return its receipt
#[openapi(tag = "Payments")]
#[post("/payment/process", format = "json", data = "<request>")]
pub async fn process_payment(
    request: Json<PaymentRequest>,
    auth: AuthenticatedUser,
    payment_service: &State<PaymentService>,
) -> Result<Json<PaymentResponse>, AppError> {
    let booking_id = Uuid::parse_str(&request.booking_id)
        .map_err(|_| AppError::BadRequest("Invalid booking ID".into()))?;

    let receipt = payment_service.mark_paid(booking_id, auth.user_id).await?;

    Ok(Json(PaymentResponse {
        success: true,
        message: "Payment processed successfully".to_string(),
        receipt,
    }))
}
