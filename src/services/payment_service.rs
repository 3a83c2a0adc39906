use crate::models::booking::{Booking, PaymentStatus, ReceiptView};
use crate::utils::error::{AppError, AppResult};
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

const BOOKING_COLUMNS: &str = "id, trip_id, passenger_id, seats, total_price, status, \
     payment_status, notes, booking_reference, receipt_number, created_at";

#[derive(Clone)]
pub struct PaymentService {
    pool: SqlitePool,
}

impl PaymentService {
    pub fn new(pool: SqlitePool) -> Self {
        PaymentService { pool }
    }

    // Mark a booking as paid. Re-marking an already-paid booking succeeds
    // without changing anything.
    pub async fn mark_paid(
        &self,
        booking_id: Uuid,
        requesting_user_id: Uuid,
    ) -> AppResult<ReceiptView> {
        let booking = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {} FROM bookings WHERE id = ?",
            BOOKING_COLUMNS
        ))
        .bind(booking_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".into()))?;

        if booking.passenger_id != requesting_user_id {
            return Err(AppError::Forbidden("Unauthorized".into()));
        }

        sqlx::query("UPDATE bookings SET payment_status = ? WHERE id = ?")
            .bind(PaymentStatus::Paid)
            .bind(booking_id)
            .execute(&self.pool)
            .await?;

        Ok(ReceiptView {
            booking_reference: booking.booking_reference,
            receipt_number: booking.receipt_number,
            total_amount: booking.total_price,
            payment_date: Utc::now().to_rfc3339(),
        })
    }
}
