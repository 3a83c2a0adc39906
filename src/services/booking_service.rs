use crate::models::booking::{
    Booking, BookingStatus, BookingView, BookingWithTripRow, CreateBookingRequest, PaymentStatus,
    TripSummary,
};
use crate::models::trip::{Trip, TripStatus};
use crate::utils::error::{AppError, AppResult};
use crate::utils::reference;
use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

const MAX_CODE_ATTEMPTS: u32 = 8;

const TRIP_COLUMNS: &str = "id, driver_id, origin, destination, departure_time, arrival_time, \
     available_seats, total_seats, price_per_seat, car_model, car_plate, car_type, amenities, \
     status, created_at";

const BOOKING_WITH_TRIP: &str = r#"
    SELECT
        b.id,
        b.trip_id,
        b.passenger_id,
        b.seats,
        b.total_price,
        b.status,
        b.payment_status,
        b.notes,
        b.booking_reference,
        b.receipt_number,
        b.created_at,
        t.origin,
        t.destination,
        t.departure_time,
        t.arrival_time,
        t.price_per_seat,
        t.car_model,
        t.car_plate,
        u.name AS driver_name
    FROM bookings b
    LEFT JOIN trips t ON t.id = b.trip_id
    LEFT JOIN users u ON u.id = t.driver_id
"#;

#[derive(Clone)]
pub struct BookingService {
    pool: SqlitePool,
}

impl BookingService {
    pub fn new(pool: SqlitePool) -> Self {
        BookingService { pool }
    }

    // Reserve seats on a trip. The seat decrement and the booking insert
    // commit as one transaction; the conditional UPDATE is what enforces the
    // inventory invariant when two requests race for the same seats.
    pub async fn create_booking(
        &self,
        passenger_id: Uuid,
        request: CreateBookingRequest,
    ) -> AppResult<BookingView> {
        let trip_id = Uuid::parse_str(&request.trip_id)
            .map_err(|_| AppError::BadRequest("Invalid trip ID".into()))?;

        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let trip = sqlx::query_as::<_, Trip>(&format!(
            "SELECT {} FROM trips WHERE id = ?",
            TRIP_COLUMNS
        ))
        .bind(trip_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Trip not found".into()))?;

        if request.seats < 1 {
            return Err(AppError::BadRequest("At least 1 seat required".into()));
        }

        if trip.status != TripStatus::Scheduled {
            return Err(AppError::Conflict("Trip is not available for booking".into()));
        }

        if trip.departure_time < now {
            return Err(AppError::Conflict("Cannot book past trips".into()));
        }

        if trip.available_seats < request.seats {
            return Err(AppError::Conflict("Not enough seats available".into()));
        }

        let updated = sqlx::query(
            "UPDATE trips
             SET available_seats = available_seats - ?1
             WHERE id = ?2 AND status = 'scheduled' AND available_seats >= ?1",
        )
        .bind(request.seats)
        .bind(trip_id)
        .execute(&mut *tx)
        .await?;

        // Zero rows means another reservation won the race after our read;
        // dropping the transaction rolls the decrement attempt back.
        if updated.rows_affected() == 0 {
            return Err(AppError::Conflict("Not enough seats available".into()));
        }

        let (booking_reference, receipt_number) = mint_codes(&mut tx).await?;

        let booking = Booking {
            id: Uuid::new_v4(),
            trip_id,
            passenger_id,
            seats: request.seats,
            total_price: request.seats as f64 * trip.price_per_seat,
            status: BookingStatus::Confirmed,
            // Settled at creation time; the payment flow re-marks paid.
            payment_status: PaymentStatus::Paid,
            notes: request.notes.clone(),
            booking_reference,
            receipt_number,
            created_at: now,
        };

        sqlx::query(
            "INSERT INTO bookings (id, trip_id, passenger_id, seats, total_price, status,
                 payment_status, notes, booking_reference, receipt_number, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(booking.id)
        .bind(booking.trip_id)
        .bind(booking.passenger_id)
        .bind(booking.seats)
        .bind(booking.total_price)
        .bind(booking.status)
        .bind(booking.payment_status)
        .bind(&booking.notes)
        .bind(&booking.booking_reference)
        .bind(&booking.receipt_number)
        .bind(booking.created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let driver_name = sqlx::query_scalar::<_, String>("SELECT name FROM users WHERE id = ?")
            .bind(trip.driver_id)
            .fetch_optional(&self.pool)
            .await?
            .unwrap_or_else(|| "Unknown Driver".to_string());

        // The embedded trip summary is the state at booking time
        Ok(BookingView {
            id: booking.id.to_string(),
            trip_id: booking.trip_id.to_string(),
            seats: booking.seats,
            total_price: booking.total_price,
            status: booking.status.to_string(),
            payment_status: booking.payment_status.to_string(),
            notes: booking.notes,
            booking_reference: booking.booking_reference,
            receipt_number: booking.receipt_number,
            created_at: booking.created_at.to_rfc3339(),
            trip_details: TripSummary {
                origin: trip.origin,
                destination: trip.destination,
                departure_time: Some(trip.departure_time.to_rfc3339()),
                arrival_time: Some(trip.arrival_time.to_rfc3339()),
                price_per_seat: trip.price_per_seat,
                driver_name,
                car_model: trip.car_model,
                car_plate: trip.car_plate,
            },
        })
    }

    // All bookings for a passenger, newest first, with the trip's current
    // state joined in. A booking whose trip has vanished still renders, with
    // placeholder fields.
    pub async fn list_for_passenger(&self, passenger_id: Uuid) -> AppResult<Vec<BookingView>> {
        let rows = sqlx::query_as::<_, BookingWithTripRow>(&format!(
            "{} WHERE b.passenger_id = ? ORDER BY b.created_at DESC",
            BOOKING_WITH_TRIP
        ))
        .bind(passenger_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BookingView::from).collect())
    }

    pub async fn get_booking(
        &self,
        booking_id: Uuid,
        requesting_user_id: Uuid,
    ) -> AppResult<BookingView> {
        let row = sqlx::query_as::<_, BookingWithTripRow>(&format!(
            "{} WHERE b.id = ?",
            BOOKING_WITH_TRIP
        ))
        .bind(booking_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".into()))?;

        if row.passenger_id != requesting_user_id {
            return Err(AppError::Forbidden("Unauthorized".into()));
        }

        Ok(BookingView::from(row))
    }
}

// Generate a booking reference + receipt number pair no existing booking
// uses. Collisions are regenerated; a bounded number of attempts guards
// against the pathological case.
async fn mint_codes(tx: &mut Transaction<'_, Sqlite>) -> AppResult<(String, String)> {
    for _ in 0..MAX_CODE_ATTEMPTS {
        let booking_reference = reference::booking_reference();
        let receipt_number = reference::receipt_number();

        let clash =
            sqlx::query("SELECT 1 FROM bookings WHERE booking_reference = ? OR receipt_number = ?")
                .bind(&booking_reference)
                .bind(&receipt_number)
                .fetch_optional(&mut **tx)
                .await?;

        if clash.is_none() {
            return Ok((booking_reference, receipt_number));
        }
    }

    Err(AppError::Internal(
        "exhausted attempts to mint a unique booking reference".into(),
    ))
}
