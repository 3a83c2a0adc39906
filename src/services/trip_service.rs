use crate::models::trip::{TripSearchRow, TripView};
use crate::utils::error::AppResult;
use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct TripService {
    pool: SqlitePool,
}

impl TripService {
    pub fn new(pool: SqlitePool) -> Self {
        TripService { pool }
    }

    // Search bookable trips. Origin/destination are case-insensitive
    // substring filters, date narrows to a single departure day; a date that
    // does not parse is ignored rather than rejected. Trips that are not
    // scheduled, are sold out, or have already departed never appear.
    pub async fn search(
        &self,
        origin: Option<String>,
        destination: Option<String>,
        date: Option<String>,
    ) -> AppResult<Vec<TripView>> {
        let origin = normalize_filter(origin);
        let destination = normalize_filter(destination);
        let date: Option<NaiveDate> =
            date.and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok());

        let rows = sqlx::query_as::<_, TripSearchRow>(
            r#"
            SELECT
                t.id,
                t.origin,
                t.destination,
                t.departure_time,
                t.arrival_time,
                t.available_seats,
                t.price_per_seat,
                t.car_model,
                t.car_plate,
                t.car_type,
                t.amenities,
                t.status,
                u.name AS driver_name,
                u.rating AS driver_rating
            FROM trips t
            LEFT JOIN users u ON u.id = t.driver_id
            WHERE t.status = 'scheduled'
              AND t.available_seats > 0
              AND datetime(t.departure_time) >= datetime(?1)
              AND (?2 IS NULL OR t.origin LIKE '%' || ?2 || '%')
              AND (?3 IS NULL OR t.destination LIKE '%' || ?3 || '%')
              AND (?4 IS NULL OR date(t.departure_time) = ?4)
            ORDER BY t.departure_time ASC
            "#,
        )
        .bind(Utc::now())
        .bind(origin)
        .bind(destination)
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TripView::from).collect())
    }
}

fn normalize_filter(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
