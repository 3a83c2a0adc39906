use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use ridenaija::db;
use ridenaija::models::trip::TripStatus;
use ridenaija::models::user::Role;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use uuid::Uuid;

static LOG_INIT: Lazy<()> = Lazy::new(|| {
    let _ = env_logger::builder().is_test(true).try_init();
});

pub struct TestDb {
    pub pool: SqlitePool,
}

impl TestDb {
    // Fresh in-memory database per test. A single pooled connection keeps
    // every transaction serialized against the same database and pins the
    // in-memory store alive for the test's duration.
    pub async fn new() -> anyhow::Result<Self> {
        Lazy::force(&LOG_INIT);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        db::init_schema(&pool).await?;

        Ok(TestDb { pool })
    }
}

#[allow(dead_code)]
pub async fn insert_user(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    role: Role,
) -> anyhow::Result<Uuid> {
    let id = Uuid::new_v4();

    sqlx::query(
        "INSERT INTO users (id, name, email, phone, password_hash, role, rating, created_at)
         VALUES (?, ?, ?, ?, 'test-hash', ?, 4.5, ?)",
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind("08000000000")
    .bind(role)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(id)
}

#[allow(dead_code)]
pub async fn insert_trip(
    pool: &SqlitePool,
    driver_id: Uuid,
    origin: &str,
    destination: &str,
    departure: DateTime<Utc>,
    seats: i64,
    price_per_seat: f64,
) -> anyhow::Result<Uuid> {
    let id = Uuid::new_v4();

    sqlx::query(
        "INSERT INTO trips (id, driver_id, origin, destination, departure_time, arrival_time,
             available_seats, total_seats, price_per_seat, car_model, car_plate, car_type,
             amenities, status, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, 'Toyota Hiace', 'RNJ001', 'Bus',
             '[\"AC\"]', ?, ?)",
    )
    .bind(id)
    .bind(driver_id)
    .bind(origin)
    .bind(destination)
    .bind(departure)
    .bind(departure + chrono::Duration::hours(3))
    .bind(seats)
    .bind(seats)
    .bind(price_per_seat)
    .bind(TripStatus::Scheduled)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(id)
}

#[allow(dead_code)]
pub async fn set_trip_status(
    pool: &SqlitePool,
    trip_id: Uuid,
    status: TripStatus,
) -> anyhow::Result<()> {
    sqlx::query("UPDATE trips SET status = ? WHERE id = ?")
        .bind(status)
        .bind(trip_id)
        .execute(pool)
        .await?;
    Ok(())
}

#[allow(dead_code)]
pub async fn available_seats(pool: &SqlitePool, trip_id: Uuid) -> anyhow::Result<i64> {
    let seats = sqlx::query_scalar("SELECT available_seats FROM trips WHERE id = ?")
        .bind(trip_id)
        .fetch_one(pool)
        .await?;
    Ok(seats)
}

#[allow(dead_code)]
pub async fn booking_count(pool: &SqlitePool, trip_id: Uuid) -> anyhow::Result<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE trip_id = ?")
        .bind(trip_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}
