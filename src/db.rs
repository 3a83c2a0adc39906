use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

// Database connection manager
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    // Create a new database connection pool
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(options)
            .await?;

        Ok(Database { pool })
    }

    // Get a reference to the connection pool
    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// Apply the schema. Every statement is idempotent, so this runs on each boot.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let tables = vec![
        "CREATE TABLE IF NOT EXISTS users (
            id BLOB PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT NOT NULL,
            password_hash TEXT NOT NULL,
            role TEXT NOT NULL DEFAULT 'passenger',
            rating REAL NOT NULL DEFAULT 0.0,
            created_at TEXT NOT NULL,
            CONSTRAINT users_email_uindex UNIQUE (email)
        )",
        "CREATE TABLE IF NOT EXISTS trips (
            id BLOB PRIMARY KEY,
            driver_id BLOB NOT NULL REFERENCES users (id),
            origin TEXT NOT NULL,
            destination TEXT NOT NULL,
            departure_time TEXT NOT NULL,
            arrival_time TEXT NOT NULL,
            available_seats INTEGER NOT NULL,
            total_seats INTEGER NOT NULL,
            price_per_seat REAL NOT NULL,
            car_model TEXT,
            car_plate TEXT,
            car_type TEXT NOT NULL DEFAULT 'Sedan',
            amenities TEXT NOT NULL DEFAULT '[]',
            status TEXT NOT NULL DEFAULT 'scheduled',
            created_at TEXT NOT NULL,
            CONSTRAINT trips_seats_check
                CHECK (available_seats >= 0 AND available_seats <= total_seats)
        )",
        "CREATE TABLE IF NOT EXISTS bookings (
            id BLOB PRIMARY KEY,
            trip_id BLOB NOT NULL REFERENCES trips (id),
            passenger_id BLOB NOT NULL REFERENCES users (id),
            seats INTEGER NOT NULL,
            total_price REAL NOT NULL,
            status TEXT NOT NULL DEFAULT 'confirmed',
            payment_status TEXT NOT NULL DEFAULT 'pending',
            notes TEXT,
            booking_reference TEXT NOT NULL,
            receipt_number TEXT NOT NULL,
            created_at TEXT NOT NULL,
            CONSTRAINT bookings_reference_uindex UNIQUE (booking_reference),
            CONSTRAINT bookings_receipt_uindex UNIQUE (receipt_number)
        )",
        "CREATE INDEX IF NOT EXISTS bookings_passenger_idx ON bookings (passenger_id)",
        "CREATE INDEX IF NOT EXISTS trips_departure_idx ON trips (departure_time)",
    ];

    for create_sql in tables {
        sqlx::query(create_sql).execute(pool).await?;
    }

    Ok(())
}
