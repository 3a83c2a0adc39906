use crate::models::trip::TripStatus;
use crate::models::user::Role;
use crate::utils::error::{AppError, AppResult};
use bcrypt::{hash, DEFAULT_COST};
use chrono::{Duration, Utc};
use rand::Rng;
use sqlx::SqlitePool;
use uuid::Uuid;

const SAMPLE_PASSWORD: &str = "password123";
const DEFAULT_TRIP_DAYS: i64 = 14;

struct SeedRoute {
    origin: &'static str,
    destination: &'static str,
    duration_hours: f64,
    price: f64,
}

const ROUTES: &[SeedRoute] = &[
    SeedRoute { origin: "Lagos", destination: "Abuja", duration_hours: 11.0, price: 15000.0 },
    SeedRoute { origin: "Lagos", destination: "Port Harcourt", duration_hours: 9.0, price: 12000.0 },
    SeedRoute { origin: "Lagos", destination: "Ibadan", duration_hours: 2.5, price: 3500.0 },
    SeedRoute { origin: "Lagos", destination: "Kano", duration_hours: 16.0, price: 18000.0 },
    SeedRoute { origin: "Lagos", destination: "Enugu", duration_hours: 8.0, price: 11000.0 },
    SeedRoute { origin: "Lagos", destination: "Calabar", duration_hours: 13.0, price: 14000.0 },
    SeedRoute { origin: "Lagos", destination: "Abeokuta", duration_hours: 2.0, price: 2500.0 },
    SeedRoute { origin: "Lagos", destination: "Akure", duration_hours: 5.0, price: 5500.0 },
    SeedRoute { origin: "Abuja", destination: "Lagos", duration_hours: 11.0, price: 15000.0 },
    SeedRoute { origin: "Abuja", destination: "Kano", duration_hours: 6.0, price: 8000.0 },
    SeedRoute { origin: "Abuja", destination: "Jos", duration_hours: 4.0, price: 6000.0 },
    SeedRoute { origin: "Abuja", destination: "Ilorin", duration_hours: 5.0, price: 7000.0 },
    SeedRoute { origin: "Abuja", destination: "Port Harcourt", duration_hours: 9.0, price: 13000.0 },
    SeedRoute { origin: "Ibadan", destination: "Lagos", duration_hours: 2.5, price: 3500.0 },
    SeedRoute { origin: "Ibadan", destination: "Abuja", duration_hours: 9.0, price: 13500.0 },
    SeedRoute { origin: "Port Harcourt", destination: "Lagos", duration_hours: 9.0, price: 12000.0 },
    SeedRoute { origin: "Port Harcourt", destination: "Enugu", duration_hours: 4.0, price: 6000.0 },
    SeedRoute { origin: "Kano", destination: "Lagos", duration_hours: 16.0, price: 18000.0 },
    SeedRoute { origin: "Kano", destination: "Abuja", duration_hours: 6.0, price: 8000.0 },
    SeedRoute { origin: "Enugu", destination: "Lagos", duration_hours: 8.0, price: 11000.0 },
];

const DEPARTURE_SLOTS: [u32; 3] = [8, 12, 16];

// Populate an empty database with sample accounts and a rolling window of
// scheduled trips. Does nothing once data exists.
pub async fn initialize(pool: &SqlitePool) -> AppResult<()> {
    create_sample_users(pool).await?;
    generate_trips(pool).await?;
    Ok(())
}

async fn create_sample_users(pool: &SqlitePool) -> AppResult<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let samples = [
        ("Admin User", "admin@ridenaija.com", "08011112222", Role::Admin, 5.0),
        ("John Driver", "driver@ridenaija.com", "08012345678", Role::Driver, 4.8),
        ("Sarah Passenger", "passenger@ridenaija.com", "08087654321", Role::Passenger, 4.9),
    ];

    for (name, email, phone, role, rating) in samples {
        insert_user(pool, name, email, phone, role, rating).await?;
    }

    log::info!("created {} sample users", samples.len());
    Ok(())
}

async fn insert_user(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    phone: &str,
    role: Role,
    rating: f64,
) -> AppResult<Uuid> {
    let id = Uuid::new_v4();
    let password_hash = hash(SAMPLE_PASSWORD.as_bytes(), DEFAULT_COST)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    sqlx::query(
        "INSERT INTO users (id, name, email, phone, password_hash, role, rating, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(phone)
    .bind(&password_hash)
    .bind(role)
    .bind(rating)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(id)
}

async fn generate_trips(pool: &SqlitePool) -> AppResult<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM trips")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let driver_id = match sqlx::query_scalar::<_, Uuid>(
        "SELECT id FROM users WHERE role = 'driver' LIMIT 1",
    )
    .fetch_optional(pool)
    .await?
    {
        Some(id) => id,
        None => {
            insert_user(
                pool,
                "Default Driver",
                "default.driver@ridenaija.com",
                "08000000000",
                Role::Driver,
                4.5,
            )
            .await?
        }
    };

    let horizon_days = std::env::var("SEED_TRIP_DAYS")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(DEFAULT_TRIP_DAYS);

    let now = Utc::now();
    let amenities =
        serde_json::json!(["AC", "Comfortable Seats", "Charging Ports"]).to_string();
    let mut trip_count: u32 = 0;

    for day in 0..horizon_days {
        let date = (now + Duration::days(day)).date_naive();

        for route in ROUTES {
            for slot in DEPARTURE_SLOTS {
                let departure = date
                    .and_hms_opt(slot, 0, 0)
                    .expect("valid departure slot")
                    .and_utc();

                if departure < now {
                    continue;
                }

                let arrival = departure + Duration::minutes((route.duration_hours * 60.0) as i64);
                let seats: i64 = rand::thread_rng().gen_range(8..=14);

                sqlx::query(
                    "INSERT INTO trips (id, driver_id, origin, destination, departure_time,
                         arrival_time, available_seats, total_seats, price_per_seat, car_model,
                         car_plate, car_type, amenities, status, created_at)
                     VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                )
                .bind(Uuid::new_v4())
                .bind(driver_id)
                .bind(route.origin)
                .bind(route.destination)
                .bind(departure)
                .bind(arrival)
                .bind(seats)
                .bind(seats)
                .bind(route.price)
                .bind("Toyota Hiace")
                .bind(format!("RNJ{:03}", trip_count))
                .bind("Bus")
                .bind(&amenities)
                .bind(TripStatus::Scheduled)
                .bind(now)
                .execute(pool)
                .await?;

                trip_count += 1;
            }
        }
    }

    log::info!("generated {} trips over {} days", trip_count, horizon_days);
    Ok(())
}
