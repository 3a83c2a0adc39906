#[macro_use]
extern crate rocket;
extern crate rocket_okapi;

pub mod db;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;
pub mod swagger;
pub mod utils;

use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};
use rocket_okapi::openapi_get_routes;
use rocket_okapi::swagger_ui::make_swagger_ui;
use sqlx::SqlitePool;

pub fn build_rocket(pool: SqlitePool) -> Rocket<Build> {
    let account_service = services::account_service::AccountService::new(pool.clone());
    let trip_service = services::trip_service::TripService::new(pool.clone());
    let booking_service = services::booking_service::BookingService::new(pool.clone());
    let payment_service = services::payment_service::PaymentService::new(pool);

    rocket::build()
        .manage(account_service)
        .manage(trip_service)
        .manage(booking_service)
        .manage(payment_service)
        .mount(
            "/api",
            openapi_get_routes![
                routes::auth_route::register,
                routes::auth_route::login,
                routes::auth_route::logout,
                routes::auth_route::check,
                routes::trip_route::search_trips,
                routes::booking_route::create_booking,
                routes::booking_route::list_user_bookings,
                routes::booking_route::get_booking,
                routes::payment_route::process_payment,
                routes::health_route::health,
            ],
        )
        .mount("/swagger", make_swagger_ui(&swagger::swagger_ui()))
        .register(
            "/",
            catchers![
                utils::catchers::unauthorized,
                utils::catchers::not_found,
                utils::catchers::unprocessable,
                utils::catchers::internal_error,
            ],
        )
        .attach(AdHoc::on_response("CORS", |_, res| {
            Box::pin(async move {
                res.set_header(rocket::http::Header::new(
                    "Access-Control-Allow-Origin",
                    "*",
                ));
            })
        }))
}
