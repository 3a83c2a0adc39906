pub mod auth_route;
pub mod booking_route;
pub mod health_route;
pub mod payment_route;
pub mod trip_route;
