pub mod account_service;
pub mod booking_service;
pub mod payment_service;
pub mod trip_service;
