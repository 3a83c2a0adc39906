#[macro_use]
extern crate rocket;

use dotenv::dotenv;
use ridenaija::db::{self, Database};
use ridenaija::seed;

#[launch]
async fn rocket() -> _ {
    dotenv().ok();
    env_logger::init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://ridenaija.db".to_string());

    let database = Database::new(&database_url)
        .await
        .expect("Failed to connect to database");

    db::init_schema(database.get_pool())
        .await
        .expect("Failed to initialize database schema");

    seed::initialize(database.get_pool())
        .await
        .expect("Failed to seed database");

    ridenaija::build_rocket(database.pool)
}
