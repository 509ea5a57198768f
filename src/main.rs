//! Prepares the booking database: applies configuration, creates the schema,
//! seeds reference data and reports what the store holds.

use railway_booking::adapters::sqlite::Database;
use railway_booking::config::AppConfig;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))?;
    let (plain, json) = if config.logging.json {
        (None, Some(fmt::layer().json()))
    } else {
        (Some(fmt::layer()), None)
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(plain)
        .with(json)
        .init();

    info!(url = %config.database.url, "Opening booking database");
    let db = Database::open(&config.database).await?;

    let counts = db.table_counts().await?;
    info!(
        users = counts.users,
        trains = counts.trains,
        schedules = counts.schedules,
        bookings = counts.bookings,
        "Booking database ready"
    );

    db.close().await;
    Ok(())
}
