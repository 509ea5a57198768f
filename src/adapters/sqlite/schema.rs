//! Table definitions.
//!
//! Tables are created with `IF NOT EXISTS`, so running this against an
//! existing database file is a no-op. Foreign keys document intent only;
//! the connection leaves enforcement off, as the desktop client always has.

use sqlx::SqlitePool;

use crate::domain::foundation::DomainError;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT UNIQUE NOT NULL COLLATE NOCASE,
        phone TEXT,
        role TEXT NOT NULL,
        password TEXT NOT NULL,
        cnic TEXT,
        date_of_birth DATE,
        gender TEXT,
        address TEXT,
        city TEXT,
        postal_code TEXT
    )
"#;

const CREATE_TRAINS: &str = r#"
    CREATE TABLE IF NOT EXISTS trains (
        id TEXT PRIMARY KEY,
        train_number TEXT UNIQUE NOT NULL,
        train_name TEXT NOT NULL,
        type TEXT,
        route TEXT,
        status TEXT
    )
"#;

const CREATE_SCHEDULES: &str = r#"
    CREATE TABLE IF NOT EXISTS schedules (
        id TEXT PRIMARY KEY,
        train_number TEXT NOT NULL,
        train_name TEXT NOT NULL,
        departure_time TEXT,
        arrival_time TEXT,
        route TEXT,
        days TEXT,
        status TEXT,
        FOREIGN KEY (train_number) REFERENCES trains(train_number)
    )
"#;

const CREATE_BOOKINGS: &str = r#"
    CREATE TABLE IF NOT EXISTS bookings (
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        train_id TEXT NOT NULL,
        train_number TEXT NOT NULL,
        train_name TEXT NOT NULL,
        from_station TEXT NOT NULL,
        to_station TEXT NOT NULL,
        travel_date DATE NOT NULL,
        number_of_seats INTEGER NOT NULL,
        seat_class TEXT,
        total_amount REAL NOT NULL,
        status TEXT NOT NULL,
        booking_date_time TIMESTAMP NOT NULL,
        payment_method TEXT,
        payment_status TEXT,
        FOREIGN KEY (user_id) REFERENCES users(id),
        FOREIGN KEY (train_id) REFERENCES trains(id)
    )
"#;

/// Creates any of the four tables that do not exist yet.
pub(crate) async fn create_tables(pool: &SqlitePool) -> Result<(), DomainError> {
    for ddl in [CREATE_USERS, CREATE_TRAINS, CREATE_SCHEDULES, CREATE_BOOKINGS] {
        sqlx::query(ddl)
            .execute(pool)
            .await
            .map_err(|e| DomainError::database("Failed to create schema", e))?;
    }
    Ok(())
}
