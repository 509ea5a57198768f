//! SQLite implementation of BookingRepository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;

use crate::domain::booking::{Booking, PaymentStatus};
use crate::domain::foundation::{BookingId, DomainError, Repository, Timestamp, UserId};
use crate::ports::BookingRepository;

use super::helpers::{next_sequence, parse_column, Table};

/// SQLite implementation of the BookingRepository port.
#[derive(Clone)]
pub struct SqliteBookingRepository {
    pool: SqlitePool,
}

impl SqliteBookingRepository {
    /// Creates a new SqliteBookingRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct BookingRow {
    id: String,
    user_id: String,
    train_id: String,
    train_number: String,
    train_name: String,
    from_station: String,
    to_station: String,
    travel_date: NaiveDate,
    number_of_seats: i64,
    seat_class: Option<String>,
    total_amount: f64,
    status: String,
    booking_date_time: DateTime<Utc>,
    payment_method: Option<String>,
    payment_status: Option<String>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = DomainError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        let seats = u32::try_from(row.number_of_seats).map_err(|e| {
            DomainError::database(
                &format!("Invalid number_of_seats value '{}'", row.number_of_seats),
                e,
            )
        })?;

        // Rows written before payments were tracked carry no payment status.
        let payment_status = match row.payment_status.as_deref() {
            None | Some("") => PaymentStatus::Pending,
            Some(value) => parse_column("payment status", value)?,
        };

        Ok(Booking {
            id: parse_column("booking id", &row.id)?,
            user_id: parse_column("user id", &row.user_id)?,
            train_id: parse_column("train id", &row.train_id)?,
            train_number: row.train_number,
            train_name: row.train_name,
            from_station: row.from_station,
            to_station: row.to_station,
            travel_date: row.travel_date,
            seats,
            seat_class: row.seat_class.unwrap_or_default(),
            total_amount: row.total_amount,
            status: parse_column("booking status", &row.status)?,
            booked_at: Timestamp::from_datetime(row.booking_date_time),
            payment_method: row.payment_method.unwrap_or_default(),
            payment_status,
        })
    }
}

const SELECT_BOOKING: &str = r#"
    SELECT id, user_id, train_id, train_number, train_name, from_station, to_station,
           travel_date, number_of_seats, seat_class, total_amount, status,
           booking_date_time, payment_method, payment_status
    FROM bookings
"#;

#[async_trait]
impl Repository<Booking, BookingId> for SqliteBookingRepository {
    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, DomainError> {
        let row: Option<BookingRow> = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_BOOKING))
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to find booking by id", e))?;

        row.map(Booking::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Booking>, DomainError> {
        let rows: Vec<BookingRow> = sqlx::query_as(SELECT_BOOKING)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list bookings", e))?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn save(&self, booking: &Booking) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO bookings (
                id, user_id, train_id, train_number, train_name, from_station, to_station,
                travel_date, number_of_seats, seat_class, total_amount, status,
                booking_date_time, payment_method, payment_status
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(booking.id.as_str())
        .bind(booking.user_id.as_str())
        .bind(booking.train_id.as_str())
        .bind(&booking.train_number)
        .bind(&booking.train_name)
        .bind(&booking.from_station)
        .bind(&booking.to_station)
        .bind(booking.travel_date)
        .bind(i64::from(booking.seats))
        .bind(&booking.seat_class)
        .bind(booking.total_amount)
        .bind(booking.status.as_str())
        .bind(*booking.booked_at.as_datetime())
        .bind(&booking.payment_method)
        .bind(booking.payment_status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to save booking", e))?;

        Ok(())
    }

    async fn update(&self, booking: &Booking) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE bookings SET
                user_id = ?, train_id = ?, train_number = ?, train_name = ?,
                from_station = ?, to_station = ?, travel_date = ?, number_of_seats = ?,
                seat_class = ?, total_amount = ?, status = ?, booking_date_time = ?,
                payment_method = ?, payment_status = ?
            WHERE id = ?
            "#,
        )
        .bind(booking.user_id.as_str())
        .bind(booking.train_id.as_str())
        .bind(&booking.train_number)
        .bind(&booking.train_name)
        .bind(&booking.from_station)
        .bind(&booking.to_station)
        .bind(booking.travel_date)
        .bind(i64::from(booking.seats))
        .bind(&booking.seat_class)
        .bind(booking.total_amount)
        .bind(booking.status.as_str())
        .bind(*booking.booked_at.as_datetime())
        .bind(&booking.payment_method)
        .bind(booking.payment_status.as_str())
        .bind(booking.id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update booking", e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn next_id(&self) -> Result<BookingId, DomainError> {
        Ok(BookingId::from_sequence(
            next_sequence(&self.pool, Table::Bookings).await?,
        ))
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepository {
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Booking>, DomainError> {
        let rows: Vec<BookingRow> =
            sqlx::query_as(&format!("{} WHERE user_id = ?", SELECT_BOOKING))
                .bind(user_id.as_str())
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to list bookings for user", e))?;

        rows.into_iter().map(Booking::try_from).collect()
    }
}
