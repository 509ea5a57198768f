//! Reference data written into empty tables on first start.
//!
//! Each table is checked separately: a table that already holds rows is
//! left alone, so the data is written at most once per database file.

use chrono::{Duration, NaiveDate, Utc};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::domain::booking::{Booking, TicketRequest};
use crate::domain::foundation::{
    BookingId, DomainError, Repository, ScheduleId, Timestamp, TrainId, UserId,
};
use crate::domain::train::{NewSchedule, NewTrain, Schedule, Train, TrainStatus};
use crate::domain::user::{NewUser, User, UserRole};

use super::helpers::{count_rows, Table};
use super::{
    SqliteBookingRepository, SqliteScheduleRepository, SqliteTrainRepository,
    SqliteUserRepository,
};

/// Rows inserted by one seeding run, per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub trains: usize,
    pub schedules: usize,
    pub bookings: usize,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.users + self.trains + self.schedules + self.bookings == 0
    }
}

pub(crate) async fn seed_reference_data(pool: &SqlitePool) -> Result<SeedReport, DomainError> {
    let mut report = SeedReport::default();

    if table_is_empty(pool, Table::Users).await? {
        report.users = insert_all(&SqliteUserRepository::new(pool.clone()), users()).await?;
    }
    if table_is_empty(pool, Table::Trains).await? {
        report.trains = insert_all(&SqliteTrainRepository::new(pool.clone()), trains()).await?;
    }
    if table_is_empty(pool, Table::Schedules).await? {
        report.schedules =
            insert_all(&SqliteScheduleRepository::new(pool.clone()), schedules()).await?;
    }
    if table_is_empty(pool, Table::Bookings).await? {
        report.bookings =
            insert_all(&SqliteBookingRepository::new(pool.clone()), bookings()?).await?;
    }

    if report.is_empty() {
        debug!("Reference data already present, nothing seeded");
    } else {
        info!(
            users = report.users,
            trains = report.trains,
            schedules = report.schedules,
            bookings = report.bookings,
            "Seeded reference data"
        );
    }
    Ok(report)
}

async fn table_is_empty(pool: &SqlitePool, table: Table) -> Result<bool, DomainError> {
    Ok(count_rows(pool, table).await? == 0)
}

async fn insert_all<T, ID, R>(repo: &R, rows: Vec<T>) -> Result<usize, DomainError>
where
    T: Send + Sync,
    ID: Send + Sync + std::fmt::Debug + 'static,
    R: Repository<T, ID>,
{
    for row in &rows {
        repo.save(row).await?;
    }
    Ok(rows.len())
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn users() -> Vec<User> {
    let mut admin = NewUser::new(
        "System Admin",
        "admin@railsafar.com",
        "0300-0000000",
        UserRole::Admin,
        "admin123",
    );
    admin.cnic = Some("35202-1234567-1".to_string());
    admin.date_of_birth = date(1985, 5, 12);
    admin.gender = Some("Male".to_string());
    admin.address = Some("HQ, Rail Safar Building".to_string());
    admin.city = Some("Karachi".to_string());
    admin.postal_code = Some("75500".to_string());

    let mut sarah = NewUser::new(
        "Sarah Khan",
        "sarah.khan@example.com",
        "0300-1111111",
        UserRole::Passenger,
        "password1",
    );
    sarah.cnic = Some("35201-9876543-2".to_string());
    sarah.date_of_birth = date(1995, 8, 20);
    sarah.gender = Some("Female".to_string());
    sarah.address = Some("123 Main Street".to_string());
    sarah.city = Some("Lahore".to_string());
    sarah.postal_code = Some("54000".to_string());

    vec![
        User::register(UserId::from_sequence(100), admin),
        User::register(UserId::from_sequence(101), sarah),
    ]
}

const TRAINS: [(&str, &str, &str, &str, TrainStatus); 6] = [
    ("1UP", "Karachi Express", "Express", "Karachi - Lahore", TrainStatus::OnTime),
    ("2DN", "Lahore Express", "Express", "Lahore - Karachi", TrainStatus::Delayed),
    ("3UP", "Green Line", "Passenger", "Islamabad - Multan", TrainStatus::OnTime),
    ("4DN", "Freight Express", "Freight", "Port Qasim - Faisalabad", TrainStatus::Cancelled),
    ("5UP", "Business Express", "Express", "Rawalpindi - Quetta", TrainStatus::OnTime),
    ("6DN", "Peshawar Mail", "Passenger", "Peshawar - Karachi", TrainStatus::Delayed),
];

fn trains() -> Vec<Train> {
    TRAINS
        .iter()
        .zip(1..)
        .map(|((number, name, kind, route, status), id)| {
            NewTrain {
                train_number: number.to_string(),
                train_name: name.to_string(),
                train_type: kind.to_string(),
                route: route.to_string(),
                status: status.clone(),
            }
            .into_train(TrainId::from_sequence(id))
        })
        .collect()
}

const SCHEDULES: [(&str, &str, &str, &str, &str, &str); 5] = [
    ("1UP", "Karachi Express", "08:00 AM", "08:00 PM", "Karachi - Lahore", "Daily"),
    ("2DN", "Lahore Express", "09:00 AM", "09:00 PM", "Lahore - Karachi", "Daily"),
    ("3UP", "Green Line", "10:30 AM", "06:30 PM", "Islamabad - Multan", "Mon-Fri"),
    ("5UP", "Business Express", "07:00 AM", "05:00 PM", "Rawalpindi - Quetta", "Daily"),
    ("6DN", "Peshawar Mail", "11:00 AM", "11:00 PM", "Peshawar - Karachi", "Daily"),
];

fn schedules() -> Vec<Schedule> {
    SCHEDULES
        .iter()
        .zip(1..)
        .map(|(&(number, name, departs, arrives, route, days), id)| {
            NewSchedule {
                train_number: number.to_string(),
                train_name: name.to_string(),
                departure_time: departs.to_string(),
                arrival_time: arrives.to_string(),
                route: route.to_string(),
                days: days.to_string(),
                status: "Active".to_string(),
            }
            .into_schedule(ScheduleId::from_sequence(id))
        })
        .collect()
}

fn bookings() -> Result<Vec<Booking>, DomainError> {
    let request = TicketRequest {
        user_id: UserId::from_sequence(101),
        train_id: TrainId::from_sequence(1),
        train_number: "1UP".to_string(),
        train_name: "Karachi Express".to_string(),
        from_station: "Karachi".to_string(),
        to_station: "Lahore".to_string(),
        travel_date: Utc::now().date_naive() + Duration::days(2),
        seats: 2,
        seat_class: "Economy".to_string(),
        total_amount: 5000.0,
    };
    let mut sample = Booking::create(
        BookingId::from_sequence(400),
        request,
        Timestamp::now().minus_days(1),
    );
    sample.record_payment("Card")?;
    Ok(vec![sample])
}
