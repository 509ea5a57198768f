//! In-memory port implementations shared by handler tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::domain::booking::{Booking, TicketRequest};
use crate::domain::foundation::{
    BookingId, DomainError, Repository, ScheduleId, Timestamp, TrainId, UserId,
};
use crate::domain::train::{NewTrain, Schedule, Train, TrainStatus};
use crate::domain::user::{NewUser, User, UserRole};
use crate::ports::{BookingRepository, ScheduleRepository, TrainRepository, UserRepository};

/// Rows keyed by id, with a switch that makes every call fail.
pub(crate) struct InMemoryTable<T> {
    rows: Mutex<BTreeMap<i64, T>>,
    fail: bool,
}

impl<T: Clone> InMemoryTable<T> {
    pub(crate) fn new() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            fail: true,
        }
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::database("Simulated failure", "disk I/O error"));
        }
        Ok(())
    }

    fn key(id: &str) -> i64 {
        id.parse().unwrap_or(0)
    }

    fn get(&self, id: &str) -> Result<Option<T>, DomainError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().get(&Self::key(id)).cloned())
    }

    fn all(&self) -> Result<Vec<T>, DomainError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    fn insert(&self, id: &str, row: &T) -> Result<(), DomainError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&Self::key(id)) {
            return Err(DomainError::database("Failed to save", "UNIQUE constraint failed"));
        }
        rows.insert(Self::key(id), row.clone());
        Ok(())
    }

    fn replace(&self, id: &str, row: &T) -> Result<bool, DomainError> {
        self.check()?;
        match self.rows.lock().unwrap().get_mut(&Self::key(id)) {
            Some(slot) => {
                *slot = row.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove(&self, id: &str) -> Result<bool, DomainError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().remove(&Self::key(id)).is_some())
    }

    fn next(&self) -> Result<i64, DomainError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().keys().max().copied().unwrap_or(0) + 1)
    }

    fn filter(&self, keep: impl Fn(&T) -> bool) -> Result<Vec<T>, DomainError> {
        Ok(self.all()?.into_iter().filter(|row| keep(row)).collect())
    }
}

macro_rules! in_memory_repository {
    ($name:ident, $entity:ty, $id:ty) => {
        pub(crate) struct $name(pub(crate) InMemoryTable<$entity>);

        impl $name {
            pub(crate) fn new() -> Self {
                Self(InMemoryTable::new())
            }

            pub(crate) fn failing() -> Self {
                Self(InMemoryTable::failing())
            }

            pub(crate) fn with(rows: Vec<$entity>) -> Self {
                let repo = Self::new();
                for row in rows {
                    repo.0.insert(row.id.as_str(), &row).unwrap();
                }
                repo
            }
        }

        #[async_trait]
        impl Repository<$entity, $id> for $name {
            async fn find_by_id(&self, id: &$id) -> Result<Option<$entity>, DomainError> {
                self.0.get(id.as_str())
            }

            async fn list_all(&self) -> Result<Vec<$entity>, DomainError> {
                self.0.all()
            }

            async fn save(&self, entity: &$entity) -> Result<(), DomainError> {
                self.0.insert(entity.id.as_str(), entity)
            }

            async fn update(&self, entity: &$entity) -> Result<bool, DomainError> {
                self.0.replace(entity.id.as_str(), entity)
            }

            async fn next_id(&self) -> Result<$id, DomainError> {
                Ok(<$id>::from_sequence(self.0.next()?))
            }
        }
    };
}

in_memory_repository!(InMemoryUsers, User, UserId);
in_memory_repository!(InMemoryTrains, Train, TrainId);
in_memory_repository!(InMemorySchedules, Schedule, ScheduleId);
in_memory_repository!(InMemoryBookings, Booking, BookingId);

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self.0.filter(|u| u.has_email(email))?.into_iter().next())
    }

    async fn email_exists(
        &self,
        email: &str,
        excluding: Option<&UserId>,
    ) -> Result<bool, DomainError> {
        let matches = self
            .0
            .filter(|u| u.has_email(email) && Some(&u.id) != excluding)?;
        Ok(!matches.is_empty())
    }
}

#[async_trait]
impl TrainRepository for InMemoryTrains {
    async fn find_by_number(&self, train_number: &str) -> Result<Option<Train>, DomainError> {
        Ok(self
            .0
            .filter(|t| t.train_number == train_number)?
            .into_iter()
            .next())
    }

    async fn delete(&self, id: &TrainId) -> Result<bool, DomainError> {
        self.0.remove(id.as_str())
    }
}

#[async_trait]
impl ScheduleRepository for InMemorySchedules {
    async fn find_by_train_number(
        &self,
        train_number: &str,
    ) -> Result<Option<Schedule>, DomainError> {
        Ok(self
            .0
            .filter(|s| s.train_number == train_number)?
            .into_iter()
            .next())
    }

    async fn delete(&self, id: &ScheduleId) -> Result<bool, DomainError> {
        self.0.remove(id.as_str())
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookings {
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Booking>, DomainError> {
        self.0.filter(|b| &b.user_id == user_id)
    }
}

pub(crate) fn passenger(id: i64, email: &str) -> User {
    User::register(
        UserId::from_sequence(id),
        NewUser::new("Sarah Khan", email, "0300-1111111", UserRole::Passenger, "password1"),
    )
}

pub(crate) fn train(id: i64, number: &str, route: &str) -> Train {
    NewTrain {
        train_number: number.to_string(),
        train_name: format!("{} Express", number),
        train_type: "Express".to_string(),
        route: route.to_string(),
        status: TrainStatus::OnTime,
    }
    .into_train(TrainId::from_sequence(id))
}

pub(crate) fn pending_booking(id: i64, user_id: i64) -> Booking {
    let request = TicketRequest::new(
        &passenger(user_id, "owner@example.com"),
        &train(1, "1UP", "Karachi - Lahore"),
        "Karachi",
        "Lahore",
        NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        1,
        "Economy",
        2500.0,
    );
    Booking::create(BookingId::from_sequence(id), request, Timestamp::now())
}
