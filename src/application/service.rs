//! RailwayService - the operation set used by the desktop screens.
//!
//! Every read-then-write sequence (id allocation followed by insert, email
//! check followed by update, load followed by payment) runs under one async
//! write gate, so writers inside this process never interleave. Reads are
//! not gated.

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::adapters::sqlite::{
    Database, SqliteBookingRepository, SqliteScheduleRepository, SqliteTrainRepository,
    SqliteUserRepository,
};
use crate::domain::booking::{Booking, PaymentHistory, TicketRequest};
use crate::domain::foundation::{BookingId, ScheduleId, TrainId, UserId};
use crate::domain::train::{route, NewSchedule, NewTrain, Schedule, ScheduleFilter, Train};
use crate::domain::user::{NewUser, User};
use crate::ports::{BookingRepository, ScheduleRepository, TrainRepository, UserRepository};

use super::handlers::{
    AuthenticateCommand, AuthenticateHandler, BookTicketCommand, BookTicketHandler,
    CreateScheduleCommand, CreateTrainCommand, DeleteTrainCommand, ManageSchedulesHandler,
    ManageTrainsHandler, ProcessPaymentCommand, ProcessPaymentHandler, RegisterUserCommand,
    RegisterUserHandler, RemoveScheduleCommand, SearchTrainsHandler, SearchTrainsQuery,
    UpdateScheduleCommand, UpdateTrainCommand, UpdateUserCommand, UpdateUserHandler,
    UserBookingsHandler, UserBookingsQuery,
};
use super::{Entity, ServiceError};

/// Facade over the repositories and handlers.
pub struct RailwayService {
    users: Arc<dyn UserRepository>,
    trains: Arc<dyn TrainRepository>,
    schedules: Arc<dyn ScheduleRepository>,
    bookings: Arc<dyn BookingRepository>,
    write_gate: Mutex<()>,
    authenticate: AuthenticateHandler,
    register_user: RegisterUserHandler,
    update_user: UpdateUserHandler,
    search_trains: SearchTrainsHandler,
    manage_trains: ManageTrainsHandler,
    manage_schedules: ManageSchedulesHandler,
    book_ticket: BookTicketHandler,
    process_payment: ProcessPaymentHandler,
    user_bookings: UserBookingsHandler,
}

impl RailwayService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        trains: Arc<dyn TrainRepository>,
        schedules: Arc<dyn ScheduleRepository>,
        bookings: Arc<dyn BookingRepository>,
    ) -> Self {
        Self {
            authenticate: AuthenticateHandler::new(users.clone()),
            register_user: RegisterUserHandler::new(users.clone()),
            update_user: UpdateUserHandler::new(users.clone()),
            search_trains: SearchTrainsHandler::new(trains.clone()),
            manage_trains: ManageTrainsHandler::new(trains.clone()),
            manage_schedules: ManageSchedulesHandler::new(schedules.clone()),
            book_ticket: BookTicketHandler::new(bookings.clone()),
            process_payment: ProcessPaymentHandler::new(bookings.clone()),
            user_bookings: UserBookingsHandler::new(bookings.clone()),
            users,
            trains,
            schedules,
            bookings,
            write_gate: Mutex::new(()),
        }
    }

    /// Wires the SQLite repositories of an open database.
    pub fn from_database(db: &Database) -> Self {
        let pool = db.pool().clone();
        Self::new(
            Arc::new(SqliteUserRepository::new(pool.clone())),
            Arc::new(SqliteTrainRepository::new(pool.clone())),
            Arc::new(SqliteScheduleRepository::new(pool.clone())),
            Arc::new(SqliteBookingRepository::new(pool)),
        )
    }

    // ── Accounts ───────────────────────────────────────────────────────────

    /// Logs a user in. `role` is matched case-insensitively.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
        role: &str,
    ) -> Result<User, ServiceError> {
        self.authenticate
            .handle(AuthenticateCommand {
                email: email.to_string(),
                password: password.to_string(),
                role: role.to_string(),
            })
            .await
    }

    pub async fn register(&self, details: NewUser) -> Result<User, ServiceError> {
        let _gate = self.write_gate.lock().await;
        self.register_user
            .handle(RegisterUserCommand { details })
            .await
    }

    pub async fn update_user(&self, user: User) -> Result<User, ServiceError> {
        let _gate = self.write_gate.lock().await;
        self.update_user.handle(UpdateUserCommand { user }).await
    }

    pub async fn user_by_id(&self, id: &UserId) -> Result<User, ServiceError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(Entity::User, id))
    }

    /// True when someone other than `excluding` already uses this email.
    pub async fn email_exists(
        &self,
        email: &str,
        excluding: Option<&UserId>,
    ) -> Result<bool, ServiceError> {
        Ok(self.users.email_exists(email, excluding).await?)
    }

    // ── Trains ─────────────────────────────────────────────────────────────

    pub async fn trains(&self) -> Result<Vec<Train>, ServiceError> {
        Ok(self.trains.list_all().await?)
    }

    pub async fn train_by_number(&self, train_number: &str) -> Result<Option<Train>, ServiceError> {
        Ok(self.trains.find_by_number(train_number).await?)
    }

    /// Trains whose route mentions both stations, in either direction.
    pub async fn search_trains(&self, from: &str, to: &str) -> Result<Vec<Train>, ServiceError> {
        self.search_trains
            .handle(SearchTrainsQuery {
                from: from.to_string(),
                to: to.to_string(),
            })
            .await
    }

    /// Sorted origin and destination stations across the timetable.
    pub async fn list_stations(&self) -> Result<Vec<String>, ServiceError> {
        let schedules = self.schedules.list_all().await?;
        Ok(route::distinct_stations(schedules.iter().map(|s| s.route.as_str())))
    }

    pub async fn create_train(&self, train: NewTrain) -> Result<Train, ServiceError> {
        let _gate = self.write_gate.lock().await;
        self.manage_trains.create(CreateTrainCommand { train }).await
    }

    pub async fn update_train(&self, train: Train) -> Result<Train, ServiceError> {
        let _gate = self.write_gate.lock().await;
        self.manage_trains.update(UpdateTrainCommand { train }).await
    }

    /// Returns `false` when no train had this id.
    pub async fn delete_train(&self, train_id: &TrainId) -> Result<bool, ServiceError> {
        let _gate = self.write_gate.lock().await;
        self.manage_trains
            .delete(DeleteTrainCommand {
                train_id: train_id.clone(),
            })
            .await
    }

    // ── Schedules ──────────────────────────────────────────────────────────

    pub async fn schedules(&self) -> Result<Vec<Schedule>, ServiceError> {
        Ok(self.schedules.list_all().await?)
    }

    pub async fn schedule_for_train(
        &self,
        train_number: &str,
    ) -> Result<Option<Schedule>, ServiceError> {
        Ok(self.schedules.find_by_train_number(train_number).await?)
    }

    pub async fn filter_schedules(
        &self,
        filter: &ScheduleFilter,
    ) -> Result<Vec<Schedule>, ServiceError> {
        Ok(filter.apply(self.schedules.list_all().await?))
    }

    pub async fn create_schedule(&self, schedule: NewSchedule) -> Result<Schedule, ServiceError> {
        let _gate = self.write_gate.lock().await;
        self.manage_schedules
            .create(CreateScheduleCommand { schedule })
            .await
    }

    pub async fn update_schedule(&self, schedule: Schedule) -> Result<Schedule, ServiceError> {
        let _gate = self.write_gate.lock().await;
        self.manage_schedules
            .update(UpdateScheduleCommand { schedule })
            .await
    }

    /// Returns `false` when no schedule had this id.
    pub async fn remove_schedule(&self, schedule_id: &ScheduleId) -> Result<bool, ServiceError> {
        let _gate = self.write_gate.lock().await;
        self.manage_schedules
            .remove(RemoveScheduleCommand {
                schedule_id: schedule_id.clone(),
            })
            .await
    }

    // ── Bookings ───────────────────────────────────────────────────────────

    pub async fn book_ticket(&self, request: TicketRequest) -> Result<Booking, ServiceError> {
        let _gate = self.write_gate.lock().await;
        self.book_ticket.handle(BookTicketCommand { request }).await
    }

    pub async fn process_payment(
        &self,
        booking_id: &BookingId,
        method: &str,
    ) -> Result<Booking, ServiceError> {
        let _gate = self.write_gate.lock().await;
        self.process_payment
            .handle(ProcessPaymentCommand {
                booking_id: booking_id.clone(),
                method: method.to_string(),
            })
            .await
    }

    pub async fn bookings_for_user(&self, user_id: &UserId) -> Result<Vec<Booking>, ServiceError> {
        self.user_bookings
            .handle(UserBookingsQuery {
                user_id: user_id.clone(),
            })
            .await
    }

    pub async fn pending_payments_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Booking>, ServiceError> {
        self.user_bookings
            .pending_payments(UserBookingsQuery {
                user_id: user_id.clone(),
            })
            .await
    }

    /// Payment history with "this month" measured in UTC.
    pub async fn payment_history(&self, user_id: &UserId) -> Result<PaymentHistory, ServiceError> {
        self.user_bookings
            .payment_history(
                UserBookingsQuery {
                    user_id: user_id.clone(),
                },
                Utc::now().date_naive(),
            )
            .await
    }

    pub async fn all_bookings(&self) -> Result<Vec<Booking>, ServiceError> {
        Ok(self.bookings.list_all().await?)
    }

    pub async fn booking_by_id(&self, id: &BookingId) -> Result<Booking, ServiceError> {
        self.bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(Entity::Booking, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::user::UserRole;

    async fn service() -> RailwayService {
        let db = Database::open_in_memory().await.unwrap();
        RailwayService::from_database(&db)
    }

    #[tokio::test]
    async fn seeded_admin_can_log_in() {
        let svc = service().await;

        let admin = svc
            .authenticate("admin@railsafar.com", "admin123", "ADMIN")
            .await
            .unwrap();

        assert_eq!(admin.id.as_str(), "100");
        assert_eq!(admin.role, UserRole::Admin);
    }

    #[tokio::test]
    async fn lookups_by_id_distinguish_absence() {
        let svc = service().await;

        let err = svc.user_by_id(&UserId::from_sequence(5)).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::UserNotFound);

        let booking = svc.booking_by_id(&BookingId::from_sequence(400)).await.unwrap();
        assert!(booking.is_paid());
    }

    #[tokio::test]
    async fn stations_come_from_scheduled_routes_only() {
        let svc = service().await;

        let stations = svc.list_stations().await.unwrap();

        assert_eq!(
            stations,
            vec!["Islamabad", "Karachi", "Lahore", "Multan", "Peshawar", "Quetta", "Rawalpindi"]
        );
        assert!(!stations.contains(&"Port Qasim".to_string()));
        assert!(!stations.contains(&"Faisalabad".to_string()));
    }

    #[tokio::test]
    async fn concurrent_registrations_get_distinct_ids() {
        let svc = Arc::new(service().await);

        let tasks: Vec<_> = (0..8)
            .map(|n| {
                let svc = svc.clone();
                tokio::spawn(async move {
                    svc.register(NewUser::new(
                        format!("Passenger {}", n),
                        format!("p{}@example.com", n),
                        "0300-0000000",
                        UserRole::Passenger,
                        "pw",
                    ))
                    .await
                })
            })
            .collect();

        let mut ids = Vec::new();
        for task in tasks {
            ids.push(task.await.unwrap().unwrap().id);
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }
}
