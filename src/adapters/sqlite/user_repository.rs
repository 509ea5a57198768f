//! SQLite implementation of UserRepository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::domain::foundation::{DomainError, Repository, UserId};
use crate::domain::user::{Password, User, UserRole};
use crate::ports::UserRepository;

use super::helpers::{next_sequence, parse_column, Table};

/// SQLite implementation of the UserRepository port.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Creates a new SqliteUserRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    phone: Option<String>,
    role: String,
    password: String,
    cnic: Option<String>,
    date_of_birth: Option<NaiveDate>,
    gender: Option<String>,
    address: Option<String>,
    city: Option<String>,
    postal_code: Option<String>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role: UserRole = parse_column("role", &row.role)?;
        Ok(User {
            id: parse_column("user id", &row.id)?,
            name: row.name,
            email: row.email,
            phone: row.phone.unwrap_or_default(),
            role,
            password: Password::new(row.password),
            cnic: row.cnic,
            date_of_birth: row.date_of_birth,
            gender: row.gender,
            address: row.address,
            city: row.city,
            postal_code: row.postal_code,
        })
    }
}

const SELECT_USER: &str = r#"
    SELECT id, name, email, phone, role, password, cnic, date_of_birth,
           gender, address, city, postal_code
    FROM users
"#;

#[async_trait]
impl Repository<User, UserId> for SqliteUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_USER))
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to find user by id", e))?;

        row.map(User::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        let rows: Vec<UserRow> = sqlx::query_as(SELECT_USER)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list users", e))?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn save(&self, user: &User) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (
                id, name, email, phone, role, password, cnic, date_of_birth,
                gender, address, city, postal_code
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.as_str())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(user.role.as_str())
        .bind(user.password.expose())
        .bind(&user.cnic)
        .bind(user.date_of_birth)
        .bind(&user.gender)
        .bind(&user.address)
        .bind(&user.city)
        .bind(&user.postal_code)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to save user", e))?;

        Ok(())
    }

    async fn update(&self, user: &User) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                name = ?, email = ?, phone = ?, role = ?, password = ?, cnic = ?,
                date_of_birth = ?, gender = ?, address = ?, city = ?, postal_code = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(user.role.as_str())
        .bind(user.password.expose())
        .bind(&user.cnic)
        .bind(user.date_of_birth)
        .bind(&user.gender)
        .bind(&user.address)
        .bind(&user.city)
        .bind(&user.postal_code)
        .bind(user.id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update user", e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn next_id(&self) -> Result<UserId, DomainError> {
        Ok(UserId::from_sequence(next_sequence(&self.pool, Table::Users).await?))
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("{} WHERE LOWER(email) = LOWER(?)", SELECT_USER))
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to find user by email", e))?;

        row.map(User::try_from).transpose()
    }

    async fn email_exists(
        &self,
        email: &str,
        excluding: Option<&UserId>,
    ) -> Result<bool, DomainError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE LOWER(email) = LOWER(?) AND id != ?")
                .bind(email)
                .bind(excluding.map(UserId::as_str).unwrap_or(""))
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to check email", e))?;

        Ok(count > 0)
    }
}
