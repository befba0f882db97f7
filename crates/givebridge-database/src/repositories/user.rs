//! User repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use givebridge_core::error::{AppError, ErrorKind};
use givebridge_core::result::AppResult;
use givebridge_core::types::pagination::{PageRequest, PageResponse};
use givebridge_entity::user::model::CreateUser;
use givebridge_entity::user::{User, UserRole};

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Create a new user.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash, role, location, donor_type, ngo_registration_id, vehicle_type) \
             VALUES ($1, LOWER($2), $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.role)
        .bind(&data.location)
        .bind(data.donor_type)
        .bind(&data.ngo_registration_id)
        .bind(data.vehicle_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("A user with this email already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Update a user's own profile fields.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        name: Option<&str>,
        location: Option<&str>,
    ) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET name = COALESCE($2, name), \
                              location = COALESCE($3, location), \
                              updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(user_id)
        .bind(name)
        .bind(location)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update profile", e))?
        .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))
    }

    /// Set the admin-verification flag on a user.
    pub async fn set_verified(&self, user_id: Uuid, is_verified: bool) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET is_verified = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(user_id)
        .bind(is_verified)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set verified flag", e))?
        .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))
    }

    /// Record a completed identity verification.
    pub async fn set_identity_verified(
        &self,
        user_id: Uuid,
        masked: &str,
        hash: &str,
    ) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET aadhaar_masked = $2, aadhaar_hash = $3, \
                              is_aadhaar_verified = TRUE, aadhaar_verified_at = NOW(), \
                              updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(user_id)
        .bind(masked)
        .bind(hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to record identity verification", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))
    }

    /// List users with optional role/verification/search filters.
    pub async fn search(
        &self,
        role: Option<UserRole>,
        is_verified: Option<bool>,
        query: Option<&str>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<User>> {
        let mut conditions = Vec::new();
        let mut param_idx = 1u32;

        if role.is_some() {
            conditions.push(format!("role = ${param_idx}"));
            param_idx += 1;
        }
        if is_verified.is_some() {
            conditions.push(format!("is_verified = ${param_idx}"));
            param_idx += 1;
        }
        if query.is_some() {
            conditions.push(format!(
                "(name ILIKE ${param_idx} OR email ILIKE ${param_idx})"
            ));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM users {where_clause}");
        let select_sql = format!(
            "SELECT * FROM users {where_clause} ORDER BY created_at DESC LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let pattern = query.map(|q| format!("%{q}%"));

        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        let mut select_query = sqlx::query_as::<_, User>(&select_sql);

        if let Some(r) = role {
            count_query = count_query.bind(r);
            select_query = select_query.bind(r);
        }
        if let Some(v) = is_verified {
            count_query = count_query.bind(v);
            select_query = select_query.bind(v);
        }
        if let Some(p) = &pattern {
            count_query = count_query.bind(p.clone());
            select_query = select_query.bind(p.clone());
        }

        let total = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))?;

        let users = select_query
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))?;

        Ok(PageResponse::new(
            users,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Count users with a given role.
    pub async fn count_by_role(&self, role: UserRole) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = $1")
            .bind(role)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count users by role", e)
            })
    }

    /// Count total users.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))
    }
}
