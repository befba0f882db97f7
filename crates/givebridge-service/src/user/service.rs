//! Account operations — registration, login, and profile management.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use givebridge_auth::jwt::encoder::{IssuedToken, JwtEncoder};
use givebridge_auth::password::{PasswordHasher, PasswordValidator};
use givebridge_core::error::AppError;
use givebridge_database::repositories::user::UserRepository;
use givebridge_entity::user::model::CreateUser;
use givebridge_entity::user::{DonorType, User, UserRole, VehicleType};

use crate::context::RequestContext;

/// Data for registering a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Platform role.
    pub role: UserRole,
    /// Location string.
    pub location: String,
    /// Donor-specific attribute.
    pub donor_type: Option<DonorType>,
    /// NGO-specific attribute.
    pub ngo_registration_id: Option<String>,
    /// Logistics-specific attribute.
    pub vehicle_type: Option<VehicleType>,
}

/// A successful registration or login: the account plus its bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The account.
    pub user: User,
    /// The issued bearer token.
    pub token: IssuedToken,
}

/// Handles account registration, login, and profile operations.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    validator: Arc<PasswordValidator>,
    /// Token encoder.
    jwt_encoder: Arc<JwtEncoder>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        jwt_encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            jwt_encoder,
        }
    }

    /// Registers a new account and issues its first token.
    ///
    /// Role-specific attributes not matching the chosen role are dropped
    /// rather than rejected.
    pub async fn register(&self, reg: Registration) -> Result<AuthenticatedUser, AppError> {
        self.validator.validate(&reg.password)?;

        if self.user_repo.find_by_email(&reg.email).await?.is_some() {
            return Err(AppError::conflict("A user with this email already exists"));
        }

        let password_hash = self.hasher.hash_password(&reg.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                name: reg.name,
                email: reg.email,
                password_hash,
                role: reg.role,
                location: reg.location,
                donor_type: (reg.role == UserRole::Donor)
                    .then_some(reg.donor_type)
                    .flatten(),
                ngo_registration_id: (reg.role == UserRole::Ngo)
                    .then_some(reg.ngo_registration_id)
                    .flatten(),
                vehicle_type: (reg.role == UserRole::Logistics)
                    .then_some(reg.vehicle_type)
                    .flatten(),
            })
            .await?;

        let token = self
            .jwt_encoder
            .generate_token(user.id, &user.email, user.role)?;

        info!(user_id = %user.id, role = %user.role, "User registered");

        Ok(AuthenticatedUser { user, token })
    }

    /// Verifies credentials and issues a token.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let token = self
            .jwt_encoder
            .generate_token(user.id, &user.email, user.role)?;

        info!(user_id = %user.id, "User logged in");

        Ok(AuthenticatedUser { user, token })
    }

    /// Gets the current user's full profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Updates the current user's profile fields.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        name: Option<String>,
        location: Option<String>,
    ) -> Result<User, AppError> {
        if let Some(name) = &name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Name cannot be empty"));
            }
        }

        let user = self
            .user_repo
            .update_profile(ctx.user_id, name.as_deref(), location.as_deref())
            .await?;

        info!(user_id = %ctx.user_id, "Profile updated");
        Ok(user)
    }
}
