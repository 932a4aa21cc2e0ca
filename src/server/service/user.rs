//! User service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, User},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user after checking that both fields are present.
    ///
    /// Whitespace-only values count as missing. Accepted values are stored exactly as
    /// sent; no format or uniqueness checks are made.
    ///
    /// # Arguments
    /// - `param` - Name and email of the new user
    ///
    /// # Returns
    /// - `Ok(User)` - The stored user with its generated id
    /// - `Err(AppError::BadRequest)` - Name or email is blank
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest("User name is required".to_string()));
        }
        if param.email.trim().is_empty() {
            return Err(AppError::BadRequest("User email is required".to_string()));
        }

        let user_repo = UserRepository::new(self.db);
        let user = user_repo.create(param).await?;

        tracing::debug!("Created user {}", user.id);

        Ok(user)
    }

    /// Retrieves all users in insertion order.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All stored users, oldest first
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let users = user_repo.get_all().await?;
        Ok(users)
    }
}
