//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for inserting and listing user records,
//! converting between entity models and domain models at the infrastructure boundary.

use crate::server::model::user::{CreateUserParam, User};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

/// Repository providing database operations for users.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// The id is generated by the database and returned with the stored record.
    ///
    /// # Arguments
    /// - `param` - Name and email of the new user
    ///
    /// # Returns
    /// - `Ok(User)` - The stored user including its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Lists every user in insertion order.
    ///
    /// Ids are generated monotonically, so ordering by id ascending yields the order
    /// the records were created in.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users, oldest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }
}
