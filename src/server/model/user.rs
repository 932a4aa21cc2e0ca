//! User domain models and parameters.

use crate::model::user::{CreateUserDto, UserDto};

/// A stored user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Generated identifier, immutable once assigned.
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
        }
    }
}

/// Parameters for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
}

impl CreateUserParam {
    /// Converts the request DTO into creation parameters.
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
        }
    }
}
