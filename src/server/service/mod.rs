//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They validate input and
//! work with domain models rather than DTOs or entity models.

pub mod user;
