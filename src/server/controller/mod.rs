//! HTTP request handlers.
//!
//! Controllers convert DTOs to parameters, call the service layer and convert the
//! resulting domain models back to DTOs.

pub mod user;
