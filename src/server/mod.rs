//! Server-side API backend.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Readiness** (`readiness/`) - Startup gate that waits for the database and migrates it
//! - **Startup** (`startup`) - Tracing, database, CORS and shutdown wiring
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **State** (`state`) - Shared application state
//!
//! # Startup Flow
//!
//! 1. Configuration is read from the environment
//! 2. The readiness gate retries the database connection until it succeeds or gives up
//! 3. Pending migrations are applied in order
//! 4. Only then is the listener bound and the router served

pub mod config;
pub mod controller;
pub mod data;
pub mod doc;
pub mod error;
pub mod model;
pub mod readiness;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
