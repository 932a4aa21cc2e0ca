//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the
//! fields they care about.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//!
//! let ann = factory::user::UserFactory::new(&db)
//!     .name("Ann")
//!     .email("a@x.com")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod user;

pub use user::create_user;
