//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! service layer never sees database types.

pub mod user;

#[cfg(test)]
mod test;
