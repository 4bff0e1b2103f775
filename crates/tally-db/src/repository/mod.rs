//! # Repository Module
//!
//! Repository implementations for database access.
//!
//! ## Pattern
//! Each repository owns a clone of the pool and encapsulates the SQL for
//! one aggregate:
//!
//! - [`product::ProductRepository`] - the product catalog (lookup, upsert,
//!   transactional price writes)
//! - [`pack::PackRepository`] - pack bill-of-materials lookups

pub mod pack;
pub mod product;
