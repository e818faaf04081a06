//! Outbound adapters implementing the repository ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel.
//! - **memory**: mutex-guarded in-process store for database-less runs and
//!   tests.

pub mod memory;
pub mod persistence;
