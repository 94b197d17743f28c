//! PostgreSQL integration for the dossier dialogue pipeline.
//!
//! This crate provides the `ai_invocations` audit table models and the
//! [`PostgresInvocationStore`] implementation of
//! [`dossier_interface::InvocationStore`].
//!
//! # Example
//!
//! ```rust,ignore
//! use dossier_database::{establish_connection, PostgresInvocationStore};
//!
//! let conn = establish_connection(&config.database_url)?;
//! let store = PostgresInvocationStore::new(conn);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod connection;
mod models;
mod store;

// Public module for external access
pub mod schema;

pub use connection::establish_connection;
pub use models::{AiInvocationRow, NewAiInvocationRow};
pub use store::PostgresInvocationStore;

use dossier_error::DatabaseError;

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;
