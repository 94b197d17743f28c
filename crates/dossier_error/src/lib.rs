//! Error types for the dossier dialogue pipeline.
//!
//! This crate provides the foundation error types used throughout the
//! dossier workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean
//! error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use dossier_error::{DossierResult, HttpError};
//!
//! fn fetch_data() -> DossierResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
#[cfg(feature = "database")]
mod database;
mod dialogue;
mod error;
mod http;
mod json;
mod models;

pub use config::ConfigError;
#[cfg(feature = "database")]
pub use database::{DatabaseError, DatabaseErrorKind};
pub use dialogue::{DialogueError, DialogueErrorKind};
pub use error::{DossierError, DossierErrorKind, DossierResult};
pub use http::HttpError;
pub use json::JsonError;
pub use models::{GroqErrorKind, ModelsError, ModelsErrorKind, ModelsResult};
