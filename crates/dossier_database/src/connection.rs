//! Database connection utilities.

use crate::DatabaseResult;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// Establish a connection to the PostgreSQL database.
///
/// The connection URL comes from the process configuration rather than an
/// ad hoc environment lookup; the caller owns the connection lifecycle,
/// including any transaction boundaries.
///
/// # Errors
///
/// Returns an error if the connection to the database fails.
pub fn establish_connection(database_url: &str) -> DatabaseResult<PgConnection> {
    Ok(PgConnection::establish(database_url)?)
}
