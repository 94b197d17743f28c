//! PostgreSQL implementation of InvocationStore.

use crate::NewAiInvocationRow;
use crate::schema::ai_invocations;

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use dossier_error::{DatabaseError, DossierResult};
use dossier_interface::{InvocationRecord, InvocationStore};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

/// PostgreSQL implementation of InvocationStore using Diesel ORM.
///
/// Each call inserts exactly one row into `ai_invocations`. The store never
/// commits or rolls back on its own; the transaction boundary belongs to
/// the owner of the connection.
///
/// # Example
/// ```no_run
/// use dossier_database::{establish_connection, PostgresInvocationStore};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let conn = establish_connection("postgres://localhost/dossier")?;
/// let store = PostgresInvocationStore::new(conn);
/// # Ok(())
/// # }
/// ```
pub struct PostgresInvocationStore {
    /// Database connection wrapped in Arc<Mutex> for async safety.
    ///
    /// Note: This is a simple implementation. For production use, consider
    /// using a connection pool like r2d2 or deadpool.
    conn: Arc<Mutex<PgConnection>>,
}

impl PostgresInvocationStore {
    /// Create a new PostgreSQL invocation store.
    pub fn new(conn: PgConnection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Create a store from an Arc<Mutex<PgConnection>> (for sharing connections).
    pub fn from_arc(conn: Arc<Mutex<PgConnection>>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl InvocationStore for PostgresInvocationStore {
    #[instrument(skip(self, record), fields(turn_id = record.conversation_turn_id, prompt_role = %record.prompt_role))]
    async fn record(&self, record: &InvocationRecord) -> DossierResult<()> {
        let row = NewAiInvocationRow::from(record);

        let mut conn = self.conn.lock().await;
        diesel::insert_into(ai_invocations::table)
            .values(&row)
            .execute(&mut *conn)
            .map_err(DatabaseError::from)?;

        debug!("Recorded invocation audit row");
        Ok(())
    }
}
