//! `StubConnection` / `StubCursor` — a test double for a database client.
//!
//! Connecting always succeeds and never opens a socket. The cursor returns
//! empty results, and `execute` always fails with [`DbError::Operational`].

use serde_json::Value;
use tracing::debug;

use crate::{Connection, Cursor, DbError, Row};

/// Message carried by every [`DbError::Operational`] the stub raises.
pub const EXECUTE_NOT_SUPPORTED: &str = "db stub: execute not supported";

/// Return a no-op connection. `dsn` is only logged.
pub fn connect(dsn: &str) -> StubConnection {
    debug!(dsn, "stub connect (no network activity)");
    StubConnection
}

/// Connection-like object with no state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StubConnection;

/// Cursor handed out by [`StubConnection::cursor`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StubCursor;

impl Connection for StubConnection {
    type Cursor = StubCursor;

    fn cursor(&self) -> StubCursor {
        StubCursor
    }

    fn close(&self) -> Result<(), DbError> {
        Ok(())
    }

    fn commit(&self) -> Result<(), DbError> {
        Ok(())
    }
}

impl Cursor for StubCursor {
    fn execute(&mut self, query: &str, params: &[Value]) -> Result<(), DbError> {
        debug!(query, params = params.len(), "stub execute rejected");
        Err(DbError::Operational(EXECUTE_NOT_SUPPORTED.to_string()))
    }

    fn fetchone(&mut self) -> Result<Option<Row>, DbError> {
        Ok(None)
    }

    fn fetchall(&mut self) -> Result<Vec<Row>, DbError> {
        Ok(Vec::new())
    }

    fn close(&mut self) -> Result<(), DbError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn unsupported() -> DbError {
        DbError::Operational(EXECUTE_NOT_SUPPORTED.to_string())
    }

    #[test]
    fn connect_accepts_any_dsn() {
        for dsn in ["", "postgres://user:pw@localhost:5432/app", "not a dsn at all"] {
            assert_eq!(connect(dsn), StubConnection);
        }
    }

    #[test]
    fn execute_always_fails_regardless_of_arguments() {
        let mut cur = connect("postgres://localhost/ci").cursor();

        assert_eq!(cur.execute("SELECT 1", &[]), Err(unsupported()));
        assert_eq!(
            cur.execute("INSERT INTO t VALUES ($1, $2)", &[json!(1), json!({"a": [1, 2]})]),
            Err(unsupported())
        );
        assert_eq!(cur.execute("", &[Value::Null]), Err(unsupported()));
    }

    #[test]
    fn execute_error_message_names_the_operation() {
        let err = StubCursor.execute("SELECT 1", &[]).unwrap_err();
        assert_eq!(err.to_string(), "operational error: db stub: execute not supported");
    }

    #[test]
    fn fetches_return_empty_results() {
        let mut cur = StubCursor;
        assert_eq!(cur.fetchone(), Ok(None));
        assert_eq!(cur.fetchall(), Ok(Vec::<Row>::new()));

        // A failed execute doesn't change what the fetches return.
        let _ = cur.execute("SELECT 1", &[]);
        assert_eq!(cur.fetchone(), Ok(None));
        assert!(cur.fetchall().unwrap().is_empty());
    }

    #[test]
    fn close_and_commit_are_no_ops() {
        let conn = connect("postgres://localhost/ci");
        let mut cur = conn.cursor();

        assert_eq!(cur.close(), Ok(()));
        assert_eq!(conn.commit(), Ok(()));
        assert_eq!(conn.close(), Ok(()));
        // Repeated calls are fine too.
        assert_eq!(conn.close(), Ok(()));
        assert_eq!(cur.close(), Ok(()));
    }

    #[test]
    fn usable_through_the_trait_seam() {
        fn first_row<C: Connection>(conn: &C) -> Result<Option<Row>, DbError> {
            let mut cur = conn.cursor();
            cur.execute("SELECT 1", &[])?;
            cur.fetchone()
        }

        assert_eq!(first_row(&connect("postgres://localhost/ci")), Err(unsupported()));
    }
}
