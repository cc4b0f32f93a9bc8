//! The `Connection` and `Cursor` traits — the subset of a database client
//! that callers in this workspace rely on.

use serde_json::Value;

use crate::DbError;

/// A single result row.
pub type Row = Vec<Value>;

/// A cursor obtained from a [`Connection`].
pub trait Cursor {
    /// Run `query` with positional `params`.
    fn execute(&mut self, query: &str, params: &[Value]) -> Result<(), DbError>;

    /// Next row of the last result set, or `None` when exhausted.
    fn fetchone(&mut self) -> Result<Option<Row>, DbError>;

    /// All remaining rows of the last result set.
    fn fetchall(&mut self) -> Result<Vec<Row>, DbError>;

    fn close(&mut self) -> Result<(), DbError>;
}

/// A connection handle.
pub trait Connection {
    type Cursor: Cursor;

    fn cursor(&self) -> Self::Cursor;

    fn close(&self) -> Result<(), DbError>;

    fn commit(&self) -> Result<(), DbError>;
}
