//! Typed error type for the db crate.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DbError {
    /// The operation is not available on this client.
    #[error("operational error: {0}")]
    Operational(String),

    /// The readiness probe gave up.
    #[error("database not ready after {attempts} attempt(s): {last}")]
    NotReady {
        attempts: u32,
        #[source]
        last: Box<DbError>,
    },
}
