//! `db` crate — a stand-in for a database client.
//!
//! Hands out connection-like objects that never touch the network, so CI
//! steps that only need to "connect to the database" can run without a live
//! server. Any attempt to actually run a query fails with
//! [`DbError::Operational`].

pub mod error;
pub mod readiness;
pub mod stub;
pub mod traits;

pub use error::DbError;
pub use readiness::{wait_for_ready, ReadinessConfig};
pub use stub::{connect, StubConnection, StubCursor};
pub use traits::{Connection, Cursor, Row};
