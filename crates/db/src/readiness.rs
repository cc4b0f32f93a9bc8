//! Readiness probe — the "wait for the database" step CI runs before tests.

use std::time::Duration;

use tracing::{info, warn};

use crate::{Connection, DbError};

/// Default for [`ReadinessConfig::max_attempts`].
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Default for [`ReadinessConfig::retry_delay`], in milliseconds.
pub const DEFAULT_RETRY_DELAY_MS: u64 = 500;

/// Tuning knobs for [`wait_for_ready`].
#[derive(Debug, Clone)]
pub struct ReadinessConfig {
    /// Total number of connection attempts. `0` is treated as `1`.
    pub max_attempts: u32,
    /// Fixed pause between failed attempts.
    pub retry_delay: Duration,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        }
    }
}

/// Call `connect` until it yields a connection, then close that connection.
///
/// Returns the 1-based attempt number that succeeded, or
/// [`DbError::NotReady`] carrying the last error once every attempt failed.
pub async fn wait_for_ready<F, C>(mut connect: F, config: &ReadinessConfig) -> Result<u32, DbError>
where
    F: FnMut() -> Result<C, DbError>,
    C: Connection,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 0u32;

    loop {
        attempt += 1;
        match connect() {
            Ok(conn) => {
                conn.close()?;
                info!("database ready after {} attempt(s)", attempt);
                return Ok(attempt);
            }
            Err(e) if attempt >= max_attempts => {
                return Err(DbError::NotReady {
                    attempts: attempt,
                    last: Box::new(e),
                });
            }
            Err(e) => {
                warn!(
                    "database not ready (attempt {}/{}), retrying in {:?}: {}",
                    attempt, max_attempts, config.retry_delay, e
                );
                tokio::time::sleep(config.retry_delay).await;
            }
        }
    }
}
