//! Route handlers.

pub mod health;
