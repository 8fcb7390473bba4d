//! HTTP route handlers.

pub mod generate;
pub mod health;
pub mod latest;
