//! Core types shared across the CoBaLD crates
//!
//! - **Correlation types**: `SessionId` for tying log events to one editing session
//! - **Schema constants**: canonical field keys and event names for structured logging

pub mod correlation;
pub mod schema;

pub use correlation::SessionId;
