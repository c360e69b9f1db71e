//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names identical across every crate that logs.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_SESSION_ID: &str = "session_id";

// Entity identifiers
pub const FIELD_SENT_ID: &str = "sent_id";
pub const FIELD_TOKEN_ID: &str = "token_id";
pub const FIELD_FIELD: &str = "field";
pub const FIELD_PATH: &str = "path";

// Collection sizes
pub const FIELD_SENTENCE_COUNT: &str = "sentence_count";
pub const FIELD_TOKEN_COUNT: &str = "token_count";
pub const FIELD_BYTES: &str = "bytes";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
