pub mod invariants;
pub mod validation;

pub use invariants::{audit_document, audit_sentence, Finding, FindingKind};
pub use validation::{FieldVerdict, ValidationScope, Validator};
