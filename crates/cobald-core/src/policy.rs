//! Confirmation hooks for soft vocabulary checks
//!
//! Relation labels and feature keys outside the closed vocabularies are not
//! rejected outright: the committing caller is asked whether to keep them.
//! The hook is injected into the validator so that prompting stays outside
//! the core.

use crate::model::Field;

/// Decide whether an unknown relation label or feature key is accepted
pub trait ConfirmHook {
    /// # Arguments
    /// * `field` - Column holding the value (`Deprel` or `Feats`)
    /// * `value` - The unknown label or feature key
    ///
    /// # Returns
    /// * `true` - keep the value
    /// * `false` - fail the commit with reason `Unconfirmed`
    fn confirm(&self, field: Field, value: &str) -> bool;
}

/// Hook that keeps every unknown value
///
/// # Example
/// ```
/// use cobald_core::model::Field;
/// use cobald_core::policy::{AcceptUnknown, ConfirmHook};
///
/// assert!(AcceptUnknown.confirm(Field::Deprel, "nmod:poss"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptUnknown;

impl ConfirmHook for AcceptUnknown {
    fn confirm(&self, _field: Field, _value: &str) -> bool {
        true
    }
}

/// Hook that declines every unknown value (non-interactive strict mode)
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectUnknown;

impl ConfirmHook for RejectUnknown {
    fn confirm(&self, _field: Field, _value: &str) -> bool {
        false
    }
}

impl<F> ConfirmHook for F
where
    F: Fn(Field, &str) -> bool,
{
    fn confirm(&self, field: Field, value: &str) -> bool {
        self(field, value)
    }
}
