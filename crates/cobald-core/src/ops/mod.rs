pub mod field_ops;
pub mod renumber;

pub use field_ops::set_field;
pub use renumber::{
    delete_token, insert_token, Anchor, DanglingReference, DeleteOutcome, InsertKind,
    InsertOutcome,
};
