//! Text format: 12-column CoNLL-U with SEMSLOT and SEMCLASS

pub mod parser;
pub mod serializer;

pub use parser::{parse, COLUMN_COUNT};
pub use serializer::{serialize, COLUMNS_HEADER};
