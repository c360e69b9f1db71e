pub mod document;
pub mod identifier;
pub mod sentence;
pub mod token;

pub use document::{Cursor, Document, DEFAULT_TRANSLATION_LANGUAGE};
pub use identifier::{Identifier, ParseIdentifierError};
pub use sentence::Sentence;
pub use token::{Deps, EnhancedDep, Features, Field, Governor, Head, Token, UNSET};
