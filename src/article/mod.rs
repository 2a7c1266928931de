//! Front matter article model: parsing, serialization, and the dev.to
//! output schema.

mod devto;
mod document;

pub use devto::{DevtoFrontMatter, TranslatedFrontMatter};
pub use document::{Article, FrontMatter, ParseError, parse_document, to_document};
