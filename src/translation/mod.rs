mod client;
mod language;

pub use client::{DeeplClient, Translate, TranslationError};
pub use language::{DEFAULT_TARGET_LANG, TARGET_LANGUAGES, print_languages, validate_target};
