//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// dev.to publish command handler.
pub mod publish;

/// Translation command handler.
pub mod translate;
