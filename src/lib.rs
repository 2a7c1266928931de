//! # artl - Article Translation CLI
//!
//! `artl` batch-translates Markdown articles with YAML front matter using
//! the DeepL API and re-emits them as dev.to-ready posts.
//!
//! ## Features
//!
//! - **Batch translation**: every pending article in a directory, one run
//! - **Idempotent runs**: already-translated articles are skipped by file name
//! - **dev.to output**: front matter remapped to the dev.to article schema
//! - **Publishing**: push translated articles straight to dev.to
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate everything under ./articles into ./translate
//! artl
//!
//! # Explicit directories and target language
//! artl ./posts --output ./out --to EN-GB
//!
//! # Publish the translated articles to dev.to
//! artl publish
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/artl/config.toml`; API keys come from
//! the environment (a local `.env` file is loaded at startup):
//!
//! ```toml
//! [artl]
//! input = "articles"
//! output = "translate"
//! to = "EN-US"
//!
//! [deepl]
//! api_key_env = "DEEPL_API_KEY"
//! ```

/// Front matter article model and the dev.to output schema.
pub mod article;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and resolution.
pub mod config;

/// File system utilities.
pub mod fs;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// The article translation pipeline.
pub mod pipeline;

/// dev.to publishing client.
pub mod publish;

/// DeepL translation client and target language validation.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
