//! Article pipeline: discovery, skip check, translation, remapping, and
//! persistence.
//!
//! Each file moves through the whole pipeline before the next one starts.
//! Errors are caught at the per-file boundary and recorded in the
//! [`RunSummary`]; a single bad article never aborts the run. Only a
//! failure to list the input directory does.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::article::{
    Article, DevtoFrontMatter, FrontMatter, ParseError, TranslatedFrontMatter, to_document,
};
use crate::fs::atomic_write;
use crate::translation::{Translate, TranslationError};
use crate::ui::{Spinner, Style};
use crate::{status, warn};

/// Errors that can fail a single article.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid article: {0}")]
    Parse(#[from] ParseError),

    #[error("missing required front matter field '{0}'")]
    MissingField(&'static str),

    #[error(transparent)]
    Translation(#[from] TranslationError),

    #[error("failed to encode front matter: {0}")]
    Encode(#[from] serde_yaml::Error),

    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// One failed article and why it failed.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: PipelineError,
}

/// Outcome of one pipeline run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Destination paths written this run.
    pub translated: Vec<PathBuf>,
    /// Source paths skipped because their destination already exists.
    pub skipped: Vec<PathBuf>,
    /// Source paths that failed, with their errors.
    pub failures: Vec<FileFailure>,
}

impl RunSummary {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Translates every pending article from an input directory into an output
/// directory.
///
/// The translator is injected by reference; the pipeline holds no state of
/// its own between files. Idempotence is presence-based: a destination file
/// with the same name marks its source as done, regardless of content.
pub struct ArticlePipeline<'a> {
    translator: &'a dyn Translate,
    input_dir: PathBuf,
    output_dir: PathBuf,
}

impl<'a> ArticlePipeline<'a> {
    pub fn new(
        translator: &'a dyn Translate,
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            translator,
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Runs the pipeline over every Markdown file in the input directory.
    ///
    /// # Errors
    ///
    /// Returns an error only if the input directory cannot be listed.
    /// Per-file errors are logged and recorded in the summary instead.
    pub async fn run(&self) -> Result<RunSummary> {
        let sources = discover_articles(&self.input_dir)?;
        let mut summary = RunSummary::default();

        for source in sources {
            let Some(file_name) = source.file_name() else {
                continue;
            };
            let destination = self.output_dir.join(file_name);

            if destination.exists() {
                status!("Translation already exists: {}", destination.display());
                summary.skipped.push(source);
                continue;
            }

            status!("Processing {}...", source.display());
            match self.process_file(&source, &destination).await {
                Ok(()) => {
                    status!("Saved translated article to: {}", destination.display());
                    summary.translated.push(destination);
                }
                Err(error) => {
                    warn!(
                        "{} processing {}: {error}",
                        Style::error("Error"),
                        source.display()
                    );
                    summary.failures.push(FileFailure {
                        path: source,
                        error,
                    });
                }
            }
        }

        Ok(summary)
    }

    /// Loads, translates, remaps, and persists one article.
    async fn process_file(&self, source: &Path, destination: &Path) -> Result<(), PipelineError> {
        let raw = fs::read_to_string(source)?;
        let article = Article::parse(&raw)?;

        let metadata = self.translate_front_matter(&article.front_matter).await?;

        let spinner = Spinner::new(format!("Translating {}...", source.display()));
        let body = self.translator.translate(&article.body).await;
        spinner.stop();
        let body = body?;

        let devto = DevtoFrontMatter::from_translated(metadata, body);
        save_article(destination, &devto)
    }

    /// Translates the text fields of the front matter.
    ///
    /// `title` is required; `description` is translated only when present;
    /// `tags` and `published` are copied through untranslated.
    async fn translate_front_matter(
        &self,
        front_matter: &FrontMatter,
    ) -> Result<TranslatedFrontMatter, PipelineError> {
        let title = front_matter
            .title
            .as_deref()
            .ok_or(PipelineError::MissingField("title"))?;
        let title = self.translator.translate(title).await?;

        let description = match front_matter.description.as_deref() {
            Some(description) => Some(self.translator.translate(description).await?),
            None => None,
        };

        Ok(TranslatedFrontMatter {
            title,
            description,
            tags: front_matter.tags.clone(),
            published: front_matter.published.clone(),
        })
    }
}

/// Serializes one translated article and writes it to `destination`.
///
/// Missing intermediate directories are created.
pub fn save_article(destination: &Path, front_matter: &DevtoFrontMatter) -> Result<(), PipelineError> {
    let document = to_document(front_matter, &front_matter.body_markdown)?;
    atomic_write(destination, &document)?;
    Ok(())
}

/// Lists Markdown files directly under `dir`, sorted by file name.
pub fn discover_articles(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read input directory: {}", dir.display()))?;

    let mut articles = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read directory entry in {}", dir.display()))?;
        let path = entry.path();
        if path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
        {
            articles.push(path);
        }
    }

    articles.sort();
    Ok(articles)
}
