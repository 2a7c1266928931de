use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::pipeline::{ArticlePipeline, RunSummary};
use crate::translation::DeeplClient;
use crate::ui::Style;
use crate::{status, warn};

pub struct TranslateOptions {
    pub input: Option<String>,
    pub output: Option<String>,
    pub to: Option<String>,
    pub endpoint: Option<String>,
}

/// Runs the batch translation pipeline.
///
/// Per-file failures are reported in the summary, not as an error: the
/// command succeeds as long as the run itself completed.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default();

    let resolved = resolve_config(
        &ResolveOptions {
            input: options.input,
            output: options.output,
            to: options.to,
            endpoint: options.endpoint,
        },
        &config_file,
    )?;

    let client = DeeplClient::new(
        resolved.endpoint,
        resolved.api_key,
        resolved.target_lang,
    );

    let pipeline = ArticlePipeline::new(&client, resolved.input_dir, resolved.output_dir);
    let summary = pipeline.run().await?;

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    status!();
    status!(
        "{} {} translated, {} skipped, {} failed",
        Style::header("Run complete:"),
        summary.translated.len(),
        summary.skipped.len(),
        summary.failures.len()
    );

    for failure in &summary.failures {
        warn!(
            "  {} {}: {}",
            Style::error("✗"),
            failure.path.display(),
            failure.error
        );
    }
}
