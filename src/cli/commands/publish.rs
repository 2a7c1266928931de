use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::article::{DevtoFrontMatter, parse_document};
use crate::config::{ConfigManager, DEFAULT_OUTPUT_DIR, resolve_devto};
use crate::pipeline::discover_articles;
use crate::publish::{CreatedArticle, DevtoClient};
use crate::ui::{Spinner, Style};
use crate::{status, warn};

/// Publishes previously translated articles to dev.to.
///
/// Mirrors the pipeline's per-file isolation: one bad article is logged
/// and skipped, the rest still go out.
pub async fn run_publish(dir: Option<String>) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default();
    let devto = resolve_devto(&config_file)?;

    let dir = PathBuf::from(
        dir.or_else(|| config_file.artl.output.clone())
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()),
    );

    let articles = discover_articles(&dir)?;
    if articles.is_empty() {
        status!("No translated articles found in {}", dir.display());
        return Ok(());
    }

    let client = DevtoClient::new(devto.base_url, devto.api_key);

    let mut published = 0usize;
    let mut failed = 0usize;
    for path in articles {
        status!("Publishing {}...", path.display());
        match publish_file(&client, &path).await {
            Ok(created) => {
                status!("{} {}", Style::success("Published:"), created.url);
                published += 1;
            }
            Err(error) => {
                warn!(
                    "{} publishing {}: {error:#}",
                    Style::error("Error"),
                    path.display()
                );
                failed += 1;
            }
        }
    }

    status!();
    status!(
        "{} {published} published, {failed} failed",
        Style::header("Publish complete:")
    );
    Ok(())
}

async fn publish_file(client: &DevtoClient, path: &Path) -> Result<CreatedArticle> {
    let raw = fs::read_to_string(path)?;
    let (front_matter, _body): (DevtoFrontMatter, String) = parse_document(&raw)?;

    let spinner = Spinner::new(format!("Uploading {}...", path.display()));
    let result = client.create_article(&front_matter).await;
    spinner.stop();

    Ok(result?)
}
