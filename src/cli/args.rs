use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "artl")]
#[command(about = "Translate front-matter Markdown articles and emit dev.to-ready posts")]
#[command(version)]
pub struct Args {
    /// Directory containing source articles (default: articles)
    pub input: Option<String>,

    /// Directory translated articles are written to (default: translate)
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Target language code (DeepL, e.g., EN-US, EN-GB, DE)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// DeepL API endpoint URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Suppress non-essential output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure artl settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List supported target language codes
    Languages,
    /// Publish translated articles to dev.to
    Publish {
        /// Directory of translated articles (default: translate)
        dir: Option<String>,
    },
}
