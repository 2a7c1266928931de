use anyhow::Result;
use clap::Parser;

use artl_cli::cli::commands::{configure, publish, translate};
use artl_cli::cli::{Args, Command};
use artl_cli::output::{self, OutputConfig};
use artl_cli::translation::{print_languages, validate_target};
use artl_cli::ui::Style;

#[tokio::main]
async fn main() {
    // Provider keys may live in a .env next to the articles
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || std::env::var("NO_COLOR").is_ok(),
    });

    match run(args).await {
        Ok(()) => std::process::exit(exitcode::OK),
        Err(error) => {
            eprintln!("{} {error:#}", Style::error("Error:"));
            std::process::exit(exitcode::SOFTWARE);
        }
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Publish { dir }) => {
            publish::run_publish(dir).await?;
        }
        None => {
            if let Some(ref lang) = args.to {
                validate_target(lang)?;
            }

            let options = translate::TranslateOptions {
                input: args.input,
                output: args.output,
                to: args.to,
                endpoint: args.endpoint,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
