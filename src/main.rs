use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use gtl_cli::cli::commands::{chat, configure, translate};
use gtl_cli::cli::{Args, Command};
use gtl_cli::output::{self, OutputConfig};

/// Environment variable holding the log filter (e.g. `GTL_LOG=debug`).
const LOG_ENV: &str = "GTL_LOG";

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));
    init_logging();

    match args.command {
        Some(Command::Configure {
            show: true,
            ..
        }) => {
            configure::run_show()?;
        }
        Some(Command::Configure {
            api_key,
            proxy,
            model,
            ..
        }) => {
            let options = configure::ConfigureOptions {
                api_key,
                proxy,
                model,
            };
            configure::run_configure(options)?;
        }
        Some(Command::Chat { model, proxy }) => {
            let options = chat::ChatOptions { model, proxy };
            chat::run_chat(options).await?;
        }
        None => {
            let options = translate::TranslateOptions {
                text: args.text,
                file: args.file,
                model: args.model,
                proxy: args.proxy,
                json: args.json,
                output: args.output,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
