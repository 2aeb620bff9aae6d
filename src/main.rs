#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use domprobe::dom::WebDriverDom;
use domprobe::{server, tools};

#[derive(Parser)]
#[command(name = "domprobe")]
#[command(about = "DOM inspection tool server for LLMs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve tool calls over stdio against a running WebDriver
    Serve {
        /// WebDriver endpoint to attach to
        #[arg(long, default_value = "http://localhost:4444")]
        webdriver_url: String,
    },

    /// Print the tool registry (names, descriptions, input schemas) as JSON
    Tools,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays a clean protocol stream
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "domprobe=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { webdriver_url } => {
            let dom = WebDriverDom::connect(&webdriver_url).await?;
            server::serve(Arc::new(dom)).await
        }
        Commands::Tools => {
            let specs: Vec<serde_json::Value> = tools::registry()
                .iter()
                .map(|spec| {
                    serde_json::json!({
                        "name": spec.name,
                        "description": spec.description,
                        "inputSchema": (spec.input_schema)(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&specs)?);
            Ok(())
        }
    }
}
