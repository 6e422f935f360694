//! Block Kit CLI - build and post an example Slack message.
//!
//! # Usage
//!
//! ```bash
//! # Post using the token (and channel) in config.yaml
//! blockkit post
//!
//! # Post to a specific channel with custom content
//! blockkit post -f slack.yaml -c C0123456789 -H "Deploy finished" -s "*api* is live" -u octocat
//!
//! # Print the message JSON without posting
//! blockkit render -H "Deploy finished"
//! ```
//!
//! # Commands
//!
//! - `post` - Build the example message and post it to a channel
//! - `render` - Build the example message and print its JSON
//!
//! When the config file does not exist, credentials are read from the
//! environment (`SLACK_BOT_TOKEN`, `SLACK_CHANNEL_ID`, `SLACK_API_BASE_URL`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use blockkit_core::{BuildError, Message};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

#[derive(Parser)]
#[command(name = "blockkit")]
#[command(author, version, about = "Slack Block Kit message tools")]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the example message and post it to a channel
    Post {
        /// Path to config file holding at least the authentication token
        #[arg(short = 'f', long = "config", default_value = "config.yaml")]
        config: PathBuf,

        /// Slack channel ID to post to (optional if set in the config)
        #[arg(short, long)]
        channel: Option<String>,

        #[command(flatten)]
        message: MessageArgs,
    },
    /// Build the example message and print its JSON
    Render {
        #[command(flatten)]
        message: MessageArgs,
    },
}

/// Contents of the example message.
#[derive(Args, Debug, Clone)]
struct MessageArgs {
    /// Text of the header block
    #[arg(short = 'H', long, default_value = "Example header")]
    header: String,

    /// Markdown text of the section block
    #[arg(short, long, default_value = "Example section")]
    section: String,

    /// GitHub username shown in the context block
    #[arg(short, long, default_value = "octocat")]
    user: String,
}

impl MessageArgs {
    fn build(&self) -> Result<Message, BuildError> {
        commands::message::example(&self.header, &self.section, &self.user)
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.json_logs);

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing on stderr so `render` output stays clean.
fn init_tracing(json: bool) {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "blockkit_cli=info,blockkit_client=info".into());

    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Post {
            config,
            channel,
            message,
        } => {
            let message = message.build()?;
            commands::post::run(&config, channel, &message).await?;
        }
        Commands::Render { message } => {
            commands::render::run(&message.build()?)?;
        }
    }
    Ok(())
}
