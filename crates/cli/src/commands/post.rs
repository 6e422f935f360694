//! Post the example message to Slack.

use std::path::Path;

use blockkit_client::{ConfigError, PostMessageError, SlackConfig};
use blockkit_core::Message;
use thiserror::Error;

/// Errors that can occur while posting.
#[derive(Debug, Error)]
pub enum PostError {
    /// No channel on the command line or in the configuration.
    #[error("A channel is required, either via the config file or --channel")]
    MissingChannel,

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Slack rejected the message or could not be reached.
    #[error(transparent)]
    Post(#[from] PostMessageError),
}

/// Load credentials and post `message`.
///
/// `channel` overrides the channel from the configuration.
pub async fn run(
    config_path: &Path,
    channel: Option<String>,
    message: &Message,
) -> Result<(), PostError> {
    let config = load_config(config_path)?;
    let channel = resolve_channel(channel, config.channel.as_deref())?;
    let client = config.message_client()?;

    tracing::info!("Posting message to {channel}...");
    let response = client.post(message, &channel).await?;

    tracing::info!(
        ts = response.ts.as_deref().unwrap_or_default(),
        "Message posted"
    );
    Ok(())
}

/// Read the config file, or the environment when it does not exist.
fn load_config(path: &Path) -> Result<SlackConfig, ConfigError> {
    if path.exists() {
        SlackConfig::from_yaml_file(path)
    } else {
        tracing::debug!(
            "Config file {} not found, reading environment",
            path.display()
        );
        SlackConfig::from_env()
    }
}

/// Pick the command-line channel over the configured one.
fn resolve_channel(flag: Option<String>, configured: Option<&str>) -> Result<String, PostError> {
    flag.filter(|channel| !channel.is_empty())
        .or_else(|| configured.map(str::to_owned))
        .ok_or(PostError::MissingChannel)
}
