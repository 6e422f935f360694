//! Print the example message JSON.

use std::io::Write;

use blockkit_core::{CodecError, Message};
use thiserror::Error;

/// Errors that can occur while rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The message could not be encoded.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Standard output could not be written.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Write `message` as one line of JSON to standard output.
pub fn run(message: &Message) -> Result<(), RenderError> {
    let json = message.to_json()?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
