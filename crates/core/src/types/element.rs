//! Context block elements.

use serde::{Deserialize, Serialize};

use super::{Mrkdwn, PlainText};
use crate::flat_union;

/// An image shown inline in a context block.
///
/// Fields are declared in wire order: `alt_text` before `image_url`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Image {
    alt_text: String,
    image_url: String,
}

impl Image {
    /// Create an image element from its URL and alternative text.
    #[must_use]
    pub fn new(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            alt_text: alt_text.into(),
            image_url: image_url.into(),
        }
    }

    /// URL of the image.
    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Plain-text summary of the image.
    #[must_use]
    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }
}

flat_union! {
    /// An element of a context block.
    pub enum ContextElement / ContextElementType {
        PlainText(PlainText) = "plain_text",
        Mrkdwn(Mrkdwn) = "mrkdwn",
        Image(Image) = "image",
    }
}
