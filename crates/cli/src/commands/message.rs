//! The example message both commands work with.

use blockkit_core::{BuildError, Content, Context, Header, Image, Message, Mrkdwn, Section};

/// Build a message with a header, a markdown section and a context block
/// showing the GitHub avatar and name of `user`.
///
/// # Errors
///
/// Returns `BuildError` if a payload is placed in the wrong union, which
/// only happens if this function is edited incorrectly.
pub fn example(header: &str, section: &str, user: &str) -> Result<Message, BuildError> {
    Message::build([
        Content::from(Header::plain(header)),
        Section::mrkdwn(section).into(),
        Context::build([
            Content::from(Image::new(
                format!("https://github.com/{user}.png"),
                format!("{user} profile picture"),
            )),
            Mrkdwn::from(user).into(),
        ])?
        .into(),
    ])
}
