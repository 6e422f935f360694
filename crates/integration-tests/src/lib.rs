//! Integration tests for the Block Kit workspace.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p blockkit-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `block_kit_fixture` - Wire format of complete messages, built and decoded
//! - `message_client` - Posting messages against a mock Slack API server
