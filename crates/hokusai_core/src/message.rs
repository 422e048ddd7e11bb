//! Message types for conversation history.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A text message in a conversation.
///
/// The comic pipeline is text-only: prompts go up as text, panel
/// descriptions come back as text.
///
/// # Examples
///
/// ```
/// use hokusai_core::{Message, Role};
///
/// let message = Message {
///     role: Role::User,
///     content: "Once upon a time...".to_string(),
/// };
///
/// assert_eq!(message.role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text content of the message
    #[builder(setter(into))]
    pub content: String,
}

impl Message {
    /// Convenience constructor for a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Convenience constructor for a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}
