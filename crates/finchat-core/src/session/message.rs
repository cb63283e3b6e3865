//! Chat turn types.
//!
//! This module contains types for representing turns in a chat session,
//! including roles and turn content.

use serde::{Deserialize, Serialize};

/// Represents the role of a turn in a chat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageRole {
    /// Turn from the user.
    User,
    /// Turn from the AI assistant.
    Assistant,
}

/// A single turn in a chat session.
///
/// Each turn has a role (user or assistant), content, and a timestamp
/// indicating when it was appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// The role of the turn's author.
    pub role: MessageRole,
    /// The content of the turn.
    pub content: String,
    /// Timestamp when the turn was appended (ISO 8601 format).
    pub timestamp: String,
}
