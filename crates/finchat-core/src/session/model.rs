//! Chat session domain model.

use super::message::{ChatTurn, MessageRole};
use chrono::Utc;

/// An append-only, ordered log of chat turns.
///
/// The session is scoped to one interactive run of the application: it is
/// cleared by explicit user action or discarded at process exit, and is
/// never persisted. Rendering the conversation is always a full replay of
/// `history()` in insertion order; at this scale there is no pagination or
/// windowing.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    turns: Vec<ChatTurn>,
}

impl ChatSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one turn, preserving insertion order.
    pub fn append(&mut self, role: MessageRole, content: impl Into<String>) {
        self.turns.push(ChatTurn {
            role,
            content: content.into(),
            timestamp: Utc::now().to_rfc3339(),
        });
    }

    /// The full ordered history.
    pub fn history(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Empties the session. No undo.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// True when no turn has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
