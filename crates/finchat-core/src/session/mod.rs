//! Chat session domain module.

mod message;
mod model;

pub use message::{ChatTurn, MessageRole};
pub use model::ChatSession;
