//! FinChat interaction layer.
//!
//! The boundary to the hosted model: the [`ModelAgent`] trait and its Gemini
//! REST implementation.

pub mod agent;
pub mod gemini_api_agent;

pub use agent::ModelAgent;
pub use gemini_api_agent::{GeminiApiAgent, MISSING_KEY_HELP};
