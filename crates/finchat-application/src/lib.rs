//! FinChat application layer.
//!
//! Use cases composing the core domain with the infrastructure and
//! interaction layers.

pub mod session_context;

pub use session_context::{LOGIN_FAILURE_MESSAGE, SessionContext, THROTTLED_MESSAGE};
