//! Model agent trait.
//!
//! Defines the boundary to the hosted model: one prompt in, one free-text
//! reply out. No streaming, no structured output contract, no automatic
//! retry; every retry is a fresh user-initiated action.

use finchat_core::error::Result;

/// An agent that can answer one prompt with one free-text reply.
#[async_trait::async_trait]
pub trait ModelAgent: Send + Sync {
    /// Sends the prompt and returns the model's reply.
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: The reply text
    /// - `Err(FinchatError::ExternalCall)`: The call failed or timed out
    async fn generate(&self, prompt: &str) -> Result<String>;
}
