//! Prompt construction module.
//!
//! # Module Structure
//!
//! - `personas`: Built-in instruction blocks
//! - `knowledge`: Injectable industry knowledge lookup
//! - `builder`: The prompt rendering function

mod builder;
mod knowledge;
mod personas;

pub use builder::{NO_FILE_PLACEHOLDER, build};
pub use knowledge::{DEFAULT_KNOWLEDGE, IndustryKnowledge};
pub use personas::{FINANCIAL_ANALYST_PERSONA, Persona, SMART_BREVITY_PERSONA};
