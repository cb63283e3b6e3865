//! User domain module.
//!
//! This module contains the account/profile domain models, the account store
//! capability trait and the login throttle.
//!
//! # Module Structure
//!
//! - `model`: Profile and account record domain models
//! - `store`: Account store trait
//! - `throttle`: Login attempt throttle

mod model;
mod store;
mod throttle;

// Re-export public API
pub use model::{AccountRecord, Profile, ProfileKey};
pub use store::AccountStore;
pub use throttle::LoginThrottle;
