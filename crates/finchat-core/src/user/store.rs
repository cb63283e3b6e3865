//! Account store capability trait.
//!
//! Defines the interface for account persistence operations.

use super::model::Profile;
use crate::error::Result;

/// An abstract store for user accounts and their profiles.
///
/// This trait defines the contract for creating and authenticating accounts,
/// decoupling the application's core logic from the specific storage
/// mechanism (e.g., a JSON file, a key-value store, a database).
///
/// # Implementation Notes
///
/// Implementations must make every mutating call atomic from the caller's
/// point of view: no partial application of a `create` or `set_profile` may
/// ever be observable. Coordination *between* independent callers is not
/// required by this contract and must be documented by the implementation.
pub trait AccountStore: Send + Sync {
    /// Creates a new account with the given profile.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Account created and persisted
    /// - `Err(FinchatError::AlreadyExists)`: The email is already registered;
    ///   the store is left unchanged
    fn create(&self, email: &str, password: &str, profile: Profile) -> Result<()>;

    /// Verifies credentials and returns the stored profile on success.
    ///
    /// Unknown email and wrong password are deliberately indistinguishable:
    /// both produce `Ok(None)`. Callers must not leak which one occurred.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Profile))`: Credentials verified
    /// - `Ok(None)`: Unknown email or wrong password
    /// - `Err(_)`: Storage-level failure
    fn authenticate(&self, email: &str, password: &str) -> Result<Option<Profile>>;

    /// Returns the stored profile for an account.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Profile))`: Account found
    /// - `Ok(None)`: Account not found
    /// - `Err(_)`: Storage-level failure
    fn get_profile(&self, email: &str) -> Result<Option<Profile>>;

    /// Overwrites the profile of an existing account.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Profile replaced and persisted
    /// - `Err(FinchatError::NotFound)`: No account with this email
    fn set_profile(&self, email: &str, profile: Profile) -> Result<()>;
}
