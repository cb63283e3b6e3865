//! JSON-file-backed account store.

use crate::password::{hash_password, verify_password};
use crate::storage::AtomicJsonFile;
use chrono::Utc;
use finchat_core::error::{FinchatError, Result};
use finchat_core::user::{AccountRecord, AccountStore, Profile};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// The serialized shape of the store: email -> account record.
///
/// A `BTreeMap` keeps the on-disk artifact deterministically ordered, which
/// makes diffs and tests stable.
type AccountMap = BTreeMap<String, AccountRecord>;

/// [`AccountStore`] implementation over a single JSON file.
///
/// The whole mapping is read and written wholesale on every operation, via
/// [`AtomicJsonFile`]: mutations run under an exclusive file lock and land
/// with temp-file + fsync + atomic rename, so no caller can ever observe a
/// partially applied mutation and a crash mid-write cannot corrupt the
/// store.
///
/// # Known limitation
///
/// Readers do not take the lock, and separate processes interleaving their
/// own load/save cycles outside [`AtomicJsonFile::update`] remain
/// last-writer-wins. That matches the single-user scale this store targets;
/// swapping in a real key-value store only requires another `AccountStore`
/// implementation.
pub struct JsonAccountRepository {
    file: AtomicJsonFile<AccountMap>,
}

impl JsonAccountRepository {
    /// Creates a repository persisting at `path`. Absence of the file is
    /// equivalent to an empty store.
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    fn load_map(&self) -> Result<AccountMap> {
        Ok(self.file.load().map_err(FinchatError::from)?.unwrap_or_default())
    }
}

impl AccountStore for JsonAccountRepository {
    fn create(&self, email: &str, password: &str, profile: Profile) -> Result<()> {
        let record = AccountRecord {
            email: email.to_string(),
            password_hash: hash_password(password)?,
            profile,
            created_at: Utc::now().to_rfc3339(),
        };

        self.file
            .update(AccountMap::new(), |accounts| {
                if accounts.contains_key(email) {
                    return Err(std::io::Error::new(
                        std::io::ErrorKind::AlreadyExists,
                        email.to_string(),
                    )
                    .into());
                }
                accounts.insert(email.to_string(), record.clone());
                Ok(())
            })
            .map_err(|e| match e {
                crate::storage::AtomicJsonError::IoError(ref io)
                    if io.kind() == std::io::ErrorKind::AlreadyExists =>
                {
                    FinchatError::already_exists("account", email)
                }
                other => other.into(),
            })?;

        tracing::info!(email, "account created");
        Ok(())
    }

    fn authenticate(&self, email: &str, password: &str) -> Result<Option<Profile>> {
        let accounts = self.load_map()?;

        // Unknown email and wrong password intentionally collapse into the
        // same `None`; callers must not be able to tell them apart.
        let Some(record) = accounts.get(email) else {
            return Ok(None);
        };

        if verify_password(password, &record.password_hash)? {
            Ok(Some(record.profile.clone()))
        } else {
            Ok(None)
        }
    }

    fn get_profile(&self, email: &str) -> Result<Option<Profile>> {
        let accounts = self.load_map()?;
        Ok(accounts.get(email).map(|record| record.profile.clone()))
    }

    fn set_profile(&self, email: &str, profile: Profile) -> Result<()> {
        self.file
            .update(AccountMap::new(), |accounts| {
                match accounts.get_mut(email) {
                    Some(record) => {
                        record.profile = profile.clone();
                        Ok(())
                    }
                    None => Err(std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        email.to_string(),
                    )
                    .into()),
                }
            })
            .map_err(|e| match e {
                crate::storage::AtomicJsonError::IoError(ref io)
                    if io.kind() == std::io::ErrorKind::NotFound =>
                {
                    FinchatError::not_found("account", email)
                }
                other => other.into(),
            })?;

        tracing::debug!(email, "profile updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finchat_core::user::ProfileKey;
    use tempfile::TempDir;

    fn repository(temp_dir: &TempDir) -> JsonAccountRepository {
        JsonAccountRepository::new(temp_dir.path().join("accounts.json"))
    }

    #[test]
    fn test_create_then_authenticate() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        let mut profile = Profile::default();
        profile.set(ProfileKey::Industria, "Agricultura");

        repo.create("ana@example.com", "secreto123", profile.clone())
            .unwrap();

        let authenticated = repo
            .authenticate("ana@example.com", "secreto123")
            .unwrap()
            .unwrap();
        assert_eq!(authenticated, profile);
    }

    #[test]
    fn test_wrong_password_and_unknown_email_are_indistinguishable() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);
        repo.create("ana@example.com", "secreto123", Profile::default())
            .unwrap();

        let wrong_password = repo.authenticate("ana@example.com", "otra").unwrap();
        let unknown_email = repo.authenticate("luis@example.com", "secreto123").unwrap();
        assert_eq!(wrong_password, unknown_email);
        assert!(wrong_password.is_none());
    }

    #[test]
    fn test_duplicate_create_fails_and_leaves_store_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.json");
        let repo = JsonAccountRepository::new(path.clone());

        repo.create("ana@example.com", "primera", Profile::default())
            .unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let err = repo
            .create("ana@example.com", "segunda", Profile::default())
            .unwrap_err();
        assert!(err.is_already_exists());

        let after = std::fs::read_to_string(&path).unwrap();
        assert_eq!(before, after);

        // The original password still authenticates.
        assert!(
            repo.authenticate("ana@example.com", "primera")
                .unwrap()
                .is_some()
        );
    }

    #[test]
    fn test_set_profile_requires_existing_account() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        let err = repo
            .set_profile("nadie@example.com", Profile::default())
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_set_profile_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);
        repo.create("ana@example.com", "secreto123", Profile::default())
            .unwrap();

        let mut profile = Profile::default();
        profile.set(ProfileKey::Rol, "Contador");
        repo.set_profile("ana@example.com", profile.clone()).unwrap();

        assert_eq!(
            repo.get_profile("ana@example.com").unwrap().unwrap(),
            profile
        );
    }

    #[test]
    fn test_missing_file_is_an_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);
        assert!(repo.get_profile("ana@example.com").unwrap().is_none());
    }
}
