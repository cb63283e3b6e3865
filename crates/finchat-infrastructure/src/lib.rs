//! FinChat infrastructure layer.
//!
//! File-system-facing implementations of the core capability traits:
//! platform paths, atomic JSON persistence, secret/config storage, the JSON
//! account repository, password hashing and the workbook loader.

pub mod json_account_repository;
pub mod password;
pub mod paths;
pub mod storage;
pub mod workbook_loader;

pub use crate::json_account_repository::JsonAccountRepository;
pub use crate::paths::FinchatPaths;
pub use crate::storage::{AtomicJsonFile, ConfigStorage, SecretStorage};
pub use crate::workbook_loader::load_workbook;
