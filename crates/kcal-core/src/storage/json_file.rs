//! JSON file storage backend.
//!
//! Two files in a data directory, one per entry: `calorie_data.json` for the
//! ledger and `user_data.json` for the profile. Writes go through a temp file
//! and an atomic rename.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{KcalError, Result};
use crate::fs::rename_with_fallback;
use crate::ledger::Ledger;
use crate::profile::Profile;
use crate::storage::traits::{ProfileLoad, Store};

const LEDGER_FILE: &str = "calorie_data.json";
const PROFILE_FILE: &str = "user_data.json";

/// File-backed store rooted at a data directory.
///
/// The directory is created on first write; there is no separate
/// initialization step.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding both entries.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn ledger_path(&self) -> PathBuf {
        self.dir.join(LEDGER_FILE)
    }

    fn profile_path(&self) -> PathBuf {
        self.dir.join(PROFILE_FILE)
    }

    fn read_entry(path: &Path) -> Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(KcalError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                err
            ))),
        }
    }

    fn write_entry(&self, path: &Path, contents: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|err| {
            KcalError::Storage(format!(
                "Failed to create data directory {}: {}",
                self.dir.display(),
                err
            ))
        })?;
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, contents).map_err(|err| {
            KcalError::Storage(format!("Failed to write {}: {}", temp_path.display(), err))
        })?;
        rename_with_fallback(&temp_path, path)?;
        Ok(())
    }
}

impl Store for JsonFileStore {
    fn load_ledger(&self) -> Result<Ledger> {
        match Self::read_entry(&self.ledger_path())? {
            Some(contents) => serde_json::from_str(&contents).map_err(|err| {
                KcalError::Corrupt(format!(
                    "Ledger file {} is not valid: {}",
                    self.ledger_path().display(),
                    err
                ))
            }),
            None => Ok(Ledger::new()),
        }
    }

    fn save_ledger(&mut self, ledger: &Ledger) -> Result<()> {
        let contents = serde_json::to_string_pretty(ledger)?;
        self.write_entry(&self.ledger_path(), &contents)
    }

    fn load_profile(&mut self) -> Result<ProfileLoad> {
        let path = self.profile_path();
        let Some(contents) = Self::read_entry(&path)? else {
            return Ok(ProfileLoad::Missing);
        };
        match serde_json::from_str::<Profile>(&contents) {
            Ok(profile) => Ok(ProfileLoad::Loaded(profile)),
            Err(_) => {
                // Invalid entries are cleared so the next load starts clean
                fs::remove_file(&path).map_err(|err| {
                    KcalError::Storage(format!(
                        "Failed to remove invalid profile {}: {}",
                        path.display(),
                        err
                    ))
                })?;
                Ok(ProfileLoad::Discarded)
            }
        }
    }

    fn save_profile(&mut self, profile: &Profile) -> Result<()> {
        let contents = serde_json::to_string_pretty(profile)?;
        self.write_entry(&self.profile_path(), &contents)
    }
}
