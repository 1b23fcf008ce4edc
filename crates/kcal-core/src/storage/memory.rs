//! In-memory storage backend for tests.
//!
//! Holds the two entries as serialized JSON strings so the contract matches
//! the file store byte for byte, including the corrupt-entry paths.

use crate::error::{KcalError, Result};
use crate::ledger::Ledger;
use crate::profile::Profile;
use crate::storage::traits::{ProfileLoad, Store};

/// Store backed by two optional JSON strings.
#[derive(Debug, Default)]
pub struct MemoryStore {
    ledger: Option<String>,
    profile: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the raw ledger entry, valid JSON or not.
    pub fn set_raw_ledger(&mut self, contents: impl Into<String>) {
        self.ledger = Some(contents.into());
    }

    /// Seed the raw profile entry, valid JSON or not.
    pub fn set_raw_profile(&mut self, contents: impl Into<String>) {
        self.profile = Some(contents.into());
    }

    /// Whether a profile entry is currently stored.
    pub fn has_profile(&self) -> bool {
        self.profile.is_some()
    }
}

impl Store for MemoryStore {
    fn load_ledger(&self) -> Result<Ledger> {
        match &self.ledger {
            Some(contents) => serde_json::from_str(contents)
                .map_err(|err| KcalError::Corrupt(format!("Ledger entry is not valid: {}", err))),
            None => Ok(Ledger::new()),
        }
    }

    fn save_ledger(&mut self, ledger: &Ledger) -> Result<()> {
        self.ledger = Some(serde_json::to_string(ledger)?);
        Ok(())
    }

    fn load_profile(&mut self) -> Result<ProfileLoad> {
        let Some(contents) = &self.profile else {
            return Ok(ProfileLoad::Missing);
        };
        match serde_json::from_str::<Profile>(contents) {
            Ok(profile) => Ok(ProfileLoad::Loaded(profile)),
            Err(_) => {
                self.profile = None;
                Ok(ProfileLoad::Discarded)
            }
        }
    }

    fn save_profile(&mut self, profile: &Profile) -> Result<()> {
        self.profile = Some(serde_json::to_string(profile)?);
        Ok(())
    }
}
