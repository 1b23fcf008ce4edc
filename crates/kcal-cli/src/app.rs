//! Application context shared by command handlers.

use kcal_core::{JsonFileStore, Profile, ProfileLoad, Store};

use crate::config;

/// Open store plus command-wide flags.
pub struct AppContext {
    store: JsonFileStore,
    quiet: bool,
}

impl AppContext {
    pub fn open(data_dir: Option<&str>, quiet: bool) -> anyhow::Result<Self> {
        let dir = config::resolve_data_dir(data_dir)?;
        Ok(Self {
            store: JsonFileStore::new(dir),
            quiet,
        })
    }

    pub fn store(&mut self) -> &mut JsonFileStore {
        &mut self.store
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// Load the stored profile, warning on stderr when a corrupt entry was
    /// cleared. `None` means the tracker is in profile-entry mode.
    pub fn load_profile(&mut self) -> anyhow::Result<Option<Profile>> {
        match self.store.load_profile()? {
            ProfileLoad::Loaded(profile) => Ok(Some(profile)),
            ProfileLoad::Missing => Ok(None),
            ProfileLoad::Discarded => {
                eprintln!("Warning: stored profile was invalid and has been cleared.");
                Ok(None)
            }
        }
    }

    /// Daily maintenance estimate from the stored profile, if one exists and
    /// is plausible. Never returns a value derived from an invalid profile.
    pub fn maintenance(&mut self) -> anyhow::Result<Option<f64>> {
        let Some(profile) = self.load_profile()? else {
            return Ok(None);
        };
        match profile.maintenance_kcal() {
            Ok(kcal) => Ok(Some(kcal)),
            Err(err) => {
                eprintln!(
                    "Warning: stored profile is not usable ({}). Run `kcal profile set`.",
                    err
                );
                Ok(None)
            }
        }
    }
}
