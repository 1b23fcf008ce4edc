//! Store trait definition.
//!
//! All backends persist exactly two independent JSON-encoded entries: the
//! ledger and the profile. Implementations must keep writes atomic so a
//! failed save never leaves a half-written entry behind.

use crate::error::Result;
use crate::ledger::Ledger;
use crate::profile::Profile;

/// Outcome of loading the persisted profile.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileLoad {
    /// A valid profile was present.
    Loaded(Profile),

    /// No profile has been stored yet.
    Missing,

    /// A profile entry existed but was malformed or type-invalid; the backend
    /// removed it. Callers should warn and fall back to profile-entry mode.
    Discarded,
}

impl ProfileLoad {
    /// The profile, if one was loaded.
    pub fn into_profile(self) -> Option<Profile> {
        match self {
            ProfileLoad::Loaded(profile) => Some(profile),
            ProfileLoad::Missing | ProfileLoad::Discarded => None,
        }
    }
}

/// Persistence service for the ledger and profile.
pub trait Store {
    /// Load the full ledger.
    ///
    /// A missing entry is an empty ledger.
    ///
    /// # Errors
    ///
    /// Returns `KcalError::Corrupt` if the entry exists but cannot be parsed;
    /// corrupt ledger data is never silently reset.
    fn load_ledger(&self) -> Result<Ledger>;

    /// Serialize and write back the full ledger.
    fn save_ledger(&mut self, ledger: &Ledger) -> Result<()>;

    /// Load the persisted profile.
    ///
    /// Malformed profile data is removed from the store and reported as
    /// `ProfileLoad::Discarded` rather than surfaced as an error.
    fn load_profile(&mut self) -> Result<ProfileLoad>;

    /// Serialize and write back the profile.
    fn save_profile(&mut self, profile: &Profile) -> Result<()>;
}
