// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config port shared across Lightcone front-ends.

use crate::config::{ConfigError, ConfigService, ConfigStore};
use crate::prefs::RelativityPrefs;

/// Store key for [`RelativityPrefs`].
pub const PREFS_KEY: &str = "relativity";

/// Loading and saving relativity preferences.
pub trait ConfigPort {
    /// Saved preferences, or defaults when none were saved.
    fn load_prefs(&self) -> Result<RelativityPrefs, ConfigError>;
    /// Persist preferences.
    fn save_prefs(&self, prefs: &RelativityPrefs) -> Result<(), ConfigError>;
}

impl<S: ConfigStore> ConfigPort for ConfigService<S> {
    fn load_prefs(&self) -> Result<RelativityPrefs, ConfigError> {
        Ok(self.load(PREFS_KEY)?.unwrap_or_default())
    }

    fn save_prefs(&self, prefs: &RelativityPrefs) -> Result<(), ConfigError> {
        self.save(PREFS_KEY, prefs)
    }
}
