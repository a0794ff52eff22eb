// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filesystem-backed `ConfigStore` for Lightcone tools (uses platform config dir).

use directories::ProjectDirs;
use lightcone_app_core::config::{is_valid_key, ConfigError, ConfigStore};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Store configs as JSON files under a base directory.
#[derive(Debug, Clone)]
pub struct FsConfigStore {
    base: PathBuf,
}

impl FsConfigStore {
    /// Create a store rooted at the user config directory (e.g., `~/.config/lightcone`).
    pub fn new() -> Result<Self, ConfigError> {
        let proj = ProjectDirs::from("dev", "flyingrobots", "Lightcone")
            .ok_or_else(|| ConfigError::Other("could not resolve config dir".into()))?;
        Self::with_root(proj.config_dir())
    }

    /// Create a store rooted at `root`, creating it if needed.
    pub fn with_root(root: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let base = root.as_ref().to_path_buf();
        fs::create_dir_all(&base)?;
        Ok(Self { base })
    }

    /// Directory holding the JSON files.
    pub fn root(&self) -> &Path {
        &self.base
    }

    /// File that backs `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, ConfigError> {
        if !is_valid_key(key) {
            return Err(ConfigError::InvalidKey(key.to_owned()));
        }
        Ok(self.base.join(format!("{key}.json")))
    }
}

impl ConfigStore for FsConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        let path = self.path_for(key)?;
        match fs::read(path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(ConfigError::NotFound),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let path = self.path_for(key)?;
        let parent = path.parent().unwrap_or(&self.base);
        fs::create_dir_all(parent)?;
        // Readers never see a torn file; the temp file is removed on drop if persist fails.
        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(data)?;
        tmp.persist(&path).map_err(|err| ConfigError::Io(err.error))?;
        Ok(())
    }
}
