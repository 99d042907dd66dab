use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub save_path: PathBuf,
    /// Game mode difficulty; the saved world's difficulty when unset.
    pub difficulty: Option<u8>,
    /// Seed for game mode battles; a fresh one every run when unset.
    pub seed: Option<u64>,
    /// Print the announcer's heckling during `play`.
    pub commentary: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from("damareen_save.json"),
            difficulty: None,
            seed: None,
            commentary: true,
        }
    }
}

impl Settings {
    /// Reads `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(?path, "no settings file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("unable to read settings {path:?}: {error}"))?;
        toml::from_str::<Settings>(&contents)
            .map_err(|error| anyhow::anyhow!("invalid settings {path:?}: {error}"))
    }
}
