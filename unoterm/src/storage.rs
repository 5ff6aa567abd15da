use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use color_eyre::{eyre::WrapErr, Result};
use runo::progress::SavedProgress;
use tracing::debug;

/// Scores and round number kept in a JSON file between runs.
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Option<SavedProgress>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .wrap_err_with(|| format!("failed to read {}", self.path.display()))
            }
        };
        let progress = serde_json::from_str(&contents)
            .wrap_err_with(|| format!("{} is not valid saved progress", self.path.display()))?;
        Ok(Some(progress))
    }

    pub fn save(&self, progress: &SavedProgress) -> Result<()> {
        let json = serde_json::to_string_pretty(progress)?;
        fs::write(&self.path, json)
            .wrap_err_with(|| format!("failed to write {}", self.path.display()))?;
        debug!(path = %self.path.display(), ?progress, "progress saved");
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).wrap_err_with(|| format!("failed to remove {}", self.path.display()))
            }
        }
    }
}
