use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{ControllerError, ControllerResult};

/// Saves downloaded metadata artifacts under `{file_name}_metadata.json`.
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes the payload through a temp file in the target directory and
    /// renames it into place. The temp handle is consumed by the rename on
    /// success and deleted on drop otherwise, so no partial artifact is
    /// ever left behind.
    pub fn save_metadata(&self, file_name: &str, data: &[u8]) -> ControllerResult<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;

        let mut staged = NamedTempFile::new_in(&self.dir)?;
        staged.write_all(data)?;
        staged.flush()?;

        let target = self.dir.join(format!("{}_metadata.json", file_name));
        staged
            .persist(&target)
            .map_err(|e| ControllerError::download_failed(format!("failed to save artifact: {}", e)))?;

        tracing::debug!(path = %target.display(), size = data.len(), "Artifact written");
        Ok(target)
    }
}
