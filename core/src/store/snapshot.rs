use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use stockpile_common::error::{StoreError, StoreResult};
use tokio::fs;

use super::Collections;

/// JSON file holding every collection of a [`super::DocumentStore`].
#[derive(Debug)]
pub(crate) struct Snapshot {
    path: PathBuf,
}

impl Snapshot {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) async fn load(&self) -> StoreResult<Collections> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Collections::default()),
            Err(err) => return Err(err.into()),
        };

        serde_json::from_slice(&raw)
            .map_err(|err| StoreError::Corrupt(format!("{}: {}", self.path.display(), err)))
    }

    /// Replaces the file through a sibling temp file so readers never see half a snapshot.
    pub(crate) async fn write(&self, collections: &Collections) -> StoreResult<()> {
        let raw = serde_json::to_vec_pretty(collections)
            .map_err(|err| StoreError::Corrupt(err.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, raw).await?;
        fs::rename(&staging, &self.path).await?;
        Ok(())
    }
}
