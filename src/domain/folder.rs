// src/domain/folder.rs

use std::path::{Path, PathBuf};
use url::Url;

/// Where every output file of a run lands: `<root>/<first host label>`.
///
/// Only the path is computed here. The directory is created lazily by
/// [`OutputFolder::ensure`] right before the first write, so a run that fails
/// early leaves nothing behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFolder {
    path: PathBuf,
}

impl OutputFolder {
    /// `https://www.boliga.dk/nye-boliger` under `out` becomes `out/www`.
    pub fn for_url(root: impl AsRef<Path>, url: &Url) -> Option<Self> {
        let label = url
            .host_str()?
            .split('.')
            .next()
            .filter(|s| !s.is_empty())?;

        Some(Self {
            path: root.as_ref().join(label),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    /// Idempotent.
    pub fn ensure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.path)?;
        tracing::debug!(folder = %self.path.display(), "output folder ready");
        Ok(())
    }
}
