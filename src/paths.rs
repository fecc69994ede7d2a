//! Fixed on-disk layout for the dataset and model artifacts.
//!
//! ```text
//! <root>/
//!   data/
//!     raw/
//!       audio/
//!       meta/esc50.csv
//!     processed/
//!       augmented_data/
//!   models/
//! ```

use crate::{
    error::{DataError, Result},
    utils::project_root,
};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

pub const METADATA_CSV: &str = "esc50.csv";

/// Canonical directories under a project root.
///
/// Constructing a `DataPaths` never touches the filesystem; call
/// [`DataPaths::ensure`] to create the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    root: PathBuf,
    data_dir: PathBuf,
    raw_data_dir: PathBuf,
    audio_dir: PathBuf,
    meta_dir: PathBuf,
    processed_data_dir: PathBuf,
    augmented_data_dir: PathBuf,
    model_dir: PathBuf,
}

impl DataPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let data_dir = root.join("data");
        let raw_data_dir = data_dir.join("raw");
        let processed_data_dir = data_dir.join("processed");
        Self {
            audio_dir: raw_data_dir.join("audio"),
            meta_dir: raw_data_dir.join("meta"),
            augmented_data_dir: processed_data_dir.join("augmented_data"),
            model_dir: root.join("models"),
            processed_data_dir,
            raw_data_dir,
            data_dir,
            root,
        }
    }

    /// Layout rooted at [`project_root`].
    pub fn discover() -> Self {
        Self::new(project_root())
    }

    /// Every directory of the layout, parents before children.
    pub fn directories(&self) -> [&Path; 7] {
        [
            self.data_dir.as_path(),
            self.raw_data_dir.as_path(),
            self.audio_dir.as_path(),
            self.processed_data_dir.as_path(),
            self.augmented_data_dir.as_path(),
            self.model_dir.as_path(),
            self.meta_dir.as_path(),
        ]
    }

    /// Creates every directory that does not exist yet. Safe to call repeatedly.
    pub fn ensure(&self) -> Result<()> {
        for dir in self.directories() {
            fs::create_dir_all(dir).map_err(|source| DataError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
            debug!(dir = %dir.display(), "directory ready");
        }
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn raw_data_dir(&self) -> &Path {
        &self.raw_data_dir
    }

    /// Download target for the dataset archive.
    pub fn audio_dir(&self) -> &Path {
        &self.audio_dir
    }

    pub fn meta_dir(&self) -> &Path {
        &self.meta_dir
    }

    /// Expected location of the metadata CSV. Not created by [`DataPaths::ensure`].
    pub fn metadata_csv(&self) -> PathBuf {
        self.meta_dir.join(METADATA_CSV)
    }

    pub fn processed_data_dir(&self) -> &Path {
        &self.processed_data_dir
    }

    pub fn augmented_data_dir(&self) -> &Path {
        &self.augmented_data_dir
    }

    pub fn model_dir(&self) -> &Path {
        &self.model_dir
    }
}
