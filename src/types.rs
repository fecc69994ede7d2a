use crate::{
    error::{DataError, Result},
    io::progress::ProgressReporter,
    kaggle::credentials::Credentials,
};
use std::{fmt, path::PathBuf, str::FromStr};

pub const ESC50_DATASET: &str = "mmoreaux/environmental-sound-classification-50";
pub const DEFAULT_API_BASE: &str = "https://www.kaggle.com/api/v1";

/// `owner/dataset-name` reference to a hosted dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetRef {
    owner: String,
    name: String,
}

impl DatasetRef {
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn esc50() -> Self {
        Self {
            owner: "mmoreaux".into(),
            name: "environmental-sound-classification-50".into(),
        }
    }
}

impl FromStr for DatasetRef {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || DataError::InvalidDatasetRef(s.to_string());
        let (owner, name) = s.split_once('/').ok_or_else(invalid)?;
        let ok = |part: &str| {
            !part.is_empty() && !part.contains('/') && !part.chars().any(char::is_whitespace)
        };
        if !ok(owner) || !ok(name) {
            return Err(invalid());
        }
        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for DatasetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Where authentication looks for credentials.
#[derive(Clone, Debug, Default)]
pub enum CredentialSource {
    /// `KAGGLE_USERNAME`/`KAGGLE_KEY`, then `kaggle.json` in
    /// `KAGGLE_CONFIG_DIR` or `~/.kaggle`.
    #[default]
    Discover,
    /// Only `kaggle.json` inside the given directory.
    ConfigDir(PathBuf),
    Explicit(Credentials),
}

#[derive(Clone, Debug)]
pub struct FetchOptions {
    pub dataset: DatasetRef,
    pub api_base: String,
    pub credentials: CredentialSource,
    pub unzip: bool,
    pub progress: Option<ProgressReporter>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            dataset: DatasetRef::esc50(),
            api_base: DEFAULT_API_BASE.into(),
            credentials: CredentialSource::Discover,
            unzip: true,
            progress: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FetchReport {
    pub dataset: DatasetRef,
    pub target_dir: PathBuf,
    pub bytes_downloaded: u64,
    pub files_extracted: usize,
    /// Set only when the archive was kept (`unzip == false`).
    pub archive: Option<PathBuf>,
}

impl FetchReport {
    /// Line printed once a fetch has finished.
    pub fn confirmation(&self) -> String {
        match &self.archive {
            Some(archive) => format!("{} archive saved to {}", self.dataset, archive.display()),
            None if self.dataset == DatasetRef::esc50() => {
                "ESC-50 dataset downloaded successfully.".to_string()
            }
            None => format!("Dataset {} downloaded successfully.", self.dataset),
        }
    }
}
