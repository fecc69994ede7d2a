use crate::{
    error::{DataError, Result},
    io::{
        extract::extract_and_remove,
        net::{download_with_progress, http_client},
        progress::ProgressReporter,
    },
    kaggle::credentials::Credentials,
    types::{CredentialSource, DatasetRef},
};
use reqwest::{blocking::Client, StatusCode};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Client that has not resolved credentials yet.
pub struct KaggleApi {
    client: Client,
    api_base: String,
}

/// Client holding valid-looking credentials. Obtained only through
/// [`KaggleApi::authenticate`].
pub struct AuthenticatedApi {
    client: Client,
    api_base: String,
    credentials: Credentials,
}

/// Result of a single dataset download.
#[derive(Debug)]
pub struct Download {
    pub bytes: u64,
    pub files_extracted: usize,
    /// Present when the archive was kept instead of extracted.
    pub archive: Option<PathBuf>,
}

impl KaggleApi {
    pub fn new(api_base: &str) -> Result<Self> {
        Ok(Self {
            client: http_client()?,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Resolves credentials locally. Fails before any network traffic when
    /// they are missing or malformed.
    pub fn authenticate(self, source: &CredentialSource) -> Result<AuthenticatedApi> {
        let credentials = Credentials::from_source(source)?;
        Ok(AuthenticatedApi {
            client: self.client,
            api_base: self.api_base,
            credentials,
        })
    }
}

impl AuthenticatedApi {
    pub fn username(&self) -> &str {
        self.credentials.username()
    }

    pub fn download_url(&self, dataset: &DatasetRef) -> String {
        format!(
            "{}/datasets/download/{}/{}",
            self.api_base,
            dataset.owner(),
            dataset.name()
        )
    }

    /// Downloads `<dir>/<name>.zip` and, when `unzip` is set, extracts it into
    /// `dir` and deletes the archive.
    pub fn dataset_download_files(
        self,
        dataset: &DatasetRef,
        dir: &Path,
        unzip: bool,
        progress: Option<&ProgressReporter>,
    ) -> Result<Download> {
        let url = self.download_url(dataset);
        info!(%dataset, "downloading");
        debug!(%url, "request");

        let resp = self
            .client
            .get(&url)
            .basic_auth(self.credentials.username(), Some(self.credentials.key()))
            .send()?;

        match resp.status() {
            s if s.is_success() => {}
            s @ (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) => {
                return Err(DataError::Unauthorized {
                    dataset: dataset.to_string(),
                    status: s.as_u16(),
                })
            }
            StatusCode::NOT_FOUND => return Err(DataError::DatasetNotFound(dataset.to_string())),
            s => {
                return Err(DataError::Http {
                    dataset: dataset.to_string(),
                    status: s.as_u16(),
                })
            }
        }

        let archive = dir.join(format!("{}.zip", dataset.name()));
        let bytes = download_with_progress(resp, &archive, progress)?;

        if !unzip {
            return Ok(Download {
                bytes,
                files_extracted: 0,
                archive: Some(archive),
            });
        }

        info!(archive = %archive.display(), "unzipping");
        let files_extracted = extract_and_remove(&archive, dir)?;
        Ok(Download {
            bytes,
            files_extracted,
            archive: None,
        })
    }
}
