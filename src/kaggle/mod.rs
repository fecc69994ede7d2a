//! Download of hosted datasets from Kaggle.
//!
//! The flow mirrors the service's own client: credentials are resolved
//! locally, then a single authenticated request streams the dataset archive,
//! which is unzipped in place.

pub mod client;
pub mod credentials;

use crate::{
    error::Result,
    paths::DataPaths,
    types::{FetchOptions, FetchReport},
};
use std::fs;
use tracing::info;

pub use client::{AuthenticatedApi, Download, KaggleApi};
pub use credentials::Credentials;

/// Downloads `options.dataset` into the audio directory of `paths`.
///
/// Every call re-downloads and overwrites; nothing is skipped when files are
/// already present.
pub fn fetch_dataset(paths: &DataPaths, options: &FetchOptions) -> Result<FetchReport> {
    let target_dir = paths.audio_dir().to_path_buf();
    fs::create_dir_all(&target_dir)?;

    let api = KaggleApi::new(&options.api_base)?.authenticate(&options.credentials)?;
    info!(user = api.username(), "authenticated");

    let download = api.dataset_download_files(
        &options.dataset,
        &target_dir,
        options.unzip,
        options.progress.as_ref(),
    )?;
    info!(
        dataset = %options.dataset,
        target = %target_dir.display(),
        files = download.files_extracted,
        "dataset downloaded"
    );

    Ok(FetchReport {
        dataset: options.dataset.clone(),
        target_dir,
        bytes_downloaded: download.bytes,
        files_extracted: download.files_extracted,
        archive: download.archive,
    })
}
