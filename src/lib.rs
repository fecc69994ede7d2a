//! # esc50-data
//!
//! Directory layout for the ESC-50 environmental sound dataset and a
//! downloader that fetches it from Kaggle into that layout.

pub mod error;
pub mod io;
pub mod kaggle;
pub mod paths;
pub mod types;
pub mod utils;

pub use crate::{
    error::{DataError, Result},
    io::progress::{DownloadProgress, ProgressReporter},
    kaggle::{fetch_dataset, Credentials},
    paths::DataPaths,
    types::{CredentialSource, DatasetRef, FetchOptions, FetchReport, ESC50_DATASET},
};
