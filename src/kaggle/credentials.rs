use crate::{
    error::{DataError, Result},
    types::CredentialSource,
};
use directories::BaseDirs;
use serde::Deserialize;
use std::{
    env, fmt, fs,
    path::{Path, PathBuf},
};

pub const USERNAME_ENV: &str = "KAGGLE_USERNAME";
pub const KEY_ENV: &str = "KAGGLE_KEY";
pub const CONFIG_DIR_ENV: &str = "KAGGLE_CONFIG_DIR";
pub const CONFIG_FILE: &str = "kaggle.json";

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    key: String,
}

#[derive(Deserialize)]
struct CredentialsFile {
    username: Option<String>,
    key: Option<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, key: impl Into<String>) -> Result<Self> {
        let (username, key) = (username.into(), key.into());
        if username.trim().is_empty() {
            return Err(DataError::InvalidCredentials("username is empty".into()));
        }
        if key.trim().is_empty() {
            return Err(DataError::InvalidCredentials("key is empty".into()));
        }
        Ok(Self { username, key })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    pub fn from_source(source: &CredentialSource) -> Result<Self> {
        match source {
            CredentialSource::Discover => Self::discover(),
            CredentialSource::ConfigDir(dir) => Self::from_config_dir(dir),
            CredentialSource::Explicit(c) => Ok(c.clone()),
        }
    }

    /// Environment variables first, then `kaggle.json` in `KAGGLE_CONFIG_DIR`
    /// or `~/.kaggle`.
    pub fn discover() -> Result<Self> {
        Self::resolve(|name| env::var(name).ok())
    }

    pub(crate) fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let lookup = |name: &str| lookup(name).filter(|v| !v.is_empty());

        if let (Some(username), Some(key)) = (lookup(USERNAME_ENV), lookup(KEY_ENV)) {
            return Self::new(username, key);
        }

        let dir = lookup(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .or_else(default_config_dir)
            .ok_or_else(|| DataError::MissingCredentials {
                searched: format!("${CONFIG_DIR_ENV}, ~/.kaggle"),
            })?;
        Self::from_config_dir(&dir)
    }

    pub fn from_config_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.is_file() {
            return Err(DataError::MissingCredentials {
                searched: path.display().to_string(),
            });
        }

        let raw = fs::read_to_string(&path)?;
        let file: CredentialsFile = serde_json::from_str(&raw)
            .map_err(|e| DataError::InvalidCredentials(format!("{}: {e}", path.display())))?;

        match (file.username, file.key) {
            (Some(username), Some(key)) => Self::new(username, key),
            _ => Err(DataError::InvalidCredentials(format!(
                "{} must contain `username` and `key`",
                path.display()
            ))),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("key", &"<redacted>")
            .finish()
    }
}

fn default_config_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|b| b.home_dir().join(".kaggle"))
}
