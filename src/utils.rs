use std::{
    env,
    path::{Path, PathBuf},
};

pub const ROOT_ENV: &str = "ESC50_ROOT";

/// Project root: `ESC50_ROOT` if set, otherwise the crate directory.
pub fn project_root() -> PathBuf {
    env::var_os(ROOT_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).to_path_buf())
}
