use std::{fmt, sync::Arc};

/// One progress event for a dataset archive download.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DownloadProgress {
    pub downloaded: u64,
    /// `None` while the server has not announced a `Content-Length`.
    pub total: Option<u64>,
}

impl DownloadProgress {
    pub fn is_complete(&self) -> bool {
        self.total == Some(self.downloaded)
    }

    pub fn percent(&self) -> Option<f64> {
        match self.total {
            Some(0) => Some(100.0),
            Some(total) => Some(self.downloaded as f64 / total as f64 * 100.0),
            None => None,
        }
    }
}

/// Callback handed to a single fetch through `FetchOptions::progress`.
#[derive(Clone)]
pub struct ProgressReporter(Arc<dyn Fn(DownloadProgress) + Send + Sync>);

impl ProgressReporter {
    pub fn new(cb: impl Fn(DownloadProgress) + Send + Sync + 'static) -> Self {
        Self(Arc::new(cb))
    }

    pub fn emit(&self, downloaded: u64, total: Option<u64>) {
        (self.0)(DownloadProgress { downloaded, total });
    }
}

impl fmt::Debug for ProgressReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ProgressReporter")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_handles_unknown_and_empty_totals() {
        let p = |downloaded, total| DownloadProgress { downloaded, total };
        assert_eq!(p(10, None).percent(), None);
        assert_eq!(p(0, Some(0)).percent(), Some(100.0));
        assert_eq!(p(50, Some(200)).percent(), Some(25.0));
        assert!(p(200, Some(200)).is_complete());
        assert!(!p(10, None).is_complete());
    }
}
