use std::fmt;
use std::path::PathBuf;

use hive2md_core::SkipReason;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Something the pipeline did that the user should hear about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveEvent {
    EntriesFetched {
        account: String,
        count: usize,
    },
    PostSkipped {
        permlink: String,
        title: String,
        reason: SkipReason,
    },
    ImagesFound {
        permlink: String,
        urls: Vec<String>,
    },
    ImageSaved {
        url: String,
        path: PathBuf,
    },
    ImageFailed {
        url: String,
        reason: String,
    },
    PostSaved {
        permlink: String,
        path: PathBuf,
    },
}

/// Totals for one archive run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub fetched: usize,
    pub skipped: usize,
    pub saved: Vec<PathBuf>,
    pub images_saved: usize,
    pub images_failed: usize,
}
