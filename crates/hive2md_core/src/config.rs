use std::path::PathBuf;

use crate::{FilterOptions, Platform};

/// Upper bound on blog entries requested from the node.
pub const DEFAULT_BLOG_LIMIT: u32 = 500;

/// Everything one archive run needs, passed explicitly through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub account: String,
    pub output_dir: PathBuf,
    pub platform: Platform,
    pub filter: FilterOptions,
    /// Replaces the platform's public node when set.
    pub node_url: Option<String>,
    pub limit: u32,
}

impl RunConfig {
    pub fn new(account: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            account: account.into(),
            output_dir: output_dir.into(),
            platform: Platform::default(),
            filter: FilterOptions::default(),
            node_url: None,
            limit: DEFAULT_BLOG_LIMIT,
        }
    }

    pub fn node_url(&self) -> &str {
        self.node_url
            .as_deref()
            .unwrap_or_else(|| self.platform.node_url())
    }
}
