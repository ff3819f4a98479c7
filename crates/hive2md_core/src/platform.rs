use std::fmt;

/// Chain a run reads from. Each variant is bound to a public node and the
/// labels used in rendered documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    #[default]
    Hive,
    Steemit,
}

impl Platform {
    pub fn node_url(self) -> &'static str {
        match self {
            Platform::Hive => "https://api.hive.blog",
            Platform::Steemit => "https://api.steemit.com",
        }
    }

    /// Lower-case name used in permalinks and post URLs.
    pub fn slug(self) -> &'static str {
        match self {
            Platform::Hive => "hive",
            Platform::Steemit => "steemit",
        }
    }

    /// Display name used as a category and in the attribution footer.
    pub fn label(self) -> &'static str {
        match self {
            Platform::Hive => "Hive",
            Platform::Steemit => "Steemit",
        }
    }

    pub fn post_url(self, author: &str, permlink: &str) -> String {
        format!("https://{}.blog/@{author}/{permlink}", self.slug())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
