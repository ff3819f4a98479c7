use chrono::NaiveDate;

use crate::Post;

/// Tag marking fitness-tracker posts, left out of the archive by default.
pub const SKIP_TAG: &str = "actifit";

/// Command-line selection flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterOptions {
    pub last: bool,
    pub include_skip_tag: bool,
    pub all: bool,
    pub today: bool,
}

impl FilterOptions {
    /// Resolves the flags by priority: last, all, today, then yesterday.
    pub fn recency(&self) -> Recency {
        if self.last {
            Recency::LastOnly
        } else if self.all {
            Recency::All
        } else if self.today {
            Recency::Today
        } else {
            Recency::Yesterday
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recency {
    /// Newest entry that passes the ownership and skip-tag checks.
    LastOnly,
    All,
    Today,
    Yesterday,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Reblog of someone else's post.
    ForeignAuthor { author: String },
    SkipTag { tag: &'static str },
    OutsideWindow { date: NaiveDate },
    NotLatest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub permlink: String,
    pub title: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub posts: Vec<Post>,
    pub skipped: Vec<Skipped>,
}

/// Picks the entries to archive, preserving input order.
///
/// `today` is the current UTC date; the default window is the day before it.
pub fn select_posts(
    entries: Vec<Post>,
    account: &str,
    options: &FilterOptions,
    today: NaiveDate,
) -> Selection {
    let recency = options.recency();
    let yesterday = today.pred_opt();
    let mut selection = Selection::default();

    for post in entries {
        let rejection = if post.author != account {
            Some(SkipReason::ForeignAuthor {
                author: post.author.clone(),
            })
        } else if !options.include_skip_tag && post.has_tag(SKIP_TAG) {
            Some(SkipReason::SkipTag { tag: SKIP_TAG })
        } else {
            match recency {
                Recency::LastOnly if !selection.posts.is_empty() => Some(SkipReason::NotLatest),
                Recency::LastOnly | Recency::All => None,
                Recency::Today if post.date() != today => Some(SkipReason::OutsideWindow {
                    date: post.date(),
                }),
                Recency::Yesterday if Some(post.date()) != yesterday => {
                    Some(SkipReason::OutsideWindow { date: post.date() })
                }
                Recency::Today | Recency::Yesterday => None,
            }
        };

        match rejection {
            Some(reason) => selection.skipped.push(Skipped {
                permlink: post.permlink,
                title: post.title,
                reason,
            }),
            None => selection.posts.push(post),
        }
    }

    selection
}
