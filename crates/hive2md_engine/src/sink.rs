use hive2md_core::SkipReason;
use hive2md_logging::{archive_debug, archive_info, archive_warn};

use crate::ArchiveEvent;

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: ArchiveEvent);
}

/// Reports every event through the workspace logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ProgressSink for LogSink {
    fn emit(&self, event: ArchiveEvent) {
        match event {
            ArchiveEvent::EntriesFetched { account, count } => {
                archive_info!("Fetched {count} blog entries for @{account}");
            }
            ArchiveEvent::PostSkipped {
                permlink,
                title,
                reason,
            } => match reason {
                SkipReason::SkipTag { tag } => {
                    archive_info!("Post skipped due to '{tag}' tag: {title}");
                }
                SkipReason::ForeignAuthor { author } => {
                    archive_debug!("Skipping {permlink}: authored by @{author}");
                }
                SkipReason::OutsideWindow { date } => {
                    archive_debug!("Skipping {permlink}: posted on {date}");
                }
                SkipReason::NotLatest => {
                    archive_debug!("Skipping {permlink}: not the latest post");
                }
            },
            ArchiveEvent::ImagesFound { permlink, urls } => {
                archive_info!("Images found in {permlink}: {urls:?}");
            }
            ArchiveEvent::ImageSaved { url, path } => {
                archive_info!("Image {url} saved as {}", path.display());
            }
            ArchiveEvent::ImageFailed { url, reason } => {
                archive_warn!("Error downloading the image {url}: {reason}");
            }
            ArchiveEvent::PostSaved { permlink, path } => {
                archive_info!("Post {permlink} saved: {}", path.display());
            }
        }
    }
}
