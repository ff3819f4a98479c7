use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use hive2md_core::{build_post_document, document_filename, select_posts, Post, RunConfig};
use thiserror::Error;

use crate::{
    ensure_output_dir, ArchiveEvent, AtomicFileWriter, ChainError, ChainReader, CondenserClient,
    FetchError, FetchSettings, Fetcher, ImageMaterializer, PersistError, ProgressSink, ReqwestFetcher,
    RunSummary,
};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Chain(#[from] ChainError),
    #[error("http client setup failed: {0}")]
    Http(#[from] FetchError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Runs fetch, filter, image download and document writing for one account.
///
/// Posts are handled one at a time. Image failures are reported and
/// tolerated; anything else aborts the run.
#[derive(Clone)]
pub struct Archiver {
    chain: Arc<dyn ChainReader>,
    fetcher: Arc<dyn Fetcher>,
    sink: Arc<dyn ProgressSink>,
}

impl Archiver {
    pub fn new(
        chain: Arc<dyn ChainReader>,
        fetcher: Arc<dyn Fetcher>,
        sink: Arc<dyn ProgressSink>,
    ) -> Self {
        Self {
            chain,
            fetcher,
            sink,
        }
    }

    /// Archiver talking to the node `config` selects over real HTTP.
    pub fn connect(
        config: &RunConfig,
        settings: FetchSettings,
        sink: Arc<dyn ProgressSink>,
    ) -> Result<Self, PipelineError> {
        let chain = CondenserClient::new(config.node_url(), &settings)?;
        let fetcher = ReqwestFetcher::new(settings)?;
        Ok(Self::new(Arc::new(chain), Arc::new(fetcher), sink))
    }

    /// `today` is the current UTC date and anchors the date filters.
    pub async fn run(
        &self,
        config: &RunConfig,
        today: NaiveDate,
    ) -> Result<RunSummary, PipelineError> {
        ensure_output_dir(&config.output_dir)?;

        let entries = self
            .chain
            .blog_entries(&config.account, config.limit)
            .await?;
        let mut summary = RunSummary {
            fetched: entries.len(),
            ..RunSummary::default()
        };
        self.sink.emit(ArchiveEvent::EntriesFetched {
            account: config.account.clone(),
            count: entries.len(),
        });

        let selection = select_posts(entries, &config.account, &config.filter, today);
        summary.skipped = selection.skipped.len();
        for skipped in selection.skipped {
            self.sink.emit(ArchiveEvent::PostSkipped {
                permlink: skipped.permlink,
                title: skipped.title,
                reason: skipped.reason,
            });
        }

        let writer = AtomicFileWriter::new(config.output_dir.clone());
        for post in &selection.posts {
            let path = self.archive_post(post, config, &writer, &mut summary).await?;
            summary.saved.push(path);
        }
        Ok(summary)
    }

    async fn archive_post(
        &self,
        post: &Post,
        config: &RunConfig,
        writer: &AtomicFileWriter,
        summary: &mut RunSummary,
    ) -> Result<PathBuf, PipelineError> {
        let materializer = ImageMaterializer::new(self.fetcher.as_ref(), writer, self.sink.as_ref());
        let materialized = materializer
            .materialize(&post.permlink, &post.body, &post.metadata.image)
            .await;
        summary.images_saved += materialized.downloaded.len();
        summary.images_failed += materialized.failed.len();

        let document = build_post_document(post, &materialized.body, config.platform);
        let filename = document_filename(post.date(), &post.permlink);
        let path = writer.write(&filename, &document)?;

        self.sink.emit(ArchiveEvent::PostSaved {
            permlink: post.permlink.clone(),
            path: path.clone(),
        });
        Ok(path)
    }
}
