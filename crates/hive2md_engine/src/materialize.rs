use hive2md_core::{
    collect_image_urls, extension_from_url, local_image_name, replace_image_url, DownloadedImage,
};
use thiserror::Error;
use uuid::Uuid;

use crate::{ArchiveEvent, AtomicFileWriter, FetchError, Fetcher, PersistError, ProgressSink};

#[derive(Debug, Error)]
pub enum ImageError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("could not save image: {0}")]
    Persist(#[from] PersistError),
}

/// A post body after its images were pulled in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MaterializedBody {
    pub body: String,
    pub downloaded: Vec<DownloadedImage>,
    pub failed: Vec<String>,
}

/// Downloads the images a post references into the output directory and
/// points the body at the local copies.
pub struct ImageMaterializer<'a> {
    fetcher: &'a dyn Fetcher,
    writer: &'a AtomicFileWriter,
    sink: &'a dyn ProgressSink,
}

impl<'a> ImageMaterializer<'a> {
    pub fn new(
        fetcher: &'a dyn Fetcher,
        writer: &'a AtomicFileWriter,
        sink: &'a dyn ProgressSink,
    ) -> Self {
        Self {
            fetcher,
            writer,
            sink,
        }
    }

    /// Downloads sequentially in candidate order. A failed image is
    /// reported and leaves its URL untouched in the body.
    pub async fn materialize(
        &self,
        permlink: &str,
        body: &str,
        metadata_images: &[String],
    ) -> MaterializedBody {
        let urls = collect_image_urls(metadata_images, body);
        let mut result = MaterializedBody {
            body: body.to_string(),
            ..MaterializedBody::default()
        };
        if urls.is_empty() {
            return result;
        }
        self.sink.emit(ArchiveEvent::ImagesFound {
            permlink: permlink.to_string(),
            urls: urls.clone(),
        });

        for url in urls {
            match self.download(&url).await {
                Ok(image) => {
                    result.body = replace_image_url(&result.body, &image);
                    result.downloaded.push(image);
                }
                Err(err) => {
                    self.sink.emit(ArchiveEvent::ImageFailed {
                        url: url.clone(),
                        reason: err.to_string(),
                    });
                    result.failed.push(url);
                }
            }
        }
        result
    }

    async fn download(&self, url: &str) -> Result<DownloadedImage, ImageError> {
        let bytes = self.fetcher.fetch(url).await?;
        let extension = extension_from_url(url);
        let local_name = local_image_name(Uuid::new_v4(), extension.as_deref());
        let path = self.writer.write_bytes(&local_name, &bytes)?;

        self.sink.emit(ArchiveEvent::ImageSaved {
            url: url.to_string(),
            path,
        });
        Ok(DownloadedImage {
            original_url: url.to_string(),
            local_name,
        })
    }
}
