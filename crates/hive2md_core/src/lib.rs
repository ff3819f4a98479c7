//! hive2md core: pure post model, filtering, image discovery and document rendering.
mod config;
mod filename;
mod filter;
mod frontmatter;
mod images;
mod platform;
mod post;

pub use config::{RunConfig, DEFAULT_BLOG_LIMIT};
pub use filename::document_filename;
pub use filter::{select_posts, FilterOptions, Recency, Selection, SkipReason, Skipped, SKIP_TAG};
pub use frontmatter::{build_post_document, capitalize, category_for, sanitize_title};
pub use images::{
    collect_image_urls, extension_from_url, local_image_name, replace_image_url, DownloadedImage,
};
pub use platform::Platform;
pub use post::{Post, PostMetadata};
