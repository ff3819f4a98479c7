use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};
use url::Url;
use uuid::Uuid;

static MARKDOWN_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[.*?\]\((.*?)\)").expect("markdown image pattern"));

/// An image fetched into the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedImage {
    pub original_url: String,
    pub local_name: String,
}

/// Lists the images a post references, in encounter order.
///
/// Metadata images come first, then `![alt](url)` targets in the body, then
/// absolute `<img src>` URLs from inline HTML. Duplicates are kept.
pub fn collect_image_urls(metadata_images: &[String], body: &str) -> Vec<String> {
    let mut urls = metadata_images.to_vec();
    urls.extend(markdown_image_urls(body));
    urls.extend(html_image_urls(body));
    urls
}

fn markdown_image_urls(body: &str) -> Vec<String> {
    MARKDOWN_IMAGE
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .filter_map(|target| markdown_target_url(target.as_str()))
        .collect()
}

// `![a](url "title")` and `![a](<url>)` both name just `url`.
fn markdown_target_url(target: &str) -> Option<String> {
    let url = target.split_whitespace().next()?;
    let url = url.trim_start_matches('<').trim_end_matches('>');
    (!url.is_empty()).then(|| url.to_string())
}

fn html_image_urls(body: &str) -> Vec<String> {
    let has_img_tag = body
        .as_bytes()
        .windows(4)
        .any(|window| window.eq_ignore_ascii_case(b"<img"));
    if !has_img_tag {
        return Vec::new();
    }
    let Ok(selector) = Selector::parse("img[src]") else {
        return Vec::new();
    };
    let fragment = Html::parse_fragment(body);
    let urls: Vec<String> = fragment
        .select(&selector)
        .filter_map(|img| img.value().attr("src"))
        .map(str::trim)
        .filter(|src| {
            Url::parse(src)
                .map(|url| matches!(url.scheme(), "http" | "https"))
                .unwrap_or(false)
        })
        .map(ToOwned::to_owned)
        .collect();
    urls
}

/// Extension of the last path segment, without the dot.
///
/// A leading dot alone (`/.hidden`) is not an extension, and query strings
/// or fragments never contribute.
pub fn extension_from_url(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    let segment = url.path_segments()?.last()?;
    let stem_and_ext = segment.trim_start_matches('.');
    let (_, ext) = stem_and_ext.rsplit_once('.')?;
    (!ext.is_empty()).then(|| ext.to_string())
}

/// `<id>.<ext>`, or just `<id>` when the source URL has no extension.
pub fn local_image_name(id: Uuid, extension: Option<&str>) -> String {
    match extension {
        Some(ext) => format!("{id}.{ext}"),
        None => id.to_string(),
    }
}

/// Replaces every occurrence of `original_url` in `body`.
///
/// HTML attributes usually spell `&` as `&amp;`, so that form is
/// replaced as well.
pub fn replace_image_url(body: &str, image: &DownloadedImage) -> String {
    let rewritten = body.replace(&image.original_url, &image.local_name);
    if !image.original_url.contains('&') {
        return rewritten;
    }
    let encoded = image.original_url.replace('&', "&amp;");
    rewritten.replace(&encoded, &image.local_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_target_strips_title_and_brackets() {
        assert_eq!(
            markdown_target_url(r#"https://x/a.png "A title""#).as_deref(),
            Some("https://x/a.png")
        );
        assert_eq!(
            markdown_target_url("<https://x/b.jpg>").as_deref(),
            Some("https://x/b.jpg")
        );
        assert_eq!(markdown_target_url("   "), None);
    }

    #[test]
    fn html_scan_skipped_without_img_tags() {
        assert!(html_image_urls("plain *markdown* text").is_empty());
    }

    #[test]
    fn html_scan_matches_tags_in_any_case() {
        assert_eq!(
            html_image_urls(r#"<Img SRC="https://x/mixed.png">"#),
            vec!["https://x/mixed.png"]
        );
    }
}
