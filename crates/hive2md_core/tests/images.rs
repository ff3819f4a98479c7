use hive2md_core::{
    collect_image_urls, extension_from_url, local_image_name, replace_image_url, DownloadedImage,
};
use uuid::Uuid;

#[test]
fn candidates_follow_metadata_then_markdown_then_html() {
    let metadata = vec!["https://img.example/cover.jpg".to_string()];
    let body = "Intro ![cover](https://img.example/cover.jpg)\n\
                <center><img src=\"https://img.example/inline.gif\" /></center>\n\
                ![second](https://img.example/b.png \"caption\")";

    let urls = collect_image_urls(&metadata, body);

    assert_eq!(
        urls,
        vec![
            "https://img.example/cover.jpg",
            "https://img.example/cover.jpg",
            "https://img.example/b.png",
            "https://img.example/inline.gif",
        ]
    );
}

#[test]
fn relative_html_sources_are_not_candidates() {
    let urls = collect_image_urls(&[], r#"<img src="/local/a.png"><img src="data:image/png;base64,AA==">"#);
    assert!(urls.is_empty());
}

#[test]
fn markdown_links_that_are_not_images_are_ignored() {
    let urls = collect_image_urls(&[], "[a link](https://example.com/page.html)");
    assert!(urls.is_empty());
}

#[test]
fn extension_comes_from_path_only() {
    assert_eq!(extension_from_url("http://example.com/a.png").as_deref(), Some("png"));
    assert_eq!(
        extension_from_url("https://x.example/dir/photo.final.JPEG?w=640#top").as_deref(),
        Some("JPEG")
    );
    assert_eq!(extension_from_url("https://x.example/dir/noext"), None);
    assert_eq!(extension_from_url("https://x.example/.hidden"), None);
    assert_eq!(extension_from_url("https://x.example/"), None);
    assert_eq!(extension_from_url("not a url"), None);
}

#[test]
fn local_name_is_id_plus_extension() {
    let id = Uuid::nil();
    assert_eq!(
        local_image_name(id, Some("png")),
        "00000000-0000-0000-0000-000000000000.png"
    );
    assert_eq!(local_image_name(id, None), "00000000-0000-0000-0000-000000000000");
}

#[test]
fn replacement_is_global() {
    let image = DownloadedImage {
        original_url: "http://example.com/a.png".to_string(),
        local_name: "abc.png".to_string(),
    };
    let body = "![x](http://example.com/a.png) and again http://example.com/a.png";

    let rewritten = replace_image_url(body, &image);

    assert_eq!(rewritten, "![x](abc.png) and again abc.png");
    assert!(!rewritten.contains("http://example.com/a.png"));
}

#[test]
fn replacement_covers_entity_encoded_ampersands() {
    let image = DownloadedImage {
        original_url: "https://x.com/a.png?w=1&h=2".to_string(),
        local_name: "abc.png".to_string(),
    };
    let body = r#"<img src="https://x.com/a.png?w=1&amp;h=2"> ![m](https://x.com/a.png?w=1&h=2)"#;

    let rewritten = replace_image_url(body, &image);

    assert_eq!(rewritten, r#"<img src="abc.png"> ![m](abc.png)"#);
}

#[test]
fn uppercase_img_tags_are_candidates() {
    let urls = collect_image_urls(&[], r#"<IMG SRC="https://x.com/upper.png"> <Img src="https://x.com/mixed.jpg">"#);
    assert_eq!(urls, vec!["https://x.com/upper.png", "https://x.com/mixed.jpg"]);
}
