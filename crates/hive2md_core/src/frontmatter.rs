use std::fmt::Write;

use crate::{Platform, Post};

const FALLBACK_CATEGORY: &str = "General";

/// Renders the full document for `post`: front matter, body, attribution footer.
///
/// `body` is the post body after image rewriting; the post's own body is not read.
pub fn build_post_document(post: &Post, body: &str, platform: Platform) -> String {
    let mut doc = String::with_capacity(body.len() + 512);
    let created = post.created.format("%Y-%m-%d %H:%M:%S%:z");

    let _ = writeln!(&mut doc, "---");
    let _ = writeln!(&mut doc, "title: {}", sanitize_title(&post.title));
    let _ = writeln!(&mut doc, "date: {created}");
    let _ = writeln!(&mut doc, "permlink: /{}/{}", platform.slug(), post.permlink);
    let _ = writeln!(&mut doc, "type: posts");
    let _ = writeln!(&mut doc, "categories:");
    let _ = writeln!(&mut doc, "  - {}", category_for(post.tags()));
    let _ = writeln!(&mut doc, "  - {}", platform.label());
    let _ = writeln!(&mut doc);
    let _ = writeln!(&mut doc, "tags:");
    for tag in post.tags() {
        let _ = writeln!(&mut doc, "  - {tag}");
    }
    let _ = writeln!(&mut doc, "author: {}", post.author);
    let _ = writeln!(&mut doc, "---");

    doc.push_str(body);
    if !body.is_empty() && !body.ends_with('\n') {
        doc.push('\n');
    }

    let link = platform.post_url(&post.author, &post.permlink);
    let _ = writeln!(&mut doc, "---");
    let _ = writeln!(
        &mut doc,
        "<br />**Originally posted on {} network: [{link}]({link})** <br />",
        platform.label()
    );
    doc.push_str("----");
    doc
}

/// Drops the characters that break unquoted YAML titles.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| !matches!(c, ':' | '\'' | '#' | '(' | ')'))
        .collect()
}

/// First tag capitalized, or "General" for untagged posts.
pub fn category_for(tags: &[String]) -> String {
    tags.first()
        .map(|tag| capitalize(tag))
        .unwrap_or_else(|| FALLBACK_CATEGORY.to_string())
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
