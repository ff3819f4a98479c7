use chrono::NaiveDate;

/// Deterministic document name: `{YYYY-MM-DD}_{permlink}.md`.
///
/// Permlinks are slugs on both chains, but the name is still made safe for
/// any filesystem since it comes from remote data.
pub fn document_filename(date: NaiveDate, permlink: &str) -> String {
    format!("{}_{}.md", date.format("%Y-%m-%d"), sanitize_permlink(permlink))
}

fn sanitize_permlink(input: &str) -> String {
    let mut cleaned = String::with_capacity(input.len());
    let mut prev_underscore = false;
    for c in input.chars() {
        let c = if is_forbidden(c) { '_' } else { c };
        if c == '_' && prev_underscore {
            continue;
        }
        prev_underscore = c == '_';
        cleaned.push(c);
    }
    let trimmed = cleaned.trim_matches(&['_', ' ', '.'][..]);
    if trimmed.is_empty() {
        "untitled".to_string()
    } else {
        trimmed.to_string()
    }
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}
