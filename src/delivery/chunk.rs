//! Message chunking
//!
//! Chat messages have a hard length cap. Long reports are split into
//! consecutive pieces that concatenate back to the original text. Splits
//! prefer line boundaries, so bold headers (always on their own line) stay
//! whole. A line longer than the cap is cut before any tag, entity or element
//! it would leave open.

/// Maximum length of one Telegram message, in characters
pub const MESSAGE_LIMIT: usize = 4096;

/// Split `text` into chunks of at most `limit` characters
pub fn chunk_message(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut chunks = Vec::new();
    let mut rest = text;

    // `nth(limit)` exists only while more than `limit` characters remain.
    while let Some((hard, _)) = rest.char_indices().nth(limit) {
        let window = &rest[..hard];
        let cut = match window.rfind('\n') {
            Some(newline) => newline + 1,
            None => markup_safe_cut(window),
        };
        chunks.push(rest[..cut].to_string());
        rest = &rest[cut..];
    }

    if !rest.is_empty() {
        chunks.push(rest.to_string());
    }
    chunks
}

/// Byte offset to cut a line at without leaving a tag, entity or element open
fn markup_safe_cut(window: &str) -> usize {
    let mut cut = window.len();
    for (open, close) in [('<', '>'), ('&', ';')] {
        if let Some(start) = window.rfind(open) {
            let closed = window.rfind(close).is_some_and(|end| end > start);
            if !closed && start > 0 {
                cut = cut.min(start);
            }
        }
    }

    // An element opened at the very start cannot be kept whole; cut as late as possible.
    match first_unclosed_element(&window[..cut]) {
        Some(start) if start > 0 => start,
        _ => cut,
    }
}

/// Byte offset of the outermost element opened but not closed in `text`
fn first_unclosed_element(text: &str) -> Option<usize> {
    let mut open = Vec::new();
    let mut pos = 0;

    while let Some(rel) = text[pos..].find('<') {
        let start = pos + rel;
        let Some(len) = text[start..].find('>') else {
            break;
        };
        let tag = &text[start + 1..start + len];
        if tag.starts_with('/') {
            open.pop();
        } else if !tag.ends_with('/') {
            open.push(start);
        }
        pos = start + len + 1;
    }

    open.first().copied()
}
