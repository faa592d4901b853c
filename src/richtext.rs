//! Plain-text statistics for rich-text article bodies.
//!
//! The CMS stores knowledge articles as markdown-flavored rich text; word
//! count and read time are computed here before upload so the remote entries
//! carry them from the start.
pub const WORDS_PER_MINUTE: usize = 200;

/// Strip markdown markers, keeping link labels and dropping link targets.
pub fn plain_text(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '*' | '_' | '`' | '#' | '>' => {}
            '!' if chars.peek() == Some(&'[') => {}
            '[' => {
                for inner in chars.by_ref() {
                    if inner == ']' {
                        break;
                    }
                    out.push(inner);
                }
                if chars.peek() == Some(&'(') {
                    for inner in chars.by_ref() {
                        if inner == ')' {
                            break;
                        }
                    }
                }
            }
            _ => out.push(ch),
        }
    }
    out
}

pub fn word_count(body: &str) -> usize {
    plain_text(body).split_whitespace().count()
}

/// Reading time in minutes, rounded up, never below one minute.
pub fn read_time_minutes(body: &str) -> u64 {
    let words = word_count(body);
    (words.div_ceil(WORDS_PER_MINUTE)).max(1) as u64
}
