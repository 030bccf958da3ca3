//! Filename truncation with extension preservation
//!
//! Lengths are counted in `char`s so that a cut never lands inside a
//! multi-byte UTF-8 sequence.

/// Default budget for a displayed filename.
pub const DEFAULT_MAX_FILENAME_LENGTH: usize = 30;

const ELLIPSIS: &str = "...";

/// Shorten `filename` to at most `max_length` characters.
///
/// Names within budget are returned unchanged. Longer names keep their
/// extension (`VeryLongName...jsx` style) when the extension leaves room for
/// at least one character of the stem. Otherwise, and for names without a
/// usable extension (no dot, or only a leading dot), the whole name is cut
/// and `...` appended.
pub fn truncate_filename(filename: &str, max_length: usize) -> String {
    if filename.chars().count() <= max_length {
        return filename.to_string();
    }

    let dot = match filename.rfind('.') {
        None | Some(0) => return truncate_whole(filename, max_length),
        Some(idx) => idx,
    };

    let (stem, extension) = filename.split_at(dot);
    let reserved = extension.chars().count() + ELLIPSIS.len();

    match max_length.checked_sub(reserved) {
        Some(available) if available > 0 => {
            format!("{}{}{}", take_chars(stem, available), ELLIPSIS, extension)
        }
        // Extension alone eats the budget; it is not preserved.
        _ => truncate_whole(filename, max_length),
    }
}

fn truncate_whole(filename: &str, max_length: usize) -> String {
    let head = take_chars(filename, max_length.saturating_sub(ELLIPSIS.len()));
    format!("{}{}", head, ELLIPSIS)
}

/// Prefix of `s` holding at most `n` characters.
fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
