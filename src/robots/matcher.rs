//! Path pattern matching for Allow/Disallow rules
//!
//! `*` matches any run of characters and a trailing `$` anchors the pattern to
//! the end of the path. Every other character is literal.

use std::borrow::Cow;

/// Returns true if `pattern` matches the start of `path` (or all of it, when
/// the pattern ends with `$`)
///
/// # Examples
///
/// ```
/// use crawlscope::robots::pattern_matches;
///
/// assert!(pattern_matches("/private/", "/private/notes"));
/// assert!(pattern_matches("/*.pdf$", "/docs/file.pdf"));
/// assert!(!pattern_matches("/*.pdf$", "/docs/file.pdf?dl=1"));
/// ```
pub fn pattern_matches(pattern: &str, path: &str) -> bool {
    let (pattern, anchored) = match pattern.strip_suffix('$') {
        Some(stripped) => (stripped, true),
        None => (pattern, false),
    };

    let path = path.as_bytes();

    // Sorted, deduplicated set of path offsets reachable after consuming a
    // prefix of the pattern.
    let mut positions = vec![0usize];

    for &byte in pattern.as_bytes() {
        if byte == b'*' {
            let start = positions[0];
            positions = (start..=path.len()).collect();
            continue;
        }

        positions = positions
            .into_iter()
            .filter(|&pos| pos < path.len() && path[pos] == byte)
            .map(|pos| pos + 1)
            .collect();

        if positions.is_empty() {
            return false;
        }
    }

    if anchored {
        positions.last() == Some(&path.len())
    } else {
        true
    }
}

/// Percent-encodes a rule pattern the way the URL parser encodes request
/// paths, so `Disallow: /café` compares against `/caf%C3%A9`
///
/// Existing `%XX` escapes are left alone.
pub(crate) fn encode_pattern(pattern: &str) -> Cow<'_, str> {
    let mut in_query = false;
    let needs_escape = |byte: u8, in_query: bool| {
        !byte.is_ascii()
            || matches!(byte, b' ' | b'"' | b'<' | b'>')
            || (!in_query && matches!(byte, b'`' | b'{' | b'}'))
            || (in_query && byte == b'\'')
    };

    if !pattern.bytes().any(|byte| needs_escape(byte, true) || needs_escape(byte, false)) {
        return Cow::Borrowed(pattern);
    }

    let mut encoded = String::with_capacity(pattern.len() * 3);
    for byte in pattern.bytes() {
        if byte == b'?' {
            in_query = true;
        }
        if needs_escape(byte, in_query) {
            encoded.push_str(&format!("%{:02X}", byte));
        } else {
            encoded.push(char::from(byte));
        }
    }
    Cow::Owned(encoded)
}
