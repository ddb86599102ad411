//! Path segment encoding for GitHub API URLs.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// The component percent-encode set, matching JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// [`COMPONENT`] with `/` left alone, for multi-segment file paths.
const COMPONENT_IGNORING_SLASH: &AsciiSet = &COMPONENT.remove(b'/');

/// Encodes a single path segment such as an owner or repository name.
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, COMPONENT).to_string()
}

/// Encodes a repository file path, keeping its `/` separators.
pub fn encode_path(path: &str) -> String {
    utf8_percent_encode(path, COMPONENT_IGNORING_SLASH).to_string()
}
