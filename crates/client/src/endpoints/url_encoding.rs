//! URL encoding for resource identifiers placed in request paths.
//!
//! Ticket, booking and vendor ids come from user input on the command line
//! and from backend documents; encoding them keeps a stray `/`, `?` or `#`
//! from changing which route the request hits.
//!
//! # Example
//!
//! ```
//! use ticket_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("665f/../admin"), "665f%2F..%2Fadmin");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
///
/// RFC 3986 section 3.3 delimiters plus characters that are commonly
/// rejected by proxies. Percent is included to prevent double decoding.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a single URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
