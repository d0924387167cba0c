//! Static asset constants.

/// Landing page for the browser UI.
pub const INDEX_HTML: &str = include_str!("index.html");
