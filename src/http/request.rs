/// Represents a parsed HTTP request from a client.
///
/// Only the request line is interpreted. Header lines are kept verbatim and
/// in arrival order so later stages (client identity resolution) can scan
/// them the way the wire delivered them. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Request {
    /// The method token, verbatim (not validated against a known-method list)
    pub method: String,
    /// The request path, verbatim: no URL-decoding, no query-string stripping
    pub path: String,
    /// Every line after the request line, including the empty line(s) left by
    /// the header terminator
    pub header_lines: Vec<String>,
}
