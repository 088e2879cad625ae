use crate::http::request::Request;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The header terminator has not arrived yet; read more bytes.
    Incomplete,
    /// Terminator seen but the request line is unusable. The caller drops the
    /// connection silently, no response is owed.
    Malformed,
}

/// Parses the accumulated buffer once it contains the `\r\n\r\n` terminator.
///
/// Returns the request plus the number of bytes consumed (up to and including
/// the terminator). Bytes past the terminator are ignored: one request per
/// connection, no pipelining.
pub fn parse_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    let headers_end = find_terminator(buf).ok_or(ParseError::Incomplete)?;
    let consumed = headers_end + 4;

    // Lossy decode: the original server tolerates arbitrary bytes in headers
    let text = String::from_utf8_lossy(&buf[..consumed]);

    let mut lines = text.split("\r\n");

    let request_line = lines.next().ok_or(ParseError::Malformed)?;

    // Split on the single space character, not general whitespace: the path
    // token is whatever sits between the first and second space
    let mut parts = request_line.split(' ');
    let method = parts.next().ok_or(ParseError::Malformed)?;
    let path = parts.next().ok_or(ParseError::Malformed)?;

    let request = Request {
        method: method.to_string(),
        path: path.to_string(),
        header_lines: lines.map(|line| line.to_string()).collect(),
    };

    Ok((request, consumed))
}

fn find_terminator(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
