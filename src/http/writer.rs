use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes a response into its exact wire form.
///
/// Header order is fixed (Content-Type, then Connection) and no
/// Content-Length is emitted — the unconditional close delimits the body.
///
/// Note: public so integration tests can assert exact response bytes.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    let head = format!(
        "{} {}\r\nContent-Type: {}\r\nConnection: close\r\n\r\n",
        HTTP_VERSION,
        resp.status.status_line(),
        resp.content_type,
    );
    buf.extend_from_slice(head.as_bytes());
    buf.extend_from_slice(&resp.body);

    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> anyhow::Result<()> {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}
