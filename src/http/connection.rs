use std::net::SocketAddr;
use std::time::Duration;

use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::http::identity::resolve_client_ip;
use crate::http::parser::{ParseError, parse_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::routes::RouteTable;

pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
    routes: RouteTable,
    buffer: BytesMut,
    read_timeout: Option<Duration>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(
        stream: TcpStream,
        peer: SocketAddr,
        routes: RouteTable,
        read_timeout: Option<Duration>,
    ) -> Self {
        Self {
            stream,
            peer,
            routes,
            buffer: BytesMut::with_capacity(4096),
            read_timeout,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        Some(req) => {
                            self.state = ConnectionState::Processing(req);
                        }
                        None => {
                            // Disconnect or malformed request before a
                            // complete one arrived: discard, no response
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    let client_ip = resolve_client_ip(&req.header_lines, self.peer);

                    let response = match self.routes.lookup(&req.path).await {
                        Some(route) => Response::ok(&route),
                        None => Response::not_found(),
                    };

                    tracing::info!(
                        "{} {} {} {}",
                        client_ip,
                        req.method,
                        req.path,
                        response.status.status_line()
                    );

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    // Always close: the response carries Connection: close
                    // and the handler never honors keep-alive
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until the buffer holds the header terminator, then parses.
    ///
    /// Returns `None` when no response is owed: the peer disconnected before
    /// the terminator, the request line was malformed, or the optional read
    /// timeout expired.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            // Terminator check after every append
            match parse_request(&self.buffer) {
                Ok((request, _consumed)) => {
                    // Trailing bytes past the terminator stay unread: one
                    // request per connection, no pipelining
                    return Ok(Some(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data
                }

                Err(ParseError::Malformed) => {
                    tracing::debug!("Dropping malformed request from {}", self.peer);
                    return Ok(None);
                }
            }

            let n = match self.read_timeout {
                Some(limit) => match timeout(limit, self.stream.read_buf(&mut self.buffer)).await {
                    Ok(result) => result?,
                    Err(_) => {
                        tracing::debug!("Read timeout from {}", self.peer);
                        return Ok(None);
                    }
                },
                None => self.stream.read_buf(&mut self.buffer).await?,
            };

            if n == 0 {
                // Client closed before completing the request
                return Ok(None);
            }
        }
    }
}
