use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::http::parser::{ParseError, parse_http_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::middleware::Handler;
use crate::server::Router;

const BUFFER_SIZE: usize = 4096;

/// Upper bound on buffered, not yet parseable request bytes.
const MAX_PENDING: usize = 64 * 1024;

pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    router: Arc<Router>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter, bool), // bool = keep_alive?
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, router: Arc<Router>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(BUFFER_SIZE),
            router,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => match self.read_request().await {
                    Ok(Some(req)) => {
                        self.state = ConnectionState::Processing(req);
                    }
                    Ok(None) => {
                        self.state = ConnectionState::Closed;
                    }
                    Err(e) => {
                        // Answer once, then drop the connection
                        tracing::warn!(error = %e, "Rejecting malformed request");
                        let writer = ResponseWriter::new(&Response::bad_request());
                        self.state = ConnectionState::Writing(writer, false);
                    }
                },

                ConnectionState::Processing(req) => {
                    let response = self.router.handle(req);
                    let keep_alive = req.keep_alive();

                    tracing::info!(
                        method = ?req.method,
                        path = %req.path,
                        status = response.status.as_u16(),
                        "Handled request"
                    );

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer, keep_alive);
                }

                ConnectionState::Writing(writer, keep_alive) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    if *keep_alive {
                        self.state = ConnectionState::Reading; // go back for next request
                    } else {
                        self.state = ConnectionState::Closed;
                    }
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            // Try parsing whatever we already have
            match parse_http_request(&self.buffer) {
                Ok((request, consumed)) => {
                    let _ = self.buffer.split_to(consumed);
                    return Ok(Some(request));
                }

                Err(ParseError::Incomplete) => {
                    if self.buffer.len() > MAX_PENDING {
                        anyhow::bail!("Request headers too large");
                    }
                }

                Err(e) => {
                    return Err(anyhow::anyhow!("HTTP parse error: {}", e));
                }
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                // Client closed connection
                return Ok(None);
            }
        }
    }
}
