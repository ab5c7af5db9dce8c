use embassy_net::tcp::TcpSocket;
use embedded_io_async::Write as _;
use heapless::{String, Vec};
use serde::Serialize;

use super::headers::{
    ContentType, HttpMethod, ResponseHeaders, content_length_of, parse_request_line,
};
use super::{HttpError, HttpResult};

const HEADING_BUFFER_SIZE: usize = 512;
const BODY_BUFFER_SIZE: usize = 512;
const RESPONSE_HEADER_SIZE: usize = 160;
const PATH_MAX: usize = 64;

/// One accepted request: parsed request line, socket, and whatever body
/// bytes arrived in the same segments as the heading.
pub struct HttpConnection<'a> {
    pub method: HttpMethod,
    path: String<PATH_MAX>,
    socket: TcpSocket<'a>,
    content_length: usize,
    body: Vec<u8, BODY_BUFFER_SIZE>,
}

impl<'a> HttpConnection<'a> {
    /// Read and parse the request heading off a freshly accepted socket.
    pub(super) async fn accept(mut socket: TcpSocket<'a>) -> Result<Self, HttpError> {
        let mut heading = [0u8; HEADING_BUFFER_SIZE];
        let (heading_end, total_read) = read_heading(&mut heading, &mut socket).await?;
        if heading_end == 0 {
            return Err(HttpError::Closed);
        }

        let heading_str =
            core::str::from_utf8(&heading[..heading_end]).map_err(|_| HttpError::Parse)?;
        let (method, raw_path, header_lines) =
            parse_request_line(heading_str).ok_or(HttpError::Parse)?;
        let content_length = content_length_of(header_lines);

        // Paths longer than the buffer cannot match any route; leave them
        // empty so they fall through to the 404 handler.
        let mut path = String::new();
        let _ = path.push_str(raw_path);

        // Body bytes that rode along with the heading.
        let mut body = Vec::new();
        let trailer = &heading[heading_end..total_read];
        let keep = trailer.len().min(content_length).min(BODY_BUFFER_SIZE);
        body.extend_from_slice(&trailer[..keep]).ok();

        Ok(Self {
            method,
            path,
            socket,
            content_length,
            body,
        })
    }

    /// Request method and path, for routing.
    pub fn route(&self) -> (HttpMethod, &str) {
        (self.method, self.path.as_str())
    }

    /// Read the request body up to `Content-Length` (capped at the body
    /// buffer; a captive-portal form never comes close).
    pub async fn read_body(&mut self) -> Result<&[u8], HttpError> {
        let wanted = self.content_length.min(BODY_BUFFER_SIZE);
        let mut chunk = [0u8; 128];
        while self.body.len() < wanted {
            let n = self.socket.read(&mut chunk).await?;
            if n == 0 {
                break;
            }
            let room = wanted - self.body.len();
            self.body.extend_from_slice(&chunk[..n.min(room)]).ok();
        }
        Ok(self.body.as_slice())
    }

    /// Write a complete response: status, content headers, body.
    pub async fn respond(&mut self, content_type: ContentType, body: &[u8]) -> HttpResult {
        let headers = ResponseHeaders::success().with_content(content_type, body.len());
        self.respond_with(&headers, body).await
    }

    /// Write a response with explicit headers.
    pub async fn respond_with(&mut self, headers: &ResponseHeaders, body: &[u8]) -> HttpResult {
        let mut head = String::<RESPONSE_HEADER_SIZE>::new();
        headers.render(&mut head)?;
        self.socket.write_all(head.as_bytes()).await?;
        if !body.is_empty() {
            self.socket.write_all(body).await?;
        }
        self.socket.flush().await?;
        Ok(())
    }

    /// Serialize a JSON body and send it.
    pub async fn respond_json<T: Serialize>(&mut self, data: &T) -> HttpResult {
        let mut body = [0u8; BODY_BUFFER_SIZE];
        let n = serde_json_core::to_slice(data, &mut body).map_err(|_| HttpError::Format)?;
        self.respond(ContentType::Json, &body[..n]).await
    }

    /// Drain and close the socket so the peer sees a clean FIN.
    pub(super) async fn finish(mut self) {
        self.socket.close();
        let _ = self.socket.flush().await;
    }
}

/// Read until the `\r\n\r\n` heading terminator. Returns the offset just
/// past the terminator and the total bytes read; `(0, 0)` when the peer
/// closes early or the heading overflows the buffer.
async fn read_heading(
    buf: &mut [u8],
    socket: &mut TcpSocket<'_>,
) -> Result<(usize, usize), HttpError> {
    let mut filled = 0;
    loop {
        let n = socket.read(&mut buf[filled..]).await?;
        if n == 0 {
            return Ok((0, 0));
        }
        filled += n;
        if let Some(pos) = buf[..filled].windows(4).position(|w| w == b"\r\n\r\n") {
            return Ok((pos + 4, filled));
        }
        if filled >= buf.len() {
            return Ok((0, 0));
        }
    }
}
