use core::fmt::Write;

use super::HttpError;

fn reason_phrase(code: u16) -> &'static str {
    match code {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        413 => "Request Entity Too Large",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// Response body media type.
#[derive(Debug, Clone, Copy)]
pub enum ContentType {
    TextHtml,
    TextPlain,
    Json,
}

impl ContentType {
    fn as_str(self) -> &'static str {
        match self {
            ContentType::TextHtml => "text/html; charset=utf-8",
            ContentType::TextPlain => "text/plain; charset=utf-8",
            ContentType::Json => "application/json",
        }
    }
}

/// Response status line plus the few headers this server emits. Every
/// response carries `Connection: close`.
pub struct ResponseHeaders {
    status: u16,
    content: Option<(ContentType, usize)>,
}

impl ResponseHeaders {
    pub const fn from_code(status: u16) -> Self {
        Self {
            status,
            content: None,
        }
    }

    pub const fn success() -> Self {
        Self::from_code(200)
    }

    pub const fn not_found() -> Self {
        Self::from_code(404)
    }

    pub const fn bad_request() -> Self {
        Self::from_code(400)
    }

    #[must_use]
    pub const fn with_content(mut self, content_type: ContentType, length: usize) -> Self {
        self.content = Some((content_type, length));
        self
    }

    /// Render the header block, including the blank separator line.
    pub(super) fn render(&self, out: &mut impl Write) -> Result<(), HttpError> {
        write!(
            out,
            "HTTP/1.1 {} {}\r\n",
            self.status,
            reason_phrase(self.status)
        )?;
        if let Some((content_type, length)) = self.content {
            write!(out, "Content-Type: {}\r\n", content_type.as_str())?;
            write!(out, "Content-Length: {}\r\n", length)?;
        }
        write!(out, "Connection: close\r\n\r\n")?;
        Ok(())
    }
}

/// Request methods the portal understands. Anything else fails the request
/// parse and drops the connection.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub(super) fn parse(token: &str) -> Option<Self> {
        match token {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            _ => None,
        }
    }
}

/// Split the request line off a header block: method, path, trailing
/// header lines.
pub(super) fn parse_request_line(heading: &str) -> Option<(HttpMethod, &str, &str)> {
    let line_end = heading.find("\r\n")?;
    let mut parts = heading[..line_end].split_whitespace();
    let method = parts.next().and_then(HttpMethod::parse)?;
    let path = parts.next()?;
    Some((method, path, &heading[line_end + 2..]))
}

/// Scan header lines for `Content-Length`. Absent or unparsable means a
/// body-less request.
pub(super) fn content_length_of(header_lines: &str) -> usize {
    const NAME: &str = "content-length:";
    for line in header_lines.lines() {
        let Some((name, value)) = line.split_at_checked(NAME.len()) else {
            continue;
        };
        if name.eq_ignore_ascii_case(NAME) {
            if let Ok(length) = value.trim().parse::<usize>() {
                return length;
            }
        }
    }
    0
}
