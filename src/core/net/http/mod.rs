//! Minimal HTTP/1.1 plumbing over `embassy-net` TCP sockets.
//!
//! One connection, one request, one response; every response closes the
//! socket. Enough surface for the configuration portal, nothing more.

mod connection;
mod headers;
mod server;

pub use connection::HttpConnection;
pub use headers::{ContentType, HttpMethod, ResponseHeaders};
pub use server::{HttpHandler, HttpServer};

#[derive(Debug)]
pub enum HttpError {
    /// Socket-level failure.
    Tcp(embassy_net::tcp::Error),
    /// Request line or headers could not be parsed.
    Parse,
    /// Peer closed before a full request arrived.
    Closed,
    /// Response formatting overflowed its buffer.
    Format,
}

pub type HttpResult = Result<(), HttpError>;

impl From<embassy_net::tcp::Error> for HttpError {
    fn from(err: embassy_net::tcp::Error) -> Self {
        HttpError::Tcp(err)
    }
}

impl From<core::fmt::Error> for HttpError {
    fn from(_: core::fmt::Error) -> Self {
        HttpError::Format
    }
}
