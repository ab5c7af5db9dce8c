use embassy_net::{Stack, tcp::TcpSocket};
use embassy_time::Duration;
use esp_println::println;

use super::HttpResult;
use super::connection::HttpConnection;

const SOCKET_TIMEOUT_SECS: u64 = 30;

/// Request dispatcher implemented by the portal controller.
pub trait HttpHandler {
    async fn handle_request(&self, conn: &mut HttpConnection<'_>) -> HttpResult;
}

/// Accept loop: one socket, one request at a time, sequential dispatch.
pub struct HttpServer<'a, H: HttpHandler> {
    handler: &'a H,
    port: u16,
}

impl<'a, H: HttpHandler> HttpServer<'a, H> {
    pub fn new(handler: &'a H, port: u16) -> Self {
        Self { handler, port }
    }

    pub async fn listen_and_serve(
        &self,
        stack: Stack<'static>,
        rx_buffer: &mut [u8],
        tx_buffer: &mut [u8],
    ) -> ! {
        loop {
            let mut socket = TcpSocket::new(stack, rx_buffer, tx_buffer);
            socket.set_timeout(Some(Duration::from_secs(SOCKET_TIMEOUT_SECS)));

            if socket.accept(self.port).await.is_err() {
                continue;
            }

            match HttpConnection::accept(socket).await {
                Ok(mut conn) => {
                    if let Err(e) = self.handler.handle_request(&mut conn).await {
                        println!("http: request error: {:?}", e);
                    }
                    conn.finish().await;
                }
                Err(e) => {
                    println!("http: bad request: {:?}", e);
                }
            }
        }
    }
}
