//! Portal HTTP listener task.
//!
//! Spawned once per network interface (station and access point) so the
//! configuration page stays reachable in either mode; whichever interface
//! is down simply never accepts a connection.

use embassy_net::Stack;

use crate::controllers::PortalHttpController;
use crate::core::net::http::HttpServer;

const HTTP_PORT: u16 = 80;
const RX_BUFFER_SIZE: usize = 2048;
const TX_BUFFER_SIZE: usize = 2048;

#[embassy_executor::task(pool_size = 2)]
pub async fn http_server_task(stack: Stack<'static>, handler: &'static PortalHttpController) {
    let server = HttpServer::new(handler, HTTP_PORT);
    let mut rx_buffer = [0u8; RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TX_BUFFER_SIZE];

    server
        .listen_and_serve(stack, &mut rx_buffer, &mut tx_buffer)
        .await
}
