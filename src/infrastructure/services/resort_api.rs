//! Resort status polling.
//!
//! Optional integration point: fetches the configured resort's conditions
//! and blanks the strip before the next render. Nothing schedules this yet.
//
// TODO: wire into the runtime loop once the resort API endpoint is deployed
// (config::RESORT_API_HOST is still empty).

use core::fmt::Write as _;

use embassy_net::dns::DnsQueryType;
use embassy_net::{Stack, tcp::TcpSocket};
use embassy_time::Duration;
use embedded_io_async::Write as _;
use esp_println::println;
use heapless::String;

use crate::config;
use crate::infrastructure::types::{DeviceState, LedCommand};

const HTTP_PORT: u16 = 80;
const RESPONSE_BUFFER_SIZE: usize = 1024;

#[derive(Debug)]
pub enum ApiError {
    /// No endpoint configured.
    NotConfigured,
    Dns,
    Connect,
    Io,
    /// Anything but a 200 response.
    Status,
}

/// Fetch the resort conditions once over plain HTTP.
pub async fn fetch_resort_status(
    stack: Stack<'static>,
    state: &DeviceState,
    resort: &str,
) -> Result<(), ApiError> {
    if config::RESORT_API_HOST.is_empty() {
        return Err(ApiError::NotConfigured);
    }

    let addresses = stack
        .dns_query(config::RESORT_API_HOST, DnsQueryType::A)
        .await
        .map_err(|_| ApiError::Dns)?;
    let Some(address) = addresses.first().copied() else {
        return Err(ApiError::Dns);
    };

    let mut rx_buffer = [0u8; RESPONSE_BUFFER_SIZE];
    let mut tx_buffer = [0u8; 512];
    let mut socket = TcpSocket::new(stack, &mut rx_buffer, &mut tx_buffer);
    socket.set_timeout(Some(Duration::from_secs(10)));
    socket
        .connect((address, HTTP_PORT))
        .await
        .map_err(|_| ApiError::Connect)?;

    let mut request = String::<256>::new();
    write!(
        request,
        "GET {}{} HTTP/1.1\r\nHost: {}\r\nConnection: close\r\n\r\n",
        config::RESORT_API_PATH,
        resort,
        config::RESORT_API_HOST
    )
    .map_err(|_| ApiError::Io)?;
    socket
        .write_all(request.as_bytes())
        .await
        .map_err(|_| ApiError::Io)?;
    socket.flush().await.map_err(|_| ApiError::Io)?;

    let mut response = [0u8; RESPONSE_BUFFER_SIZE];
    let mut filled = 0;
    loop {
        match socket.read(&mut response[filled..]).await {
            Ok(0) => break,
            Ok(n) => {
                filled += n;
                if filled == response.len() {
                    break;
                }
            }
            Err(_) => return Err(ApiError::Io),
        }
    }

    let head = core::str::from_utf8(&response[..filled]).unwrap_or("");
    if !head.starts_with("HTTP/1.1 200") {
        return Err(ApiError::Status);
    }
    println!("resort_api: response received ({} bytes)", filled);

    // Blank the strip; the caller decides what to paint from the payload.
    state.led.send(LedCommand::Clear).await;
    Ok(())
}
