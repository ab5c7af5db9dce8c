//! DHCP server task for the portal subnet.

use embassy_net::{
    Ipv4Address, Stack,
    udp::{PacketMetadata, UdpSocket},
};
use esp_println::println;

use crate::config;
use crate::core::net::dhcp::{encode_reply, lease_for, parse_request, reply_type};

const DHCP_SERVER_PORT: u16 = 67;
const DHCP_CLIENT_PORT: u16 = 68;

#[embassy_executor::task]
pub async fn dhcp_server_task(ap_stack: Stack<'static>) {
    let mut rx_meta = [PacketMetadata::EMPTY; 8];
    let mut rx_buffer = [0u8; 1024];
    let mut tx_meta = [PacketMetadata::EMPTY; 8];
    let mut tx_buffer = [0u8; 1024];

    let mut socket = UdpSocket::new(
        ap_stack,
        &mut rx_meta,
        &mut rx_buffer,
        &mut tx_meta,
        &mut tx_buffer,
    );

    if let Err(e) = socket.bind(DHCP_SERVER_PORT) {
        println!("dhcp: failed to bind port {}: {:?}", DHCP_SERVER_PORT, e);
        return;
    }

    let mut packet = [0u8; 576];

    loop {
        match socket.recv_from(&mut packet).await {
            Ok((len, _remote)) => {
                let Some(request) = parse_request(&packet[..len]) else {
                    continue;
                };
                let Some(reply) = reply_type(request.message_type) else {
                    continue;
                };

                let lease = lease_for(config::AP_ADDRESS, &request.client_mac);
                let reply_len =
                    encode_reply(&mut packet, &request, config::AP_ADDRESS, lease, reply);

                let dest = (Ipv4Address::BROADCAST, DHCP_CLIENT_PORT);
                if let Err(e) = socket.send_to(&packet[..reply_len], dest).await {
                    println!("dhcp: send error: {:?}", e);
                }
            }
            Err(e) => {
                println!("dhcp: recv error: {:?}", e);
            }
        }
    }
}
