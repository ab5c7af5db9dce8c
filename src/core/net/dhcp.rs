//! Stateless DHCP responder for the configuration access point.
//!
//! The portal network is a single /24 with one server and a handful of
//! phones; leases are derived from the client MAC, so no allocation table
//! is kept. Only DISCOVER and REQUEST are answered.

use embassy_net::Ipv4Address;

/// BOOTP op codes.
const OP_BOOTREQUEST: u8 = 1;
const OP_BOOTREPLY: u8 = 2;

/// Message-type option values.
pub(crate) const MSG_DISCOVER: u8 = 1;
const MSG_OFFER: u8 = 2;
pub(crate) const MSG_REQUEST: u8 = 3;
const MSG_ACK: u8 = 5;

/// Option codes used in replies.
const OPT_SUBNET_MASK: u8 = 1;
const OPT_ROUTER: u8 = 3;
const OPT_DNS: u8 = 6;
const OPT_LEASE_TIME: u8 = 51;
const OPT_MESSAGE_TYPE: u8 = 53;
const OPT_SERVER_ID: u8 = 54;
const OPT_END: u8 = 255;

const MAGIC_COOKIE: [u8; 4] = [99, 130, 83, 99];

/// BOOTP header plus magic cookie; anything shorter is not DHCP.
const MIN_PACKET_LEN: usize = 240;

const LEASE_SECS: u32 = 3600;
const NETMASK: Ipv4Address = Ipv4Address::new(255, 255, 255, 0);

/// The fields of an incoming request the responder cares about.
#[derive(Debug)]
pub(crate) struct DhcpRequest {
    pub transaction_id: [u8; 4],
    pub client_mac: [u8; 6],
    pub message_type: u8,
}

/// Parse a packet into a [`DhcpRequest`]. `None` for non-BOOTREQUEST
/// packets, short packets, or a missing cookie/message-type option.
pub(crate) fn parse_request(packet: &[u8]) -> Option<DhcpRequest> {
    if packet.len() < MIN_PACKET_LEN || packet[0] != OP_BOOTREQUEST {
        return None;
    }
    if packet[236..240] != MAGIC_COOKIE {
        return None;
    }

    let mut transaction_id = [0u8; 4];
    transaction_id.copy_from_slice(&packet[4..8]);
    let mut client_mac = [0u8; 6];
    client_mac.copy_from_slice(&packet[28..34]);

    let message_type = option_value(&packet[240..], OPT_MESSAGE_TYPE)
        .and_then(|data| data.first().copied())?;

    Some(DhcpRequest {
        transaction_id,
        client_mac,
        message_type,
    })
}

/// Reply type for a request, `None` when the request is ignored.
pub(crate) fn reply_type(message_type: u8) -> Option<u8> {
    match message_type {
        MSG_DISCOVER => Some(MSG_OFFER),
        MSG_REQUEST => Some(MSG_ACK),
        _ => None,
    }
}

/// Derive a stable lease from the client MAC: hosts .16 through .115 of the
/// portal subnet, outside the server's own address.
pub(crate) fn lease_for(server: Ipv4Address, mac: &[u8; 6]) -> Ipv4Address {
    let [a, b, c, _] = server.octets();
    Ipv4Address::new(a, b, c, 16 + mac[5] % 100)
}

/// Encode an OFFER or ACK into `buf`, returning the packet length.
pub(crate) fn encode_reply(
    buf: &mut [u8],
    request: &DhcpRequest,
    server: Ipv4Address,
    lease: Ipv4Address,
    reply: u8,
) -> usize {
    buf.fill(0);

    buf[0] = OP_BOOTREPLY;
    buf[1] = 1; // htype: Ethernet
    buf[2] = 6; // hlen
    buf[4..8].copy_from_slice(&request.transaction_id);
    buf[10] = 0x80; // broadcast flag
    buf[16..20].copy_from_slice(&lease.octets()); // yiaddr
    buf[20..24].copy_from_slice(&server.octets()); // siaddr
    buf[28..34].copy_from_slice(&request.client_mac);
    buf[236..240].copy_from_slice(&MAGIC_COOKIE);

    let mut at = 240;
    at = put_option(buf, at, OPT_MESSAGE_TYPE, &[reply]);
    at = put_option(buf, at, OPT_SERVER_ID, &server.octets());
    at = put_option(buf, at, OPT_LEASE_TIME, &LEASE_SECS.to_be_bytes());
    at = put_option(buf, at, OPT_SUBNET_MASK, &NETMASK.octets());
    at = put_option(buf, at, OPT_ROUTER, &server.octets());
    // Point DNS at the portal so every lookup lands on the config page.
    at = put_option(buf, at, OPT_DNS, &server.octets());
    buf[at] = OPT_END;
    at + 1
}

fn put_option(buf: &mut [u8], at: usize, code: u8, data: &[u8]) -> usize {
    buf[at] = code;
    buf[at + 1] = data.len() as u8;
    buf[at + 2..at + 2 + data.len()].copy_from_slice(data);
    at + 2 + data.len()
}

/// Walk the options section (after the cookie) looking for one code.
fn option_value(options: &[u8], wanted: u8) -> Option<&[u8]> {
    let mut i = 0;
    while i < options.len() {
        match options[i] {
            OPT_END => return None,
            0 => i += 1, // padding
            code => {
                let len = *options.get(i + 1)? as usize;
                let data = options.get(i + 2..i + 2 + len)?;
                if code == wanted {
                    return Some(data);
                }
                i += 2 + len;
            }
        }
    }
    None
}
