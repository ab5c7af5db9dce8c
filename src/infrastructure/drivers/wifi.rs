//! Wi-Fi radio bring-up.
//!
//! One controller, two network stacks: the station interface runs DHCP
//! against the configured network, the access-point interface carries the
//! static portal subnet. Only one mode is ever configured on the controller
//! at a time; the supervisor task decides which.

use embassy_net::{
    DhcpConfig, Ipv4Cidr, Runner, Stack, StackResources, StaticConfigV4,
};
use esp_hal::peripherals::WIFI;
use esp_radio::wifi::{Config, WifiController, WifiDevice, WifiStaState};
use skimap_portal::LinkState;
use static_cell::make_static;

use super::random::net_stack_seed;
use crate::config;

const MAX_SOCKETS: usize = 6;

/// Everything `init_wifi` hands back to `main`.
pub struct WifiParts {
    pub controller: WifiController<'static>,
    pub sta_stack: Stack<'static>,
    pub ap_stack: Stack<'static>,
    pub sta_runner: Runner<'static, WifiDevice<'static>>,
    pub ap_runner: Runner<'static, WifiDevice<'static>>,
}

/// Initialise the radio and both network stacks.
pub fn init_wifi(wifi_device: WIFI<'static>) -> WifiParts {
    let esp_radio_ctrl = &*make_static!(esp_radio::init().unwrap());
    let (controller, interfaces) =
        esp_radio::wifi::new(esp_radio_ctrl, wifi_device, Config::default()).unwrap();

    // Station side: DHCP with our hostname.
    let mut dhcp_config = DhcpConfig::default();
    dhcp_config.hostname = Some(heapless::String::try_from(config::HOSTNAME).unwrap());
    let sta_config = embassy_net::Config::dhcpv4(dhcp_config);
    let sta_resources = make_static!(StackResources::<MAX_SOCKETS>::new());
    let (sta_stack, sta_runner) =
        embassy_net::new(interfaces.sta, sta_config, sta_resources, net_stack_seed());

    // Access-point side: fixed portal addressing.
    let ap_config = embassy_net::Config::ipv4_static(StaticConfigV4 {
        address: Ipv4Cidr::new(config::AP_ADDRESS, config::AP_PREFIX_LEN),
        gateway: Some(config::AP_ADDRESS),
        dns_servers: heapless::Vec::default(),
    });
    let ap_resources = make_static!(StackResources::<MAX_SOCKETS>::new());
    let (ap_stack, ap_runner) =
        embassy_net::new(interfaces.ap, ap_config, ap_resources, net_stack_seed());

    WifiParts {
        controller,
        sta_stack,
        ap_stack,
        sta_runner,
        ap_runner,
    }
}

/// Derive the transient station link state from radio and netstack.
pub fn link_state(sta_stack: Stack<'static>) -> LinkState {
    if esp_radio::wifi::sta_state() == WifiStaState::Connected {
        if sta_stack.config_v4().is_some() {
            LinkState::Connected
        } else {
            LinkState::Connecting
        }
    } else {
        LinkState::Disconnected
    }
}
