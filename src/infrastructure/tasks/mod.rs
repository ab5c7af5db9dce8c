mod dhcp_server;
mod http_server;
mod led;
mod network;
mod reboot;

pub use dhcp_server::dhcp_server_task;
pub use http_server::http_server_task;
pub use led::{led_command_sender, led_task};
pub use network::{ap_net_runner_task, net_supervisor_task, sta_net_runner_task};
pub use reboot::reboot_task;
