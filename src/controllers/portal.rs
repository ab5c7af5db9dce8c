//! Configuration portal HTTP controller.
//!
//! Serves the credentials form, accepts submissions, and exposes a small
//! status endpoint. Reachable on the access-point address while
//! provisioning and on the station address once connected.

use embassy_net::Stack;
use esp_println::println;
use heapless::String;
use serde::Serialize;
use skimap_portal::CredentialsForm;

use crate::config;
use crate::core::net::http::{
    ContentType, HttpConnection, HttpHandler, HttpMethod, HttpResult, ResponseHeaders,
};
use crate::infrastructure::drivers::link_state;
use crate::infrastructure::types::DeviceState;

const PORTAL_PAGE: &str = "<!DOCTYPE html><html><head><title>Skimap setup</title></head><body>\
<h1>Configure WiFi and Select Ski Resort</h1>\
<form action=\"/save\" method=\"POST\">\
SSID: <input type=\"text\" name=\"ssid\"><br>\
Password: <input type=\"password\" name=\"password\"><br>\
<input type=\"submit\" value=\"Save\"></form></body></html>";

const SAVED_PAGE: &str = "<h1>Configuration Saved! Rebooting...</h1>";

#[derive(Serialize)]
struct SystemStatus {
    version: String<32>,
    device_id: u32,
    mac_address: [u8; 6],
    ssid: String<32>,
    link: &'static str,
}

pub struct PortalHttpController {
    state: &'static DeviceState,
    sta_stack: Stack<'static>,
}

impl PortalHttpController {
    pub fn new(state: &'static DeviceState, sta_stack: Stack<'static>) -> Self {
        Self { state, sta_stack }
    }

    async fn handle_get_form(&self, conn: &mut HttpConnection<'_>) -> HttpResult {
        println!("portal: serving configuration page");
        conn.respond(ContentType::TextHtml, PORTAL_PAGE.as_bytes())
            .await
    }

    /// Persist whatever the form carries (missing fields arrive as empty
    /// strings), confirm, then hand off to the reboot actor.
    async fn handle_save(&self, conn: &mut HttpConnection<'_>) -> HttpResult {
        let body = conn.read_body().await?;
        let form = CredentialsForm::parse(body);

        if self
            .state
            .settings
            .save_credentials(&form.ssid, &form.password)
            .is_err()
        {
            println!("portal: failed to persist credentials");
        }
        println!("portal: saved network '{}'", form.ssid);

        conn.respond(ContentType::TextHtml, SAVED_PAGE.as_bytes())
            .await?;
        self.state.request_reboot();
        Ok(())
    }

    async fn handle_status(&self, conn: &mut HttpConnection<'_>) -> HttpResult {
        let record = self.state.settings.load_or_default();
        let mut version = String::new();
        let _ = version.push_str(config::BUILD_VERSION);

        let status = SystemStatus {
            version,
            device_id: config::hardware_id(),
            mac_address: config::mac_address(),
            ssid: record.ssid(),
            link: link_state(self.sta_stack).as_str(),
        };
        conn.respond_json(&status).await
    }

    async fn serve_404(&self, conn: &mut HttpConnection<'_>) -> HttpResult {
        let headers = ResponseHeaders::not_found().with_content(ContentType::TextPlain, 9);
        conn.respond_with(&headers, b"Not Found").await
    }
}

impl HttpHandler for PortalHttpController {
    async fn handle_request(&self, conn: &mut HttpConnection<'_>) -> HttpResult {
        match conn.route() {
            (HttpMethod::Get, "/") => self.handle_get_form(conn).await,
            (HttpMethod::Post, "/save") => self.handle_save(conn).await,
            (HttpMethod::Get, "/status") => self.handle_status(conn).await,
            _ => self.serve_404(conn).await,
        }
    }
}
