//! Persisted `wifi-config` settings record.
//!
//! The record is a fixed-layout [`bytemuck::Pod`] struct so it can be copied
//! to and from a flash block without a serializer. On flash it is framed
//! with a little-endian magic header; a missing or foreign header reads back
//! as "no settings stored".

use core::str::FromStr;

use bytemuck::{Pod, Zeroable};
use heapless::String;

/// Magic word marking a valid settings image.
const MAGIC_HEADER: u16 = u16::from_le_bytes(*b"SK");
/// Bumped on any layout change; older images read back as "no settings".
const LAYOUT_VERSION: u16 = 1;
/// Magic word + layout version. Keeps the image length word-aligned for
/// flash writes.
const HEADER_SIZE: usize = 4;

/// Maximum network name length (IEEE 802.11 SSID limit).
pub const SSID_MAX: usize = 32;
/// Maximum passphrase length (WPA2 limit).
pub const PASSWORD_MAX: usize = 64;

/// Size of the framed image as stored on flash.
pub const SETTINGS_IMAGE_SIZE: usize = HEADER_SIZE + core::mem::size_of::<SettingsRecord>();

/// Double-reset detection marker.
///
/// `Armed` is written at the start of every normal boot. If the device is
/// physically reset while the marker is still armed, the next boot treats it
/// as a factory-reset request: it wipes the record (which also disarms the
/// marker) and reboots. `Disarmed` is written on that wipe and whenever the
/// user deliberately reconfigures the device, so an intentional restart is
/// never mistaken for a physical double-reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetMarker {
    Armed,
    Disarmed,
}

impl ResetMarker {
    const fn as_u8(self) -> u8 {
        match self {
            ResetMarker::Armed => 1,
            ResetMarker::Disarmed => 0,
        }
    }

    const fn from_u8(value: u8) -> Self {
        // Any stray non-zero byte counts as armed; the failure mode is an
        // extra wipe, never a skipped one.
        if value == 0 {
            ResetMarker::Disarmed
        } else {
            ResetMarker::Armed
        }
    }
}

/// The one durable record of the firmware: network credentials plus the
/// reset marker. Strings are zero-padded to their field size.
#[derive(Debug, Clone, Copy, Zeroable, Pod)]
#[repr(C)]
pub struct SettingsRecord {
    ssid: [u8; SSID_MAX],
    password: [u8; PASSWORD_MAX],
    reset_flag: u8,
    _reserved: [u8; 3],
}

impl SettingsRecord {
    /// Empty record: no credentials, marker disarmed.
    pub const fn empty() -> Self {
        Self {
            ssid: [0; SSID_MAX],
            password: [0; PASSWORD_MAX],
            reset_flag: 0,
            _reserved: [0; 3],
        }
    }

    pub fn ssid(&self) -> String<SSID_MAX> {
        parse_padded(&self.ssid)
    }

    pub fn password(&self) -> String<PASSWORD_MAX> {
        parse_padded(&self.password)
    }

    pub fn ssid_is_empty(&self) -> bool {
        self.ssid[0] == 0
    }

    pub fn reset_marker(&self) -> ResetMarker {
        ResetMarker::from_u8(self.reset_flag)
    }

    pub fn set_reset_marker(&mut self, marker: ResetMarker) {
        self.reset_flag = marker.as_u8();
    }

    /// Store credentials exactly as supplied (no trimming, no validation);
    /// strings longer than the field are cut at the field size.
    pub fn set_credentials(&mut self, ssid: &str, password: &str) {
        self.ssid = pad_to_field(ssid);
        self.password = pad_to_field(password);
    }

    /// Frame the record for flash: header words followed by the raw bytes.
    pub fn to_image(&self) -> [u8; SETTINGS_IMAGE_SIZE] {
        let mut image = [0u8; SETTINGS_IMAGE_SIZE];
        image[0..2].copy_from_slice(&MAGIC_HEADER.to_le_bytes());
        image[2..4].copy_from_slice(&LAYOUT_VERSION.to_le_bytes());
        image[HEADER_SIZE..].copy_from_slice(bytemuck::bytes_of(self));
        image
    }

    /// Decode a flash image. `None` when the header is missing or foreign
    /// (erased block, never-written block, older layout) or the image is
    /// short.
    pub fn from_image(image: &[u8]) -> Option<Self> {
        if image.len() < SETTINGS_IMAGE_SIZE {
            return None;
        }
        let magic = u16::from_le_bytes([image[0], image[1]]);
        let version = u16::from_le_bytes([image[2], image[3]]);
        if magic != MAGIC_HEADER || version != LAYOUT_VERSION {
            return None;
        }
        bytemuck::try_pod_read_unaligned(&image[HEADER_SIZE..SETTINGS_IMAGE_SIZE]).ok()
    }
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self::empty()
    }
}

/// Read a zero-padded field back into a bounded string. Anything after the
/// first NUL is padding; non-UTF-8 content reads back empty.
fn parse_padded<const N: usize>(field: &[u8; N]) -> String<N> {
    let len = field.iter().position(|&b| b == 0).unwrap_or(N);
    let text = core::str::from_utf8(&field[..len]).unwrap_or("");
    String::from_str(text).unwrap_or_default()
}

/// Copy a string into a zero-padded field, truncating at the field size.
fn pad_to_field<const N: usize>(value: &str) -> [u8; N] {
    let mut field = [0u8; N];
    let bytes = value.as_bytes();
    let len = bytes.len().min(N);
    field[..len].copy_from_slice(&bytes[..len]);
    field
}
