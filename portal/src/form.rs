//! Credentials form decoder.
//!
//! Decodes the `application/x-www-form-urlencoded` body posted by the
//! configuration page. Deliberately forgiving: missing fields, empty values
//! and undecodable input all coerce to empty strings. Whatever survives
//! decoding is stored verbatim, with no trimming or validation.

use heapless::String;

use crate::settings::{PASSWORD_MAX, SSID_MAX};

/// Field names served by the configuration page.
const FIELD_SSID: &str = "ssid";
const FIELD_PASSWORD: &str = "password";

/// Decoded credentials submission.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CredentialsForm {
    pub ssid: String<SSID_MAX>,
    pub password: String<PASSWORD_MAX>,
}

impl CredentialsForm {
    /// Decode a form body. There is no error path: anything that is not a
    /// well-formed `ssid`/`password` pair simply leaves that field empty.
    pub fn parse(body: &[u8]) -> Self {
        let mut form = Self::default();
        let Ok(text) = core::str::from_utf8(body) else {
            return form;
        };

        for pair in text.split('&') {
            let (name, value) = match pair.split_once('=') {
                Some((name, value)) => (name, value),
                None => (pair, ""),
            };
            match name {
                FIELD_SSID => decode_component(value, &mut form.ssid),
                FIELD_PASSWORD => decode_component(value, &mut form.password),
                _ => {}
            }
        }
        form
    }
}

/// Percent-decode one form value into a bounded string. `+` means space,
/// `%XX` is a hex escape; a malformed escape is kept literally. Input longer
/// than the field capacity is cut there, matching the persisted field size.
fn decode_component<const N: usize>(raw: &str, out: &mut String<N>) {
    let mut bytes = raw.bytes();
    let mut decoded = [0u8; N];
    let mut len = 0;

    while let Some(b) = bytes.next() {
        if len == N {
            break;
        }
        decoded[len] = match b {
            b'+' => b' ',
            b'%' => {
                let mut lookahead = bytes.clone();
                match (
                    lookahead.next().and_then(hex_digit),
                    lookahead.next().and_then(hex_digit),
                ) {
                    (Some(hi), Some(lo)) => {
                        bytes = lookahead;
                        hi << 4 | lo
                    }
                    _ => b'%',
                }
            }
            other => other,
        };
        len += 1;
    }

    if let Ok(text) = core::str::from_utf8(&decoded[..len]) {
        let _ = out.push_str(text);
    }
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
