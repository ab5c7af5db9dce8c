//! Platform-independent provisioning logic for the Skimap firmware.
//!
//! Everything in this crate is pure state and arithmetic: the persisted
//! settings record and its flash framing, the boot decision table, the
//! station-connect deadline accounting, the credentials form decoder and
//! the indicator hue cycle. The firmware crate wires these to the radio,
//! flash and LED peripherals.

#![no_std]

pub mod boot;
pub mod form;
pub mod hue;
pub mod link;
pub mod settings;

pub use boot::{BootPlan, boot_plan, boot_plan_for};
pub use form::CredentialsForm;
pub use hue::{HueCycle, OFF_FRAME, STRIP_LEN};
pub use link::{ConnectAttempt, ConnectStatus, LinkState, should_start_portal};
pub use settings::{ResetMarker, SETTINGS_IMAGE_SIZE, SettingsRecord};
