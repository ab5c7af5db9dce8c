//! Shared runtime state.
//!
//! One device-state struct instead of module-level globals: allocated once
//! in `main` and handed to tasks and controllers by reference.

use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Sender};
use embassy_sync::signal::Signal;

use crate::infrastructure::repositories::SettingsStore;

/// Commands understood by the LED indicator task.
#[derive(Debug, Clone, Copy)]
pub enum LedCommand {
    /// All elements off.
    Clear,
    /// One rotating-hue frame (fired per successful connection event).
    CycleTick,
}

const LED_QUEUE_DEPTH: usize = 4;

pub type LedChannel = Channel<CriticalSectionRawMutex, LedCommand, LED_QUEUE_DEPTH>;
pub type LedSender = Sender<'static, CriticalSectionRawMutex, LedCommand, LED_QUEUE_DEPTH>;

/// Device-wide state shared between the supervisor, the HTTP portal and the
/// actors. Mutation is serialised by the single-core cooperative executor.
pub struct DeviceState {
    /// Persisted `wifi-config` settings.
    pub settings: SettingsStore,
    /// Guard against re-entering access-point bring-up.
    ap_started: AtomicBool,
    /// Commands for the LED indicator task.
    pub led: LedSender,
    /// Raised by the portal after `/save`; the reboot actor answers it.
    pub reboot: Signal<CriticalSectionRawMutex, ()>,
}

impl DeviceState {
    pub fn new(settings: SettingsStore, led: LedSender) -> Self {
        Self {
            settings,
            ap_started: AtomicBool::new(false),
            led,
            reboot: Signal::new(),
        }
    }

    pub fn ap_started(&self) -> bool {
        self.ap_started.load(Ordering::Relaxed)
    }

    pub fn set_ap_started(&self, started: bool) {
        self.ap_started.store(started, Ordering::Relaxed);
    }

    pub fn request_reboot(&self) {
        self.reboot.signal(());
    }
}
