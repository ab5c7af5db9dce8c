#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};
use esp_println::println;
use esp_storage::FlashStorage;
use static_cell::StaticCell;

use skimap_firmware::config::{RESET_REBOOT_DELAY_MS, SETTINGS_PARTITION_OFFSET};
use skimap_firmware::controllers::{BootController, PortalHttpController};
use skimap_firmware::infrastructure::drivers::{
    EspLedDriver, SettingsFlash, WifiParts, init_wifi,
};
use skimap_firmware::infrastructure::repositories::SettingsStore;
use skimap_firmware::infrastructure::tasks::{
    ap_net_runner_task, dhcp_server_task, http_server_task, led_command_sender, led_task,
    net_supervisor_task, reboot_task, sta_net_runner_task,
};
use skimap_firmware::infrastructure::types::{DeviceState, LedCommand};
use skimap_firmware::{led_gpio, mk_static};
use skimap_portal::BootPlan;

esp_bootloader_esp_idf::esp_app_desc!();

static FLASH_STORAGE: StaticCell<FlashStorage<'static>> = StaticCell::new();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Allocate heap memory (64 + 32 KB)
    esp_alloc::heap_allocator!(
        #[unsafe(link_section = ".dram2_uninit")] size: 64 * 1024
    );
    esp_alloc::heap_allocator!(size: 32 * 1024);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Settings store over the wifi-config partition
    let flash = FLASH_STORAGE.init(FlashStorage::new(peripherals.FLASH));
    let flash_ptr = flash as *mut FlashStorage<'static>;
    let settings = SettingsStore::new(SettingsFlash::new(flash_ptr, SETTINGS_PARTITION_OFFSET));

    // Double-reset handling runs before anything else; a factory reset
    // reboots unconditionally.
    let plan = BootController::new(&settings).on_boot();
    if plan == BootPlan::FactoryReset {
        Timer::after(Duration::from_millis(RESET_REBOOT_DELAY_MS)).await;
        esp_hal::system::software_reset();
    }

    // LED indicator: cleared strip until a connection succeeds
    let led_driver = EspLedDriver::new(peripherals.RMT, led_gpio!(peripherals));
    spawner.spawn(led_task(led_driver)).ok();
    let led = led_command_sender();
    led.send(LedCommand::Clear).await;

    let state = mk_static!(DeviceState, DeviceState::new(settings, led));

    // Radio and both network stacks
    let WifiParts {
        controller,
        sta_stack,
        ap_stack,
        sta_runner,
        ap_runner,
    } = init_wifi(peripherals.WIFI);
    spawner.spawn(sta_net_runner_task(sta_runner)).ok();
    spawner.spawn(ap_net_runner_task(ap_runner)).ok();

    // Portal endpoints are served on both interfaces; DHCP only matters on
    // the access-point side.
    let portal = mk_static!(
        PortalHttpController,
        PortalHttpController::new(state, sta_stack)
    );
    spawner.spawn(http_server_task(sta_stack, portal)).ok();
    spawner.spawn(http_server_task(ap_stack, portal)).ok();
    spawner.spawn(dhcp_server_task(ap_stack)).ok();
    spawner.spawn(reboot_task(state)).ok();

    // Supervisor owns the radio from here on
    spawner
        .spawn(net_supervisor_task(state, controller, sta_stack, ap_stack))
        .ok();

    println!("skimap: boot complete");

    loop {
        Timer::after(Duration::from_secs(5)).await;
    }
}
