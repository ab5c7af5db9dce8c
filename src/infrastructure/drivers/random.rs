use esp_hal::rng::Rng;

/// Seed for an embassy-net stack, from the hardware RNG.
pub(crate) fn net_stack_seed() -> u64 {
    let rng = Rng::new();
    (u64::from(rng.random()) << 32) | u64::from(rng.random())
}
