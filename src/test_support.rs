//! Helpers shared by unit tests.

/// Routes `log` output through the test harness. Safe to call repeatedly.
pub fn init_test_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .format_timestamp(None)
        .format_target(false)
        .is_test(true)
        .try_init();
}
