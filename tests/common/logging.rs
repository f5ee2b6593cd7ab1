#[allow(unused)] // used in tests
pub fn init_default_logging() {
    railib::util::log_util::init();
}
