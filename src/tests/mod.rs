mod fake_plan;
mod validator_tests;

static ONCE: std::sync::Once = std::sync::Once::new();

/// Installs a trace-level logger once per test binary.
pub(crate) fn init_logging() {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
}
