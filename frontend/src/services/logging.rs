use shared::DashboardConfig;
use std::cell::Cell;

thread_local! {
    static DEBUG_ENABLED: Cell<bool> = const { Cell::new(false) };
}

/// Component-tagged console logging
pub struct Logger;

impl Logger {
    /// Apply the logging settings from the dashboard config
    pub fn init(config: &DashboardConfig) {
        DEBUG_ENABLED.with(|flag| flag.set(config.enable_debug_logging));
    }

    pub fn debug_enabled() -> bool {
        DEBUG_ENABLED.with(Cell::get)
    }

    pub fn debug_with_component(component: &str, message: &str) {
        if Self::debug_enabled() {
            gloo::console::debug!(Self::line(component, message));
        }
    }

    pub fn info_with_component(component: &str, message: &str) {
        gloo::console::info!(Self::line(component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        gloo::console::warn!(Self::line(component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(Self::line(component, message));
    }

    fn line(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_init_follows_config() {
        Logger::init(&DashboardConfig { enable_debug_logging: true, ..DashboardConfig::default() });
        assert!(Logger::debug_enabled());

        Logger::init(&DashboardConfig::default());
        assert!(!Logger::debug_enabled());
    }

    #[wasm_bindgen_test]
    fn test_line_format() {
        assert_eq!(Logger::line("api", "GET workers/"), "[api] GET workers/");
    }
}
