/// Application-level constants
pub const APP_NAME: &str = "Fieldtriage";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default log filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "fieldtriage=debug,info"
    } else {
        "fieldtriage=info,warn"
    }
}
