use once_cell::sync::Lazy;

#[derive(Debug)]
pub struct Config {
    /// Root directory for per-instance operation logs.
    pub plc_log_dir: String,
    /// When true, failed client calls are logged at warn level instead of debug.
    pub plc_dump_on_error: bool,
}

impl Config {
    fn from_env() -> Self {
        let plc_log_dir = std::env::var("PLC_LOG_DIR").unwrap_or_else(|_| "logs".to_string());
        let plc_dump_on_error = std::env::var("PLC_DUMP_ON_ERROR")
            .map(|v| v == "1")
            .unwrap_or(false);
        Self {
            plc_log_dir,
            plc_dump_on_error,
        }
    }
}

/// Global config loaded once from environment at first access.
pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

/// Convenience accessor
pub fn config() -> &'static Config {
    &GLOBAL_CONFIG
}
