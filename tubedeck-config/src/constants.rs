/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "tubedeck";

/// File name of the client configuration
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// File name of the persisted settings record
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Filter used when the configured one is empty or does not parse
pub const DEFAULT_LOG_FILTER: &str = "info";
