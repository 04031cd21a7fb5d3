use log::Level;
use momo_dashboard::{ChartPeriod, DashboardConfig};
use web_sys::{window, Storage};

const KEY_PREFIX: &str = "momo_";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Backend API origin (e.g. "localhost"); requests stay same-origin when unset
    pub api_host: Option<String>,

    /// Backend API port, only used together with `api_host`
    pub api_port: u16,

    /// API path prefix (e.g., "/api")
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Request timeout in milliseconds
    pub request_timeout_ms: u32,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,

    /// Engine configuration (currency, page sizes, default period)
    pub dashboard: DashboardConfig,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: None,
            api_port: 5000,
            api_path: "/api".to_string(),
            api_use_https: false,
            log_level: Level::Info,
            request_timeout_ms: 30000,
            debug_mode: false,
            toast_duration_ms: 5000,
            dashboard: DashboardConfig::default(),
        }
    }
}

fn read(storage: &Storage, key: &str) -> Option<String> {
    storage
        .get_item(&format!("{}{}", KEY_PREFIX, key))
        .ok()
        .flatten()
}

fn read_parsed<T: std::str::FromStr>(storage: &Storage, key: &str) -> Option<T> {
    read(storage, key).and_then(|value| value.trim().parse::<T>().ok())
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            settings.apply_storage(&storage);
        }

        settings
    }

    fn apply_storage(&mut self, storage: &Storage) {
        if let Some(api_host) = read(storage, "api_host") {
            self.api_host = Some(api_host);
        }
        if let Some(port) = read_parsed::<u16>(storage, "api_port") {
            self.api_port = port;
        }
        if let Some(api_path) = read(storage, "api_path") {
            self.api_path = api_path;
        }
        if let Some(use_https) = read(storage, "api_use_https") {
            self.api_use_https = use_https.to_lowercase() == "true";
        }
        if let Some(level) = read_parsed::<Level>(storage, "log_level") {
            self.log_level = level;
        }
        if let Some(timeout) = read_parsed::<u32>(storage, "request_timeout_ms") {
            self.request_timeout_ms = timeout;
        }
        if let Some(duration) = read_parsed::<u32>(storage, "toast_duration_ms") {
            self.toast_duration_ms = duration;
        }

        let dashboard = &mut self.dashboard;
        if let Some(code) = read(storage, "currency_code") {
            dashboard.currency_code = code;
        }
        if let Some(size) = read_parsed::<u32>(storage, "recent_page_size") {
            dashboard.recent_page_size = size;
        }
        if let Some(size) = read_parsed::<u32>(storage, "filter_batch_size") {
            dashboard.filter_batch_size = size;
        }
        if let Some(limit) = read_parsed::<usize>(storage, "filter_display_limit") {
            dashboard.filter_display_limit = limit;
        }
        if let Some(period) = read_parsed::<ChartPeriod>(storage, "default_period") {
            dashboard.default_period = period;
        }
    }

    /// Get the base API URL; relative when no host is configured
    pub fn api_base_url(&self) -> String {
        match &self.api_host {
            Some(host) => {
                let protocol = if self.api_use_https { "https" } else { "http" };
                format!("{}://{}:{}{}", protocol, host, self.api_port, self.api_path)
            }
            None => self.api_path.clone(),
        }
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }
}

// Read from the window once, on first access
thread_local! {
    static SETTINGS: AppSettings = AppSettings::from_environment();
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.clone())
}
