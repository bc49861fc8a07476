pub mod dashboard_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Size of the channel carrying updates from the refresh worker to the UI.
    pub const UPDATE_QUEUE_SIZE: usize = 100;

    /// Size of the channel carrying commands from the UI to the refresh worker.
    pub const COMMAND_QUEUE_SIZE: usize = 16;

    // =============================================================================
    // BACKEND CONFIGURATION
    // =============================================================================

    /// Backend used when nothing else is configured (ProxyPool's default API port).
    pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5555";

    /// Environment variable overriding the configured API URL.
    pub const API_URL_ENV_VAR: &str = "PROXYPOOL_API_URL";

    /// Header carrying the API key, as expected by the ProxyPool server.
    pub const API_KEY_HEADER: &str = "API-KEY";

    pub const STATS_ENDPOINT: &str = "/api/stats";

    pub const PROXIES_ENDPOINT: &str = "/api/proxies";

    // =============================================================================
    // REFRESH & PAGINATION
    // =============================================================================

    pub mod refresh {
        use std::time::Duration;

        /// Interval between automatic refreshes (seconds)
        pub const REFRESH_INTERVAL_SECS: u64 = 30;

        /// Connect and request timeout of the HTTP client (seconds)
        pub const HTTP_TIMEOUT_SECS: u64 = 10;

        /// Helper function to get the refresh interval
        pub const fn refresh_interval() -> Duration {
            Duration::from_secs(REFRESH_INTERVAL_SECS)
        }

        /// Helper function to get the HTTP timeout
        pub const fn http_timeout() -> Duration {
            Duration::from_secs(HTTP_TIMEOUT_SECS)
        }
    }

    pub mod pagination {
        /// Number of proxies shown per page
        pub const PAGE_SIZE: u32 = 20;

        /// Page links shown on each side of the current page
        pub const WINDOW_RADIUS: u32 = 2;
    }

    // =============================================================================
    // INPUT & NOTIFICATIONS
    // =============================================================================

    pub mod input {
        use std::time::Duration;

        /// Delay after the last keystroke before the search filter runs (milliseconds)
        pub const SEARCH_DEBOUNCE_MS: u64 = 300;

        pub const fn search_debounce() -> Duration {
            Duration::from_millis(SEARCH_DEBOUNCE_MS)
        }
    }

    pub mod toast {
        use std::time::Duration;

        /// Lifetime of success, warning and info toasts (milliseconds)
        pub const DEFAULT_TTL_MS: u64 = 3000;

        /// Error toasts stay a little longer (milliseconds)
        pub const ERROR_TTL_MS: u64 = 4000;

        /// Maximum number of toasts stacked on screen
        pub const MAX_VISIBLE: usize = 4;

        pub const fn default_ttl() -> Duration {
            Duration::from_millis(DEFAULT_TTL_MS)
        }

        pub const fn error_ttl() -> Duration {
            Duration::from_millis(ERROR_TTL_MS)
        }
    }

    pub mod layout {
        /// Smallest terminal the dashboard renders into
        pub const MIN_WIDTH: u16 = 60;
        pub const MIN_HEIGHT: u16 = 24;

        /// Width of a toast notification
        pub const TOAST_WIDTH: u16 = 48;
    }

    // =============================================================================
    // EXPORT
    // =============================================================================

    /// File name pattern for exported proxy lists
    pub const EXPORT_DATE_PATTERN: &str = "YYYY-MM-DD_HH-mm-ss";

    /// Display value used when the backend does not report a status
    pub const UNKNOWN_STATUS: &str = "未知";
}
