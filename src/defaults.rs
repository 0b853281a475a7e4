//! Default values used across the discovery library.
//!
//! Collecting the defaults in one place keeps them documented and easy to
//! audit. Callers can override any of these through the relevant builders.

/// HTTP defaults.
pub mod http {
    use std::time::Duration;

    /// Default timeout for model list requests.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Default timeout for connection tests, kept short so a misconfigured
    /// provider fails fast in interactive flows.
    pub const CONNECTION_TEST_TIMEOUT: Duration = Duration::from_secs(10);

    /// User-Agent header sent with discovery requests.
    pub const USER_AGENT: &str = concat!("llm-discovery/", env!("CARGO_PKG_VERSION"));
}

/// Model list cache defaults.
pub mod cache {
    /// Default time-to-live for cached model lists, in seconds.
    pub const MODEL_LIST_TTL_SECONDS: i64 = 3600;

    /// Shorter TTL suited to local runtimes where the installed model set
    /// changes frequently.
    pub const LOCAL_MODEL_LIST_TTL_SECONDS: i64 = 300;
}
