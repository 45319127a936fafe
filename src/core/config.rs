//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Leptos' own site options (address, site root) come from `Cargo.toml`
//! metadata and the `LEPTOS_*` variables instead.

/// Filter used when neither `LOG_FILTER` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "info,travelai=debug";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Public URL the site is reachable at
    /// Example: https://travelai.pro
    pub public_url: Option<String>,

    /// tracing-subscriber filter directive
    /// Example: info,tower_http=debug
    pub log_filter: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            public_url: std::env::var("PUBLIC_URL").ok(),
            log_filter: std::env::var("LOG_FILTER")
                .or_else(|_| std::env::var("RUST_LOG"))
                .ok(),
        }
    }

    /// Check if a public URL is configured
    pub fn has_public_url(&self) -> bool {
        self.public_url.is_some()
    }

    /// Filter directive for the tracing subscriber
    pub fn log_filter(&self) -> &str {
        self.log_filter
            .as_deref()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Public URL, falling back to the local site address
    pub fn public_url_or(&self, site_addr: &str) -> String {
        match &self.public_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://{}", site_addr),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_with_all_fields() {
        let config = Config {
            public_url: Some("https://travelai.pro".to_string()),
            log_filter: Some("debug".to_string()),
        };

        assert!(config.has_public_url());
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = Config {
            public_url: None,
            log_filter: None,
        };

        assert!(!config.has_public_url());
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_blank_log_filter_uses_default() {
        let config = Config {
            public_url: None,
            log_filter: Some("   ".to_string()),
        };

        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_public_url_or() {
        let with_url = Config {
            public_url: Some("https://travelai.pro/".to_string()),
            log_filter: None,
        };
        let without_url = Config {
            public_url: None,
            log_filter: None,
        };

        assert_eq!(with_url.public_url_or("127.0.0.1:3000"), "https://travelai.pro");
        assert_eq!(
            without_url.public_url_or("127.0.0.1:3000"),
            "http://127.0.0.1:3000"
        );
    }

    // ========================================================================
    // Environment Variable Tests
    // ========================================================================

    /// Single test so the process-wide variables are never mutated concurrently
    #[test]
    fn test_from_env_reads_and_falls_back() {
        let original_url = std::env::var("PUBLIC_URL").ok();
        let original_filter = std::env::var("LOG_FILTER").ok();
        let original_rust_log = std::env::var("RUST_LOG").ok();

        // SAFETY: We're in a single-threaded test environment
        unsafe {
            std::env::set_var("PUBLIC_URL", "https://travelai.pro/");
            std::env::set_var("LOG_FILTER", "warn");
            std::env::set_var("RUST_LOG", "trace");
        }
        let config = Config::from_env();
        assert_eq!(config.public_url.as_deref(), Some("https://travelai.pro/"));
        assert_eq!(config.log_filter(), "warn");

        // LOG_FILTER unset: RUST_LOG takes over
        unsafe {
            std::env::remove_var("LOG_FILTER");
        }
        assert_eq!(Config::from_env().log_filter(), "trace");

        unsafe {
            std::env::remove_var("PUBLIC_URL");
            std::env::remove_var("RUST_LOG");
        }
        let config = Config::from_env();
        assert!(!config.has_public_url());
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);

        // Restore original values
        unsafe {
            match original_url {
                Some(val) => std::env::set_var("PUBLIC_URL", val),
                None => std::env::remove_var("PUBLIC_URL"),
            }
            match original_filter {
                Some(val) => std::env::set_var("LOG_FILTER", val),
                None => std::env::remove_var("LOG_FILTER"),
            }
            match original_rust_log {
                Some(val) => std::env::set_var("RUST_LOG", val),
                None => std::env::remove_var("RUST_LOG"),
            }
        }
    }
}
