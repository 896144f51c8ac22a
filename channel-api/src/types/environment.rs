use std::{env, time::Duration};

use innertube::InnertubeConfig;

/// Default listen port when `PORT` is unset
pub const DEFAULT_PORT: u16 = 8000;

/// Application environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an invalid value
    #[must_use]
    pub fn from_env() -> Self {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Self::Production,
            "staging" => Self::Staging,
            "development" => Self::Development,
            _ => panic!("Invalid environment: {env}"),
        }
    }

    /// Port the HTTP server binds to
    ///
    /// # Panics
    ///
    /// Panics if the `PORT` environment variable is not a valid u16
    #[must_use]
    pub fn port(&self) -> u16 {
        env::var("PORT").map_or(DEFAULT_PORT, |p| {
            p.parse().expect("PORT environment variable is not a valid u16")
        })
    }

    /// `InnerTube` client configuration
    ///
    /// Language and region are only pinned when `INNERTUBE_HL` / `INNERTUBE_GL` are set.
    ///
    /// # Panics
    ///
    /// Panics if the `INNERTUBE_TIMEOUT_SECS` environment variable is not a valid u64
    #[must_use]
    pub fn innertube_config(&self) -> InnertubeConfig {
        let defaults = InnertubeConfig::default();

        InnertubeConfig {
            base_url: env::var("INNERTUBE_BASE_URL").unwrap_or(defaults.base_url),
            hl: env::var("INNERTUBE_HL").ok().filter(|v| !v.is_empty()),
            gl: env::var("INNERTUBE_GL").ok().filter(|v| !v.is_empty()),
            timeout: secs_from_env("INNERTUBE_TIMEOUT_SECS", defaults.timeout.as_secs()),
        }
    }

    /// Whether to emit logs as JSON
    #[must_use]
    pub const fn json_logs(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }

    /// Whether to show API docs
    #[must_use]
    pub const fn show_api_docs(&self) -> bool {
        matches!(self, Self::Development | Self::Staging)
    }
}

fn secs_from_env(name: &str, default: u64) -> Duration {
    let secs = env::var(name).map_or(default, |v| {
        v.parse()
            .unwrap_or_else(|_| panic!("{name} environment variable is not a valid u64"))
    });
    Duration::from_secs(secs)
}
