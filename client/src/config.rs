//! Client configuration

use std::time::Duration;

/// Public PokeAPI v2 root
pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

/// First generation
pub const DEFAULT_CREATURE_COUNT: u32 = 151;

pub const DEFAULT_TYPE_COUNT: u32 = 18;

/// How long a fetched catalog is served from memory
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(10 * 60);

/// Retry schedule for a single record request
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts including the first one
    pub max_attempts: usize,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Single attempt, no retries
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Delay to wait after `delay`, capped at `max_delay`
    pub fn next_delay(&self, delay: Duration) -> Duration {
        Duration::from_secs_f64(delay.as_secs_f64() * self.backoff_multiplier).min(self.max_delay)
    }
}

/// Configuration for [`CatalogClient`](crate::CatalogClient)
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API root, without trailing slash
    pub base_url: String,

    /// Creature IDs `1..=creature_count` are requested
    pub creature_count: u32,

    /// Type IDs `1..=type_count` are requested
    pub type_count: u32,

    pub cache_ttl: Duration,

    pub request_timeout: Duration,

    /// Upper bound on concurrent requests within one batch
    pub max_in_flight: usize,

    pub retry: RetryPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: POKEAPI_URL.to_string(),
            creature_count: DEFAULT_CREATURE_COUNT,
            type_count: DEFAULT_TYPE_COUNT,
            cache_ttl: DEFAULT_CACHE_TTL,
            request_timeout: Duration::from_secs(30),
            max_in_flight: 32,
            retry: RetryPolicy::default(),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_creature_count(mut self, count: u32) -> Self {
        self.creature_count = count;
        self
    }

    #[must_use]
    pub fn with_type_count(mut self, count: u32) -> Self {
        self.type_count = count;
        self
    }

    #[must_use]
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Values below 1 are treated as 1
    #[must_use]
    pub fn with_max_in_flight(mut self, max: usize) -> Self {
        self.max_in_flight = max.max(1);
        self
    }

    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Full URL for an API path
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}
