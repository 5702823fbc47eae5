//! Turn cache configuration

use chrono::Duration;
use serde::Deserialize;

use super::error::ValidationError;

/// Longest accepted turn cache lifetime (one day)
pub const MAX_TTL_SECS: u64 = 86_400;

/// Per-turn structured record cache configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// How long a turn's cache serves entries, in seconds
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

fn default_ttl_secs() -> u64 {
    300
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

impl CacheConfig {
    /// Get TTL as a chrono Duration, clamped to [`MAX_TTL_SECS`]
    pub fn ttl(&self) -> Duration {
        Duration::seconds(self.ttl_secs.min(MAX_TTL_SECS) as i64)
    }

    /// Validate cache configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.ttl_secs == 0 {
            return Err(ValidationError::InvalidCacheTtl);
        }
        if self.ttl_secs > MAX_TTL_SECS {
            return Err(ValidationError::CacheTtlTooLong {
                max_secs: MAX_TTL_SECS,
            });
        }
        Ok(())
    }
}
