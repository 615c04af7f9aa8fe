//! `Cache-Control` policy for card responses.

use statcard_core::{CacheConfig, leading_integer};

/// Header value that disables every cache layer.
pub const NO_STORE: &str = "no-cache, no-store, must-revalidate";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// `cache=clear`: nothing may be stored.
    Clear,
    MaxAge { seconds: u64 },
}

fn positive_seconds(raw: Option<&str>) -> Option<u64> {
    raw.and_then(leading_integer)
        .filter(|s| *s > 0)
        .map(|s| s as u64)
}

impl CachePolicy {
    /// Resolves the policy for one request.
    ///
    /// `requested` (the `cache_seconds` query value) is read up to its first non-digit and clamped
    /// to the configured bounds, so `-5` and `3600abc` land on the minimum. A value with no
    /// leading digits selects the default first. A positive `deployment_override` replaces the
    /// result unclamped.
    pub fn from_request(
        clear: bool,
        requested: Option<&str>,
        deployment_override: Option<&str>,
        config: &CacheConfig,
    ) -> Self {
        if clear {
            return Self::Clear;
        }
        let requested = requested
            .and_then(leading_integer)
            .map(|s| u64::try_from(s).unwrap_or(0));
        let mut seconds = config.clamp(requested.unwrap_or(config.default_seconds));
        if let Some(forced) = positive_seconds(deployment_override) {
            tracing::debug!(requested = seconds, forced, "cache seconds overridden by deployment");
            seconds = forced;
        }
        Self::MaxAge { seconds }
    }

    pub fn headers(self, config: &CacheConfig) -> Vec<(&'static str, String)> {
        match self {
            Self::Clear => vec![
                ("Cache-Control", NO_STORE.to_string()),
                ("Pragma", "no-cache".to_string()),
                ("Expires", "0".to_string()),
            ],
            Self::MaxAge { seconds } => vec![(
                "Cache-Control",
                format!(
                    "max-age={seconds}, s-maxage={seconds}, stale-while-revalidate={}",
                    config.stale_while_revalidate
                ),
            )],
        }
    }
}
