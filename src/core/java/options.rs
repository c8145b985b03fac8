use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::env::Environment;

pub const PROBE_TIMEOUT_VAR: &str = "JAVA_LOCATOR_PROBE_TIMEOUT_MS";
const DEFAULT_PROBE_TIMEOUT_MS: u64 = 10_000;

/// Tunables for a discovery run. Embedders usually deserialize this from
/// their own settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryOptions {
    /// Upper bound for a single `java -version` call. `None` waits forever.
    pub probe_timeout_ms: Option<u64>,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            probe_timeout_ms: Some(DEFAULT_PROBE_TIMEOUT_MS),
        }
    }
}

impl DiscoveryOptions {
    /// Defaults, overridden by `JAVA_LOCATOR_PROBE_TIMEOUT_MS` when set.
    /// `0` disables the timeout; unparsable values are ignored.
    pub fn from_env(env: &dyn Environment) -> Self {
        let mut options = Self::default();
        let Some(raw) = env.var_os(PROBE_TIMEOUT_VAR) else {
            return options;
        };

        match raw.to_string_lossy().trim().parse::<u64>() {
            Ok(0) => options.probe_timeout_ms = None,
            Ok(ms) => options.probe_timeout_ms = Some(ms),
            Err(_) => warn!("Ignoring invalid {}={:?}", PROBE_TIMEOUT_VAR, raw),
        }
        options
    }

    pub fn probe_timeout(&self) -> Option<Duration> {
        self.probe_timeout_ms.map(Duration::from_millis)
    }
}
