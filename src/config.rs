//! Configuration types.

use std::time::Duration;

/// Advisor configuration.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// Display name of the advisor persona.
    pub agent_name: String,
    /// Brand the advisor recommends for.
    pub brand_name: String,
    /// Upper bound on the advice-enrichment call. On expiry the static
    /// explanation is used instead.
    pub enrichment_timeout: Duration,
    /// Port for the HTTP API.
    pub api_port: u16,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            agent_name: "TimTim".to_string(),
            brand_name: "Verident".to_string(),
            enrichment_timeout: Duration::from_secs(8),
            api_port: 8080,
        }
    }
}
