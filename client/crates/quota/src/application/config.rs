//! Quota Configuration

/// Guest quota configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaConfig {
    /// Daily limit assumed when the guest session cannot be fetched
    pub fallback_daily_limit: u32,
    /// Upgrade prompt appears at or below this many remaining checks
    pub prompt_threshold: u32,
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self {
            fallback_daily_limit: 10,
            prompt_threshold: 3,
        }
    }
}
