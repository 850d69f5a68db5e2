use std::time::Duration;

use craft_core::Config;

/// Pause inserted before every image call after the first, keeping the
/// batch under the provider's request rate limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottlePolicy {
    pub delay_between_calls: Duration,
}

impl ThrottlePolicy {
    pub fn new(delay_between_calls: Duration) -> Self {
        Self { delay_between_calls }
    }

    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.hydration_delay())
    }

    pub(crate) async fn pause(&self) {
        if !self.delay_between_calls.is_zero() {
            tokio::time::sleep(self.delay_between_calls).await;
        }
    }
}

impl Default for ThrottlePolicy {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}
