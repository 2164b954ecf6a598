//! Quiz configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound for the inactivity timeout (one day).
const MAX_INACTIVITY_TIMEOUT_SECS: u64 = 86_400;

/// Quiz session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct QuizConfig {
    /// Seconds without interaction before an in-progress quiz is reset
    #[serde(default = "default_inactivity_timeout")]
    pub inactivity_timeout_secs: u64,
}

impl QuizConfig {
    pub fn inactivity_timeout(&self) -> Duration {
        Duration::from_secs(self.inactivity_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.inactivity_timeout_secs == 0
            || self.inactivity_timeout_secs > MAX_INACTIVITY_TIMEOUT_SECS
        {
            return Err(ValidationError::InvalidInactivityTimeout);
        }
        Ok(())
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            inactivity_timeout_secs: default_inactivity_timeout(),
        }
    }
}

fn default_inactivity_timeout() -> u64 {
    300
}
