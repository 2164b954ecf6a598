//! Follow-up survey configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::survey::{SurveyForm, TextLimits};

/// Free-text limits of the follow-up survey
#[derive(Debug, Clone, Deserialize)]
pub struct SurveyConfig {
    /// Maximum characters per free-text answer
    #[serde(default = "default_text_max_length")]
    pub text_max_length: usize,

    /// Minimum trimmed characters per free-text answer (0 disables)
    #[serde(default)]
    pub text_min_length: usize,
}

impl SurveyConfig {
    pub fn text_limits(&self) -> TextLimits {
        TextLimits {
            min_length: self.text_min_length,
            max_length: self.text_max_length,
        }
    }

    /// The standard survey form with these limits applied.
    pub fn form(&self) -> SurveyForm {
        SurveyForm::standard(self.text_limits())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text_max_length == 0 {
            return Err(ValidationError::ZeroTextMaxLength);
        }
        if self.text_min_length > self.text_max_length {
            return Err(ValidationError::InvalidTextLimits {
                min: self.text_min_length,
                max: self.text_max_length,
            });
        }
        Ok(())
    }
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            text_max_length: default_text_max_length(),
            text_min_length: 0,
        }
    }
}

fn default_text_max_length() -> usize {
    500
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_standard_form() {
        let config = SurveyConfig::default();
        assert_eq!(config.text_limits(), TextLimits::default());
        assert_eq!(config.form(), SurveyForm::default());
    }

    #[test]
    fn min_above_max_is_invalid() {
        let config = SurveyConfig {
            text_max_length: 10,
            text_min_length: 11,
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidTextLimits { min: 11, max: 10 })
        );
    }
}
