use crate::contract::ALERT_TOPIC_ENV_VAR;
use crate::error::ConfigError;

/// Runtime configuration injected through the function environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeConfig {
    pub alert_topic_arn: Option<String>,
}

impl ProbeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            alert_topic_arn: lookup(ALERT_TOPIC_ENV_VAR),
        }
    }

    /// Presence check only; the ARN format is left to the notification service.
    ///
    /// Unset, empty and whitespace-only values all count as missing. A present
    /// value is returned with surrounding whitespace trimmed.
    pub fn require_alert_topic(&self) -> Result<&str, ConfigError> {
        match self.alert_topic_arn.as_deref() {
            Some(value) if !value.trim().is_empty() => Ok(value.trim()),
            _ => Err(ConfigError::MissingAlertTopic),
        }
    }
}
