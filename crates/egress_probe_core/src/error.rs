//! Error types for configuration resolution and probe outcomes.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The alert topic variable is unset or blank.
    #[error("SNS_TOPIC_ARN not configured")]
    MissingAlertTopic,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// The connection attempt failed or did not complete within the timeout.
    #[error("failed to connect to {target}: {reason}")]
    Unreachable { target: String, reason: String },

    /// The target was unreachable and the alert about it could not be sent.
    #[error("failed to publish reachability alert to {topic_arn}: {reason} (probe failure: {probe_failure})")]
    AlertPublishFailed {
        topic_arn: String,
        reason: String,
        probe_failure: String,
    },
}
