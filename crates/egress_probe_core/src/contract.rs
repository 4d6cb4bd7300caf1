use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const TARGET_HOST: &str = "www.google.com";
pub const TARGET_PORT: u16 = 80;
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

pub const ALERT_TOPIC_ENV_VAR: &str = "SNS_TOPIC_ARN";
pub const ALERT_SUBJECT: &str = "Network Reachability Failure";
pub const ALERT_MESSAGE: &str =
    "ALERT: The Private Subnet cannot reach the internet! Check NAT Gateway.";

pub const SUCCESS_BODY: &str = "Connection Successful";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    pub host: String,
    pub port: u16,
    pub connect_timeout: Duration,
}

impl ProbeTarget {
    pub fn new(host: impl Into<String>, port: u16, connect_timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            connect_timeout,
        }
    }

    /// The well-known public endpoint whose reachability stands in for
    /// "this subnet has internet egress".
    pub fn egress_default() -> Self {
        Self::new(TARGET_HOST, TARGET_PORT, CONNECT_TIMEOUT)
    }
}

impl fmt::Display for ProbeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Result handed back to the invoking platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    pub fn connection_successful() -> Self {
        Self {
            status_code: 200,
            body: SUCCESS_BODY.to_string(),
        }
    }

    pub fn misconfigured(error: &ConfigError) -> Self {
        Self {
            status_code: 500,
            body: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertNotification {
    pub topic_arn: String,
    pub subject: String,
    pub message: String,
}

impl AlertNotification {
    pub fn network_reachability_failure(topic_arn: impl Into<String>) -> Self {
        Self {
            topic_arn: topic_arn.into(),
            subject: ALERT_SUBJECT.to_string(),
            message: ALERT_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    #[test]
    fn default_target_is_google_http_with_three_second_timeout() {
        let target = ProbeTarget::egress_default();

        assert_eq!(target.host, "www.google.com");
        assert_eq!(target.port, 80);
        assert_eq!(target.connect_timeout, Duration::from_secs(3));
        assert_eq!(target.to_string(), "www.google.com:80");
    }

    #[test]
    fn success_response_serializes_with_platform_field_names() {
        let value: Value = serde_json::to_value(InvocationResponse::connection_successful())
            .expect("response should serialize");

        assert_eq!(
            value,
            json!({"statusCode": 200, "body": "Connection Successful"})
        );
    }

    #[test]
    fn misconfigured_response_names_missing_variable() {
        let response = InvocationResponse::misconfigured(&ConfigError::MissingAlertTopic);

        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, "SNS_TOPIC_ARN not configured");
    }

    #[test]
    fn alert_points_operator_at_nat_gateway() {
        let alert = AlertNotification::network_reachability_failure("topic-X");

        assert_eq!(alert.topic_arn, "topic-X");
        assert_eq!(alert.subject, "Network Reachability Failure");
        assert!(alert.message.contains("NAT Gateway"));
    }
}
