use std::time::{Duration, Instant};

use egress_probe_core::config::ProbeConfig;
use egress_probe_core::contract::{AlertNotification, InvocationResponse, ProbeTarget};
use egress_probe_core::error::ProbeError;

use crate::adapters::connector::ReachabilityProbe;
use crate::adapters::notifier::AlertPublisher;

/// Runs one probe invocation.
///
/// A missing alert topic is reported as a 500 response before any network
/// activity. An unreachable target is alerted once and then returned as an
/// error so the platform records the invocation as failed.
pub fn handle_probe_invocation(
    config: &ProbeConfig,
    target: &ProbeTarget,
    probe: &dyn ReachabilityProbe,
    publisher: &dyn AlertPublisher,
) -> Result<InvocationResponse, ProbeError> {
    let topic_arn = match config.require_alert_topic() {
        Ok(value) => value,
        Err(error) => {
            tracing::error!(
                component = "probe_handler",
                event = "misconfigured",
                error = %error,
                "alert topic is not configured, skipping probe"
            );
            return Ok(InvocationResponse::misconfigured(&error));
        }
    };

    let started_at = Instant::now();
    let timeout_ms = whole_millis(target.connect_timeout);
    tracing::info!(
        component = "probe_handler",
        event = "probe_started",
        probe_target = %target,
        timeout_ms,
        "probing egress connectivity"
    );

    let reason = match probe.check(target) {
        Ok(()) => {
            tracing::info!(
                component = "probe_handler",
                event = "probe_succeeded",
                probe_target = %target,
                duration_ms = whole_millis(started_at.elapsed()),
                "successfully connected to {}",
                target.host
            );
            return Ok(InvocationResponse::connection_successful());
        }
        Err(reason) => reason,
    };

    tracing::error!(
        component = "probe_handler",
        event = "probe_failed",
        probe_target = %target,
        duration_ms = whole_millis(started_at.elapsed()),
        error = %reason,
        "failed to connect to {}",
        target.host
    );

    let alert = AlertNotification::network_reachability_failure(topic_arn);
    if let Err(publish_error) = publisher.publish(&alert) {
        tracing::error!(
            component = "probe_handler",
            event = "alert_publish_failed",
            topic_arn = %alert.topic_arn,
            error = %publish_error,
            "failed to publish reachability alert"
        );
        return Err(ProbeError::AlertPublishFailed {
            topic_arn: alert.topic_arn,
            reason: publish_error,
            probe_failure: reason,
        });
    }

    tracing::warn!(
        component = "probe_handler",
        event = "alert_published",
        topic_arn = %alert.topic_arn,
        subject = %alert.subject,
        "reachability alert published"
    );

    Err(ProbeError::Unreachable {
        target: target.to_string(),
        reason,
    })
}

fn whole_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
