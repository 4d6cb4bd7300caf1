use egress_probe_core::config::ProbeConfig;
use egress_probe_core::contract::{AlertNotification, InvocationResponse, ProbeTarget};
use egress_probe_lambda::adapters::connector::TcpReachabilityProbe;
use egress_probe_lambda::adapters::notifier::AlertPublisher;
use egress_probe_lambda::handlers::probe::handle_probe_invocation;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct SnsAlertPublisher {
    sns_client: aws_sdk_sns::Client,
}

impl AlertPublisher for SnsAlertPublisher {
    fn publish(&self, alert: &AlertNotification) -> Result<(), String> {
        let client = self.sns_client.clone();
        let topic_arn = alert.topic_arn.clone();
        let subject = alert.subject.clone();
        let message = alert.message.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .publish()
                    .topic_arn(topic_arn)
                    .subject(subject)
                    .message(message)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to publish alert to sns: {error}"))
            })
        })
    }
}

// The trigger payload carries nothing the probe needs.
async fn handle_request(
    event: LambdaEvent<Value>,
    sns_client: &aws_sdk_sns::Client,
) -> Result<InvocationResponse, Error> {
    tracing::info!(
        component = "probe_lambda",
        event = "invocation_received",
        request_id = %event.context.request_id,
        "probe invocation received"
    );

    let config = ProbeConfig::from_env();
    let publisher = SnsAlertPublisher {
        sns_client: sns_client.clone(),
    };

    let response = handle_probe_invocation(
        &config,
        &ProbeTarget::egress_default(),
        &TcpReachabilityProbe,
        &publisher,
    )?;
    Ok(response)
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "egress_probe_lambda=info,probe_lambda=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_timer(ChronoUtc::rfc_3339()),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let sns_client = aws_sdk_sns::Client::new(&aws_config);
    let shared_client = &sns_client;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handle_request(event, shared_client).await
    }))
    .await
}
