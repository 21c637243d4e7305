//! Race Alert Lambda - Sends one alert when a race falls in the current week.
//!
//! This Lambda runs daily via EventBridge and:
//! 1. Fetches the season's race calendar from OpenF1 (or the fallback list)
//! 2. Looks for a race between today and the coming Sunday (UTC)
//! 3. Publishes an alert for the earliest such race to SNS

use aws_sdk_sns::Client as SnsClient;
use chrono::Utc;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::Deserialize;
use shared::{run_check, CheckResponse, Config, OpenF1Client, SnsNotifier};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// EventBridge scheduled event
#[derive(Debug, Deserialize)]
struct ScheduledEvent {
    #[serde(default, rename = "detail-type")]
    detail_type: String,
}

struct AppState {
    openf1: OpenF1Client,
    notifier: SnsNotifier,
}

impl AppState {
    async fn new(config: Config) -> Result<Self, Error> {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let sns_client = SnsClient::new(&aws_config);

        let openf1 = OpenF1Client::from_config(&config)?;
        let notifier = SnsNotifier::new(sns_client, config.sns_topic_arn);

        Ok(Self { openf1, notifier })
    }
}

async fn handler(
    state: Arc<AppState>,
    event: LambdaEvent<ScheduledEvent>,
) -> Result<CheckResponse, Error> {
    info!(
        detail_type = %event.payload.detail_type,
        request_id = %event.context.request_id,
        "Starting race check"
    );

    let today = Utc::now().date_naive();
    let outcome = run_check(today, &state.openf1, &state.notifier).await?;

    info!(
        origin = ?outcome.origin,
        races_considered = outcome.races_considered,
        alerted = outcome.alerted.is_some(),
        "Race check complete"
    );

    Ok(CheckResponse::complete())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;
    info!(season = config.season, base_url = %config.openf1_base_url, "Loaded configuration");

    let state = Arc::new(AppState::new(config).await?);
    let state_clone = state.clone();

    run(service_fn(move |event| {
        let state = state_clone.clone();
        async move { handler(state, event).await }
    }))
    .await
}
