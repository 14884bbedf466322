//! Dialog Foundry daemon.
//!
//! Runs the periodic segmentation job against the configured stores. The
//! scaffold wires the in-memory adapters; production deployments swap in
//! persistent implementations behind the same ports.

use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use dialog_foundry::adapters::memory::{InMemoryEventStore, InMemoryReviewQueue};
use dialog_foundry::application::handlers::SegmentDialogueHandler;
use dialog_foundry::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::load()?;
    config.validate()?;
    info!(
        template_dir = %config.bot.template_dir.display(),
        interval_secs = config.segmenter.interval_secs,
        "dialog-foundry starting"
    );

    let event_store = Arc::new(InMemoryEventStore::new());
    let review_queue = Arc::new(InMemoryReviewQueue::new());
    let segmenter = SegmentDialogueHandler::new(event_store, review_queue);

    let mut ticker =
        tokio::time::interval(std::time::Duration::from_secs(config.segmenter.interval_secs));
    loop {
        ticker.tick().await;
        match segmenter.handle().await {
            Ok(result) => info!(
                watermark = result.watermark,
                events_read = result.events_read,
                items_created = result.items_created,
                "segmentation run complete"
            ),
            Err(e) => error!(error = %e, "segmentation run failed"),
        }
    }
}
