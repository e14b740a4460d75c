use std::io;
use std::sync::Arc;

use tokio::signal;
use tokio::sync::mpsc;

use crate::configs::Settings;
use crate::errors::MonitorError;
use crate::render::{Renderer, create_renderer};
use crate::services::{DashboardService, IngestService};

pub mod configs;
pub mod errors;
pub mod models;
pub mod render;
pub mod services;

const EVENT_BUFFER: usize = 32;

pub async fn run(settings: &Arc<Settings>) -> Result<(), MonitorError> {
    let renderer = create_renderer(&settings.dashboard, io::stdout());

    serve(settings, renderer, signal::ctrl_c()).await
}

/// Ingests into the dashboard until the renderer fails, the ingestor stops or
/// `shutdown` resolves. The broker link is torn down in every case.
pub async fn serve<F>(settings: &Settings, renderer: Box<dyn Renderer>, shutdown: F) -> Result<(), MonitorError>
where
    F: Future,
{
    let (sender, receiver) = mpsc::channel(EVENT_BUFFER);

    let ingest = IngestService::new(&settings.broker, &sender)?;
    let client = ingest.client();
    drop(sender);

    tracing::info!("Connecting to MQTT broker at: {}", settings.broker.url);

    let ingest_handle = ingest.spawn();
    let dashboard = DashboardService::new(receiver, renderer);

    let outcome = tokio::select! {
        result = dashboard.run() => result.map(|_| ()),
        _ = shutdown => {
            tracing::info!("shutting down");
            Ok(())
        }
    };

    if let Err(e) = client.try_disconnect() {
        tracing::debug!("disconnect skipped: {}", e);
    }
    ingest_handle.abort();

    outcome
}
