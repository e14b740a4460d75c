use std::io::Write;

use serde::Serialize;
use time::OffsetDateTime;

use sibebek_advisor::Recommendation;
use sibebek_api::{Channel, ConnectionStatus, Reading};

use crate::configs::{Dashboard, OutputFormat};
use crate::errors::MonitorError;
use crate::models::DashboardState;

mod json;
mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;

pub trait Renderer: Send {
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), MonitorError>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelSnapshot {
    pub channel: Channel,
    pub label: &'static str,
    pub unit: &'static str,
    pub reading: Reading,
}

impl ChannelSnapshot {
    /// One decimal place, `--` while pending.
    pub fn display_value(&self) -> String {
        match self.reading {
            Reading::Pending => "--".to_string(),
            Reading::Value(value) if value == f64::INFINITY => "Infinity".to_string(),
            Reading::Value(value) if value == f64::NEG_INFINITY => "-Infinity".to_string(),
            Reading::Value(value) => format!("{value:.1}"),
        }
    }
}

/// Everything a single frame shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub status: ConnectionStatus,
    pub channels: Vec<ChannelSnapshot>,
    pub recommendations: Vec<Recommendation>,
    pub messages: Vec<&'static str>,
    pub waiting_for: Vec<Channel>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Snapshot {
    pub fn capture(state: &DashboardState) -> Self {
        let recommendations = state.recommendations();

        Self {
            status: state.status,
            channels: Channel::ALL
                .into_iter()
                .map(|channel| ChannelSnapshot {
                    channel,
                    label: channel.label(),
                    unit: channel.unit(),
                    reading: state.reading(channel),
                })
                .collect(),
            messages: recommendations.iter().map(Recommendation::message).collect(),
            recommendations,
            waiting_for: state.pending(),
            updated_at: state.updated_at,
        }
    }
}

pub fn create_renderer<W>(dashboard: &Dashboard, writer: W) -> Box<dyn Renderer>
where
    W: Write + Send + 'static,
{
    match dashboard.format {
        OutputFormat::Text => Box::new(TextRenderer::new(writer, dashboard.clear_screen)),
        OutputFormat::Json => Box::new(JsonRenderer::new(writer)),
    }
}
