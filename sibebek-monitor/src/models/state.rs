use serde::Serialize;
use time::OffsetDateTime;

use sibebek_advisor::{Readings, Recommendation, advise};
use sibebek_api::{Channel, ConnectionStatus, Reading};

use crate::models::IngestEvent;

/// Latest value per channel plus the broker status. Owned by the dashboard
/// loop; the ingestor only reaches it through [`IngestEvent`]s.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardState {
    pub temperature: Reading,
    pub humidity: Reading,
    pub ammonia: Reading,
    pub status: ConnectionStatus,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: &IngestEvent) {
        match *event {
            IngestEvent::Reading { channel, reading } => {
                *self.reading_mut(channel) = reading;
                self.updated_at = Some(OffsetDateTime::now_utc());
            }
            // Status never touches cached readings
            IngestEvent::Status(status) => self.status = status,
        }
    }

    pub fn reading(&self, channel: Channel) -> Reading {
        match channel {
            Channel::Temperature => self.temperature,
            Channel::Humidity => self.humidity,
            Channel::Ammonia => self.ammonia,
        }
    }

    fn reading_mut(&mut self, channel: Channel) -> &mut Reading {
        match channel {
            Channel::Temperature => &mut self.temperature,
            Channel::Humidity => &mut self.humidity,
            Channel::Ammonia => &mut self.ammonia,
        }
    }

    pub fn readings(&self) -> Readings {
        Readings::from_cached(self.temperature, self.humidity, self.ammonia)
    }

    pub fn recommendations(&self) -> Vec<Recommendation> {
        advise(&self.readings())
    }

    /// Channels that have not delivered anything yet.
    pub fn pending(&self) -> Vec<Channel> {
        Channel::ALL
            .into_iter()
            .filter(|channel| self.reading(*channel).is_pending())
            .collect()
    }
}
