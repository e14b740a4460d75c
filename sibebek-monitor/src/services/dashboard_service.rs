use tokio::sync::mpsc::Receiver;

use crate::errors::MonitorError;
use crate::models::{DashboardState, IngestEvent};
use crate::render::{Renderer, Snapshot};

/// Single consumer of ingest events. Owns the cached readings and redraws
/// after every event.
pub struct DashboardService {
    state: DashboardState,
    receiver: Receiver<IngestEvent>,
    renderer: Box<dyn Renderer>,
}

impl DashboardService {
    pub fn new(receiver: Receiver<IngestEvent>, renderer: Box<dyn Renderer>) -> Self {
        Self {
            state: DashboardState::new(),
            receiver,
            renderer,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Draws the initial frame, then one frame per event until every sender
    /// is dropped. Returns the final state.
    pub async fn run(mut self) -> Result<DashboardState, MonitorError> {
        self.draw()?;

        while let Some(event) = self.receiver.recv().await {
            self.handle(&event)?;
        }

        Ok(self.state)
    }

    pub fn handle(&mut self, event: &IngestEvent) -> Result<(), MonitorError> {
        self.state.apply(event);
        self.draw()
    }

    fn draw(&mut self) -> Result<(), MonitorError> {
        self.renderer.render(&Snapshot::capture(&self.state))
    }
}
