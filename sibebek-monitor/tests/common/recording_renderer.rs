use std::sync::{Arc, Mutex};

use sibebek_monitor::errors::MonitorError;
use sibebek_monitor::render::{Renderer, Snapshot};

/// Keeps every frame it is asked to draw.
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    pub frames: Arc<Mutex<Vec<Snapshot>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<Snapshot> {
        self.frames.lock().unwrap().clone()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), MonitorError> {
        self.frames.lock().unwrap().push(snapshot.clone());

        Ok(())
    }
}
