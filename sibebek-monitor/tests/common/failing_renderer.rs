use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use sibebek_monitor::errors::MonitorError;
use sibebek_monitor::render::{Renderer, Snapshot};

/// Fails every draw, as a closed terminal would.
#[derive(Clone, Default)]
pub struct FailingRenderer {
    pub attempts: Arc<AtomicUsize>,
}

impl FailingRenderer {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl Renderer for FailingRenderer {
    fn render(&mut self, _snapshot: &Snapshot) -> Result<(), MonitorError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed").into())
    }
}
