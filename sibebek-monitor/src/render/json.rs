use std::io::Write;

use crate::errors::MonitorError;
use crate::render::{Renderer, Snapshot};

/// One JSON document per frame, newline delimited.
pub struct JsonRenderer<W: Write> {
    writer: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Renderer for JsonRenderer<W> {
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), MonitorError> {
        serde_json::to_writer(&mut self.writer, snapshot)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;

        Ok(())
    }
}
