use std::io::Write;

use crate::errors::MonitorError;
use crate::render::{Renderer, Snapshot};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Human readable frame, redrawn in place when `clear` is set.
pub struct TextRenderer<W: Write> {
    writer: W,
    clear: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(writer: W, clear: bool) -> Self {
        Self { writer, clear }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn draw(&mut self, snapshot: &Snapshot) -> std::io::Result<()> {
        let out = &mut self.writer;

        if self.clear {
            write!(out, "{CLEAR_SCREEN}")?;
        }

        writeln!(out, "Sibebek Farm Monitoring")?;
        writeln!(out, "Real-time environmental monitoring system")?;
        let marker = if snapshot.status.is_connected() { "●" } else { "○" };
        writeln!(out, "{marker} {}", snapshot.status)?;
        writeln!(out)?;

        for channel in &snapshot.channels {
            writeln!(out, "  {:<12} {:>8} {}", channel.label, channel.display_value(), channel.unit)?;
        }

        if !snapshot.waiting_for.is_empty() {
            let names: Vec<&str> = snapshot.waiting_for.iter().map(|channel| channel.name()).collect();
            writeln!(out, "  (waiting for readings: {})", names.join(", "))?;
        }

        writeln!(out)?;
        writeln!(out, "Recommendations")?;
        for message in &snapshot.messages {
            writeln!(out, "  - {message}")?;
        }

        out.flush()
    }
}

impl<W: Write + Send> Renderer for TextRenderer<W> {
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), MonitorError> {
        Ok(self.draw(snapshot)?)
    }
}

#[cfg(test)]
mod tests {
    use sibebek_api::{Channel, ConnectionStatus};

    use super::*;
    use crate::models::{DashboardState, IngestEvent};

    fn render(state: &DashboardState) -> String {
        let mut renderer = TextRenderer::new(Vec::new(), false);
        renderer.render(&Snapshot::capture(state)).unwrap();

        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_render_full_frame() {
        let mut state = DashboardState::new();
        state.apply(&IngestEvent::Status(ConnectionStatus::Connected));
        state.apply(&IngestEvent::reading(Channel::Temperature, 25.0));
        state.apply(&IngestEvent::reading(Channel::Humidity, 85.0));
        state.apply(&IngestEvent::reading(Channel::Ammonia, 30.0));

        let frame = render(&state);

        assert!(frame.contains("● Connected"));
        assert!(frame.contains("25.0 °C"));
        assert!(frame.contains("85.0 %"));
        assert!(frame.contains("30.0 ppm"));
        assert!(!frame.contains("waiting for readings"));

        let temperature = frame.find("(temperature is too high)").unwrap();
        let humidity = frame.find("(humidity is too high)").unwrap();
        let ammonia = frame.find("(ammonia gas level is too high)").unwrap();
        assert!(temperature < humidity && humidity < ammonia);
    }

    #[test]
    fn test_render_waiting() {
        let frame = render(&DashboardState::new());

        assert!(frame.contains("○ Connecting..."));
        assert!(frame.contains("(waiting for readings: temperature, humidity, ammonia)"));
        assert!(frame.contains("All conditions are optimal. No action needed."));
        assert!(!frame.contains(CLEAR_SCREEN));
    }

    #[test]
    fn test_clear_screen_prefix() {
        let mut renderer = TextRenderer::new(Vec::new(), true);
        renderer.render(&Snapshot::capture(&DashboardState::new())).unwrap();

        assert!(renderer.into_inner().starts_with(CLEAR_SCREEN.as_bytes()));
    }
}
