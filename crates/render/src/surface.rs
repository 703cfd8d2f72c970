/// Where the per-frame FPS text goes. In the browser this is a text element.
pub trait DisplaySurface {
    fn set_text(&mut self, text: &str);
}

/// In-memory surface that keeps the last text written.
#[derive(Debug, Default, Clone)]
pub struct TextSurface {
    text: String,
    writes: u64,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of times the surface has been written.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl DisplaySurface for TextSurface {
    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.writes += 1;
    }
}

/// Surface for headless runs: emits the readout as a trace event when it changes.
#[derive(Debug, Default)]
pub struct LogSurface {
    last: String,
}

impl DisplaySurface for LogSurface {
    fn set_text(&mut self, text: &str) {
        if self.last != text {
            tracing::trace!(readout = text, "display");
            self.last = text.to_owned();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_surface_keeps_last_write() {
        let mut s = TextSurface::new();
        s.set_text("12 fps");
        s.set_text("60 fps");
        assert_eq!(s.text(), "60 fps");
        assert_eq!(s.writes(), 2);
    }

    #[test]
    fn log_surface_tracks_changes() {
        let mut s = LogSurface::default();
        s.set_text("60 fps");
        s.set_text("60 fps");
        assert_eq!(s.last, "60 fps");
    }
}
