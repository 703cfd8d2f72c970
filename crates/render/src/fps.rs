/// Frames-per-second estimate over a sliding window of frame deltas.
#[derive(Debug)]
pub struct FpsCounter {
    history: Vec<f64>,
    capacity: usize,
    index: usize,
    filled: bool,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(60)
    }
}

impl FpsCounter {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            history: vec![0.0; capacity],
            capacity,
            index: 0,
            filled: false,
        }
    }

    /// Record one frame's delta in milliseconds. Deltas that are not finite
    /// and positive are skipped.
    pub fn record(&mut self, delta_ms: f64) {
        if !(delta_ms.is_finite() && delta_ms > 0.0) {
            return;
        }
        self.history[self.index] = delta_ms;
        self.index = (self.index + 1) % self.capacity;
        if self.index == 0 {
            self.filled = true;
        }
    }

    pub fn count(&self) -> usize {
        if self.filled {
            self.capacity
        } else {
            self.index
        }
    }

    pub fn average_ms(&self) -> f64 {
        let count = self.count();
        if count == 0 {
            return 0.0;
        }
        self.history[..count].iter().sum::<f64>() / count as f64
    }

    /// Current estimate; zero until a frame has been recorded.
    pub fn fps(&self) -> f64 {
        let avg = self.average_ms();
        if avg > 0.0 { 1000.0 / avg } else { 0.0 }
    }

    /// Text for the display surface, e.g. `"60 fps"`.
    pub fn readout(&self) -> String {
        format!("{} fps", self.fps().round() as u64)
    }
}
