use bobsphere_common::Color3;

/// Linear color interpolation driven by frame deltas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTween {
    from: Color3,
    to: Color3,
    duration_ms: f64,
    elapsed_ms: f64,
}

impl ColorTween {
    pub fn new(from: Color3, to: Color3, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            elapsed_ms: 0.0,
        }
    }

    /// Advance by `delta_ms` and return the color at the new time.
    pub fn advance(&mut self, delta_ms: f64) -> Color3 {
        self.elapsed_ms = (self.elapsed_ms + delta_ms).min(self.duration_ms);
        self.current()
    }

    pub fn current(&self) -> Color3 {
        if self.duration_ms == 0.0 {
            return self.to;
        }
        self.from.lerp(self.to, self.elapsed_ms / self.duration_ms)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaches_target_exactly_at_duration() {
        let mut t = ColorTween::new(Color3::WHITE, Color3::BLACK, 1000.0);
        t.advance(400.0);
        assert!(!t.is_finished());
        assert_eq!(t.advance(600.0), Color3::BLACK);
        assert!(t.is_finished());
    }

    #[test]
    fn does_not_overshoot() {
        let mut t = ColorTween::new(Color3::WHITE, Color3::BLACK, 100.0);
        assert_eq!(t.advance(5000.0), Color3::BLACK);
    }

    #[test]
    fn zero_duration_is_immediate() {
        let t = ColorTween::new(Color3::WHITE, Color3::BLACK, 0.0);
        assert!(t.is_finished());
        assert_eq!(t.current(), Color3::BLACK);
    }

    #[test]
    fn halfway_is_midpoint() {
        let mut t = ColorTween::new(Color3::WHITE, Color3::BLACK, 1000.0);
        assert_eq!(t.advance(500.0), Color3::new(0.5, 0.5, 0.5));
    }
}
