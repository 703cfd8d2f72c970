use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Spatial transform of the actor: position and scale.
///
/// Components are `f64` so frame arithmetic matches the double-precision
/// numbers the browser engine works in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: DVec3,
    pub scale: DVec3,
}

impl Transform {
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            scale: DVec3::ONE,
        }
    }
}

/// Linear RGB color, each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color3 {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color3 {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Interpolate toward `other`. `t` is clamped to `[0, 1]`, and `t == 1`
    /// returns `other` exactly.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return other;
        }
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position, DVec3::ZERO);
        assert_eq!(t.scale, DVec3::ONE);
    }

    #[test]
    fn transform_at_keeps_unit_scale() {
        let t = Transform::at(DVec3::new(0.0, 5.0, 0.0));
        assert_eq!(t.position.y, 5.0);
        assert_eq!(t.scale, DVec3::ONE);
    }

    #[test]
    fn color_lerp_endpoints() {
        let c = Color3::WHITE.lerp(Color3::BLACK, 0.0);
        assert_eq!(c, Color3::WHITE);
        let c = Color3::WHITE.lerp(Color3::BLACK, 1.0);
        assert_eq!(c, Color3::BLACK);
    }

    #[test]
    fn color_lerp_midpoint_and_clamp() {
        let c = Color3::WHITE.lerp(Color3::BLACK, 0.5);
        assert_eq!(c, Color3::new(0.5, 0.5, 0.5));
        assert_eq!(Color3::WHITE.lerp(Color3::BLACK, 3.0), Color3::BLACK);
        assert_eq!(Color3::WHITE.lerp(Color3::BLACK, -1.0), Color3::WHITE);
    }
}
