//! Site colours shared by the canvas and GL effects.

/// 8-bit-per-channel colour, stored as floats so lerped values stay exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

pub const NEON_PURPLE: Rgb = Rgb::new(139.0, 92.0, 246.0);
pub const NEON_CYAN: Rgb = Rgb::new(6.0, 182.0, 212.0);
pub const NEON_PINK: Rgb = Rgb::new(236.0, 72.0, 153.0);

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Channels in 0..1 for GL vertex colours.
    pub fn to_unit(self) -> [f32; 3] {
        [self.r / 255.0, self.g / 255.0, self.b / 255.0]
    }

    /// CSS `rgba()` string; alpha is clamped to 0..1.
    pub fn css(self, alpha: f32) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r.round() as u8,
            self.g.round() as u8,
            self.b.round() as u8,
            alpha.clamp(0.0, 1.0)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(NEON_PURPLE.lerp(NEON_CYAN, 0.0), NEON_PURPLE);
        assert_eq!(NEON_PURPLE.lerp(NEON_CYAN, 1.0), NEON_CYAN);
    }

    #[test]
    fn css_clamps_alpha() {
        assert_eq!(NEON_CYAN.css(2.0), "rgba(6, 182, 212, 1)");
        assert_eq!(NEON_PURPLE.css(-1.0), "rgba(139, 92, 246, 0)");
    }
}
