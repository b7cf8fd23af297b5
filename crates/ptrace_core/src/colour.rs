//! Linear colour handling.

use ptrace_math::Vec3;

/// Colour type alias (linear RGB radiance, not clamped)
pub type Color = Vec3;

const DISPLAY_GAMMA: f64 = 2.2;

/// Convert linear radiance to 8-bit display values.
///
/// Channels are clamped to [0, 1], gamma encoded with 1/2.2 and floored.
pub fn colour_to_bytes(colour: Color) -> [u8; 3] {
    let encode = |c: f64| (c.clamp(0.0, 1.0).powf(1.0 / DISPLAY_GAMMA) * 255.0).floor() as u8;
    [encode(colour.x), encode(colour.y), encode(colour.z)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_to_bytes_clamps() {
        assert_eq!(colour_to_bytes(Color::splat(2.0)), [255, 255, 255]);
        assert_eq!(colour_to_bytes(Color::ONE), [255, 255, 255]);
        assert_eq!(colour_to_bytes(Color::ZERO), [0, 0, 0]);
        assert_eq!(colour_to_bytes(Color::splat(-1.0)), [0, 0, 0]);
    }

    #[test]
    fn test_colour_to_bytes_gamma() {
        // 0.5^(1/2.2) * 255 = 186.0...
        assert_eq!(colour_to_bytes(Color::new(0.5, 0.0, 1.0)), [186, 0, 255]);
    }
}
