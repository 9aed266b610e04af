//! Pixel types, device colors and color helpers.
//!
//! Colors are `palette::Srgb<u8>` triples (0-255 per channel), matching what
//! the LED strip hardware consumes. A [`PixelFrame`] is always the complete
//! strip state; partial updates do not exist at this layer.

use palette::Srgb;

/// Number of pixels on the onboard strip.
pub const PIXEL_COUNT: usize = 10;

/// A single RGB pixel.
pub type Pixel = Srgb<u8>;

/// The full strip state at one instant.
pub type PixelFrame = [Pixel; PIXEL_COUNT];

pub const BLACK: Pixel = Srgb::new(0, 0, 0);
pub const PINKISH: Pixel = Srgb::new(255, 0, 255);
pub const BLUEISH: Pixel = Srgb::new(0, 255, 255);
pub const BLUE: Pixel = Srgb::new(0, 0, 255);
pub const OLD_LACE: Pixel = Srgb::new(253, 245, 230);
pub const JADE: Pixel = Srgb::new(0, 255, 40);

/// Overlay color for status checks during breaks.
pub const STATUS_RED: Pixel = Srgb::new(255, 0, 0);
/// Overlay color for status checks during focus sessions.
pub const STATUS_WHITE: Pixel = Srgb::new(255, 255, 255);

/// Classic 256-position color wheel.
///
/// Walks red -> green -> blue -> red as `pos` goes 0-255. Input wraps
/// naturally since it is a `u8`.
pub fn colorwheel(pos: u8) -> Pixel {
    if pos < 85 {
        Srgb::new(255 - pos * 3, pos * 3, 0)
    } else if pos < 170 {
        let pos = pos - 85;
        Srgb::new(0, 255 - pos * 3, pos * 3)
    } else {
        let pos = pos - 170;
        Srgb::new(pos * 3, 0, 255 - pos * 3)
    }
}

/// Scales a color by an intensity factor.
///
/// The factor is clamped to `0.0..=1.0`, so feeding a raw sine value produces
/// black for the negative half-cycle.
pub fn with_intensity(color: Pixel, intensity: f32) -> Pixel {
    let intensity = intensity.clamp(0.0, 1.0);
    Srgb::new(
        (f32::from(color.red) * intensity) as u8,
        (f32::from(color.green) * intensity) as u8,
        (f32::from(color.blue) * intensity) as u8,
    )
}
