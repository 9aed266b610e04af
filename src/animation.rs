//! Frame generators for the LED strip.
//!
//! Rendering is a pure function of time, not of the previous frame: the same
//! inputs always produce the same [`PixelFrame`], which makes animations
//! testable without simulating the whole polling loop. The one documented
//! exception is [`Animation::Fade`], whose breathing pulse follows wall-clock
//! time so it stays phase-continuous across sessions.

use libm::sinf;

use crate::colors::{colorwheel, with_intensity, Pixel, PixelFrame, BLACK, PIXEL_COUNT};
use crate::time::TimeDuration;
use crate::types::{SessionKind, SessionSpec};

/// One full idle-rainbow rotation takes this long.
const IDLE_CYCLE_MS: u64 = 5_000;

/// Remaining time below which a break's fade switches to its warning color.
const ENDING_SOON_MS: u64 = 15_000;

/// A closed set of animation variants, one per session flavor.
///
/// The variant set is fixed, so dispatch is a plain `match` rather than a
/// trait object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Animation {
    /// Continuous rainbow rotation shown outside any timed session. Ignores
    /// `elapsed` and `total`.
    IdleRainbow,
    /// Moving color-wheel chase; one full sweep per session duration.
    ChasingRainbow,
    /// Breathing pulse between two colors: `color0` normally, `color1` once
    /// less than 15 s remain.
    Fade {
        /// Normal color.
        color0: Pixel,
        /// Ending-soon warning color.
        color1: Pixel,
    },
    /// Full hue rotation across the strip, one cycle per session duration.
    FocusRainbow,
}

impl Animation {
    /// Picks the animation for a session spec.
    pub fn for_session<D: TimeDuration>(spec: &SessionSpec<D>) -> Self {
        match spec.kind {
            SessionKind::Intro => Animation::ChasingRainbow,
            SessionKind::Focus => Animation::FocusRainbow,
            SessionKind::ShortBreak | SessionKind::LongBreak => Animation::Fade {
                color0: spec.colors.0,
                color1: spec.colors.1,
            },
        }
    }

    /// Renders the frame for one instant.
    ///
    /// `wall` is time since the engine's epoch, `elapsed` is time within the
    /// current session, `total` the session duration. All ten pixels are
    /// computed on every call regardless of any overlay the caller may paint
    /// afterwards.
    pub fn render<D: TimeDuration>(&self, wall: D, elapsed: D, total: D) -> PixelFrame {
        let mut frame = [BLACK; PIXEL_COUNT];

        match *self {
            Animation::IdleRainbow => {
                let offset = wall.as_millis() * 256 / IDLE_CYCLE_MS;
                for (i, pixel) in frame.iter_mut().enumerate() {
                    *pixel = colorwheel((spread(i) + offset) as u8);
                }
            }
            Animation::ChasingRainbow => {
                // Sweep index advances 0..=255 over the session, then wraps.
                let sweep = scaled_progress(elapsed, total, 255);
                for (i, pixel) in frame.iter_mut().enumerate() {
                    *pixel = colorwheel((spread(i) + sweep * 5) as u8);
                }
            }
            Animation::Fade { color0, color1 } => {
                let secs = wall.as_millis() as f32 / 1000.0;
                let intensity = 0.45 * sinf(1.25 * secs) + 0.55;
                let remaining = total.saturating_sub(elapsed);
                let color = if remaining.as_millis() >= ENDING_SOON_MS {
                    color0
                } else {
                    color1
                };
                frame = [with_intensity(color, intensity); PIXEL_COUNT];
            }
            Animation::FocusRainbow => {
                let rotation = scaled_progress(elapsed, total, 256);
                for (i, pixel) in frame.iter_mut().enumerate() {
                    *pixel = colorwheel((spread(i) + rotation) as u8);
                }
            }
        }

        frame
    }
}

/// Wheel offset spreading the 256 positions evenly across the strip.
fn spread(index: usize) -> u64 {
    (index * 256 / PIXEL_COUNT) as u64
}

/// Session progress scaled to `0..steps`, wrapping mod 256 via the `u8` cast
/// at the call site. A zero-length session pins progress at zero.
fn scaled_progress<D: TimeDuration>(elapsed: D, total: D, steps: u64) -> u64 {
    let total_ms = total.as_millis();
    if total_ms == 0 {
        0
    } else {
        elapsed.as_millis() * steps / total_ms % 256
    }
}
