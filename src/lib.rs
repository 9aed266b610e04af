#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`FlowScheduler`**: Sequences a full flow (intro + four focus/break cycles)
//! - **`SessionRunner`**: Drives one timed session's polling loop and returns an exit disposition
//! - **`AlertMonitor`**: Blocking temperature/light alert sub-loops, gated by the slide switch
//! - **`Animation`**: Closed set of frame generators (rainbow chase, focus rainbow, fade, idle)
//! - **`SensorGateway` / `InputGateway`**: Semantic readings over raw peripheral traits
//! - **`Clock` / `Delay`**: Traits to implement for your timing system
//! - **`PixelStrip` / `Speaker` / sensor traits**: Traits to implement for your hardware
//!
//! Pixels are `palette::Srgb<u8>` triples; a frame is always the full 10-pixel
//! strip state. When implementing `PixelStrip` for your hardware, write the
//! frame out in your device's native order and color format.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

// Logging forwards to defmt when enabled and evaporates otherwise, so the
// core stays usable on targets without a log transport.
macro_rules! device_info {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        defmt::info!($s $(, $x)*);
        #[cfg(not(feature = "defmt"))]
        let _ = ($( & $x ),*);
    }};
}

macro_rules! device_warn {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        defmt::warn!($s $(, $x)*);
        #[cfg(not(feature = "defmt"))]
        let _ = ($( & $x ),*);
    }};
}

pub mod alert;
pub mod animation;
pub mod colors;
pub mod config;
pub mod flow;
pub mod hal;
pub mod input;
pub mod sensors;
pub mod session;
pub mod time;
pub mod types;

pub use alert::{AlertMonitor, TONE_BURST_MS, TONE_FREQUENCY_HZ};
pub use animation::Animation;
pub use colors::{
    colorwheel, with_intensity, Pixel, PixelFrame, BLACK, BLUE, BLUEISH, JADE, OLD_LACE, PINKISH,
    PIXEL_COUNT, STATUS_RED, STATUS_WHITE,
};
pub use config::{ConfigError, EnvThresholds, FlowConfig, Platform};
pub use flow::{FlowOutcome, FlowScheduler, FOCUS_CYCLES};
pub use hal::{
    Accelerometer, HardwareError, InputPin, LightSensor, PixelStrip, SensorError, Speaker,
    Thermistor,
};
pub use input::{InputGateway, Inputs};
pub use sensors::{SensorGateway, Sensors, LIGHT_SAMPLE_COUNT};
pub use session::{SessionRunner, StatusOverlay, SETTLE_DELAY_MS, STATUS_OVERLAY_MS};
pub use time::{Clock, ClockDuration, Delay, TimeDuration, TimeInstant};
pub use types::{SessionKind, SessionResult, SessionSpec};
