//! Device configuration: session lengths, environment thresholds and the
//! platform profile.
//!
//! Loaded once at startup and immutable thereafter. The engine takes a
//! [`FlowConfig`] by value; nothing here is global state.

use crate::time::TimeDuration;

/// Session lengths and environment thresholds for one flow.
#[derive(Debug, Clone, Copy)]
pub struct FlowConfig<D: TimeDuration> {
    /// Rainbow-chase intro length.
    pub intro: D,
    /// Focus session length.
    pub focus: D,
    /// Short break length (after focus sessions 0-2).
    pub short_break: D,
    /// Long break length (after the final focus session).
    pub long_break: D,
    /// Environment alert thresholds.
    pub env: EnvThresholds,
}

impl<D: TimeDuration> FlowConfig<D> {
    /// The device's stock configuration: 5 s intro, 20 min focus, 7 min short
    /// break, 15 min long break.
    pub fn standard() -> Self {
        Self {
            intro: D::from_millis(5 * 1000),
            focus: D::from_millis(20 * 60 * 1000),
            short_break: D::from_millis(7 * 60 * 1000),
            long_break: D::from_millis(15 * 60 * 1000),
            env: EnvThresholds::default(),
        }
    }
}

/// Environment thresholds that trigger alerts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EnvThresholds {
    /// Light voltage below which the room counts as dark, in volts.
    pub dark_volts: f32,
    /// Lower temperature bound, degrees Fahrenheit.
    pub cold_f: f32,
    /// Upper temperature bound, degrees Fahrenheit.
    pub hot_f: f32,
}

impl Default for EnvThresholds {
    fn default() -> Self {
        Self {
            dark_volts: 0.5,
            cold_f: 62.0,
            hot_f: 90.0,
        }
    }
}

/// Supported board platforms.
///
/// Selected once at startup from the runtime board name. An unrecognized name
/// is fatal before the scheduler ever runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Platform {
    /// Circuit Playground Bluefruit.
    Nrf52840,
    /// Circuit Playground Express.
    Samd21,
}

impl Platform {
    /// Resolves a platform from the board name reported by the runtime.
    pub fn from_board_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "nRF52840" => Ok(Platform::Nrf52840),
            "Atmel SAMD21" => Ok(Platform::Samd21),
            _ => Err(ConfigError::PlatformMismatch),
        }
    }

    /// Accelerometer double-tap sensitivity for this platform.
    ///
    /// Higher values are less sensitive.
    pub fn tap_threshold(self) -> u8 {
        match self {
            Platform::Nrf52840 => 30,
            Platform::Samd21 => 20,
        }
    }
}

/// Startup configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The board platform was not recognized.
    PlatformMismatch,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::PlatformMismatch => write!(f, "platform not recognized"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
