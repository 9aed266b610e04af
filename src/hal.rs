//! Hardware capability traits and error taxonomy.
//!
//! The core consumes peripherals exclusively through these traits. Implement
//! them against your board's drivers (GPIO, ADC, I2C accelerometer, audio
//! DAC); the engine itself never touches a register.

use crate::colors::PixelFrame;

/// Trait for abstracting the LED strip.
pub trait PixelStrip {
    /// Writes a full frame to the strip and latches it.
    ///
    /// A failed write is fatal to the engine; there is no degraded display
    /// mode, so implementations should not silently drop frames.
    fn show(&mut self, frame: &PixelFrame) -> Result<(), HardwareError>;
}

/// Trait for abstracting the thermistor.
///
/// Implementations own the Beta-model calibration constants (nominal
/// resistance, nominal temperature, beta coefficient, series resistance) and
/// report degrees Celsius.
pub trait Thermistor {
    /// Reads the current temperature in degrees Celsius.
    fn temperature_c(&mut self) -> Result<f32, SensorError>;
}

/// Trait for abstracting the analog light sensor.
pub trait LightSensor {
    /// Reads one raw ADC sample (16-bit full scale).
    fn raw_value(&mut self) -> Result<u16, SensorError>;

    /// The ADC reference voltage, in volts.
    fn reference_voltage(&self) -> f32;
}

/// Trait for abstracting the accelerometer's double-tap detection.
pub trait Accelerometer {
    /// Returns true once per detected double-tap.
    ///
    /// The call consumes the event; implementations must edge-detect and never
    /// report the same tap twice.
    fn consume_tap(&mut self) -> bool;
}

/// Trait for abstracting a digital input (switch or button).
pub trait InputPin {
    /// Raw level read. No debouncing beyond what the tick rate provides.
    fn is_high(&self) -> bool;
}

/// Trait for abstracting the speaker.
pub trait Speaker {
    /// Starts playing a tone at the given frequency.
    ///
    /// `duration_hint_ms` tells the driver roughly how long the tone will be
    /// held before [`Speaker::stop`], which it may use for buffer sizing. The
    /// tone keeps playing until stopped regardless of the hint.
    fn play_tone(&mut self, frequency_hz: f32, duration_hint_ms: u64) -> Result<(), HardwareError>;

    /// Stops any playing tone.
    fn stop(&mut self) -> Result<(), HardwareError>;
}

/// Fatal hardware write failure.
///
/// Propagated straight out of the engine; there is no core-level retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HardwareError {
    /// LED strip write failed.
    Display,
    /// Speaker write failed.
    Audio,
}

impl core::fmt::Display for HardwareError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HardwareError::Display => write!(f, "pixel strip write failed"),
            HardwareError::Audio => write!(f, "speaker write failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HardwareError {}

/// Transient sensor read failure.
///
/// A bad sample is logged and the read is simply retried on the next tick; no
/// stale value is substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Thermistor read failed.
    Thermistor,
    /// Light sensor read failed.
    Light,
}

impl core::fmt::Display for SensorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SensorError::Thermistor => write!(f, "thermistor read failed"),
            SensorError::Light => write!(f, "light sensor read failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SensorError {}
