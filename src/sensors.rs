//! Semantic sensor readings over the raw peripheral traits.
//!
//! [`SensorGateway`] turns raw thermistor/ADC/accelerometer access into the
//! three readings the engine cares about: temperature in Fahrenheit, averaged
//! light voltage, and a consumed tap event. Readings are computed fresh on
//! every call; nothing is cached across ticks.

use heapless::Vec;

use crate::hal::{Accelerometer, LightSensor, SensorError, Thermistor};

/// Number of consecutive ADC samples averaged into one light reading.
pub const LIGHT_SAMPLE_COUNT: usize = 20;

/// 16-bit ADC full scale.
const ADC_FULL_SCALE: f32 = 65535.0;

/// Semantic sensor readings consumed by the session and alert loops.
pub trait Sensors {
    /// Current temperature in degrees Fahrenheit.
    fn temperature_f(&mut self) -> Result<f32, SensorError>;

    /// Light level as averaged voltage across the sense resistor.
    fn light_voltage(&mut self) -> Result<f32, SensorError>;

    /// Returns true once per detected double-tap, consuming the event.
    fn poll_tap(&mut self) -> bool;
}

/// The device's sensor gateway over raw drivers.
pub struct SensorGateway<T: Thermistor, L: LightSensor, A: Accelerometer> {
    thermistor: T,
    light: L,
    accel: A,
}

impl<T: Thermistor, L: LightSensor, A: Accelerometer> SensorGateway<T, L, A> {
    /// Creates a gateway over the given drivers.
    pub fn new(thermistor: T, light: L, accel: A) -> Self {
        Self {
            thermistor,
            light,
            accel,
        }
    }
}

impl<T: Thermistor, L: LightSensor, A: Accelerometer> Sensors for SensorGateway<T, L, A> {
    fn temperature_f(&mut self) -> Result<f32, SensorError> {
        let celsius = self.thermistor.temperature_c()?;
        Ok(fahrenheit(celsius))
    }

    fn light_voltage(&mut self) -> Result<f32, SensorError> {
        // Back-to-back samples with no artificial delay; the tick rate is the
        // sampling rate.
        let mut samples: Vec<f32, LIGHT_SAMPLE_COUNT> = Vec::new();
        for _ in 0..LIGHT_SAMPLE_COUNT {
            let raw = self.light.raw_value()?;
            let volts = f32::from(raw) / ADC_FULL_SCALE * self.light.reference_voltage();
            // Capacity equals the loop bound, so the push cannot fail.
            let _ = samples.push(volts);
        }
        let sum: f32 = samples.iter().sum();
        Ok(sum / samples.len() as f32)
    }

    fn poll_tap(&mut self) -> bool {
        self.accel.consume_tap()
    }
}

/// Celsius to Fahrenheit.
pub fn fahrenheit(celsius: f32) -> f32 {
    celsius * 1.8 + 32.0
}
