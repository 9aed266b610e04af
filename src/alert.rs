//! Environment alert sub-loops for temperature and light.
//!
//! Both monitors are blocking polling loops bounded only by their external
//! condition: they hold the tick hostage until the environment recovers or
//! the user flips the alert switch off. That priority inversion is
//! deliberate; the governing session's deadline slips by however long the
//! alert runs.
//!
//! A transient sensor failure aborts the sub-loop for this tick; the read is
//! retried on the next one.

use libm::sinf;

use crate::colors::{with_intensity, JADE, PIXEL_COUNT};
use crate::config::EnvThresholds;
use crate::hal::{HardwareError, PixelStrip, Speaker};
use crate::input::Inputs;
use crate::sensors::Sensors;
use crate::time::{Clock, Delay, TimeDuration, TimeInstant};

/// Alert tone frequency.
pub const TONE_FREQUENCY_HZ: f32 = 415.0;

/// Length of one alert tone burst.
pub const TONE_BURST_MS: u64 = 1_000;

/// Runs the temperature and light alert sub-loops.
///
/// Constructed per tick by the session runner, borrowing the peripherals it
/// needs. Exclusive ownership of the strip and speaker while a monitor runs
/// is guaranteed by the single-threaded call order.
pub struct AlertMonitor<'a, C, D, S, In, P, K>
where
    C: Clock,
    D: Delay,
    S: Sensors,
    In: Inputs,
    P: PixelStrip,
    K: Speaker,
{
    clock: &'a C,
    epoch: C::Instant,
    delay: &'a mut D,
    sensors: &'a mut S,
    inputs: &'a In,
    pixels: &'a mut P,
    speaker: &'a mut K,
    env: &'a EnvThresholds,
}

impl<'a, C, D, S, In, P, K> AlertMonitor<'a, C, D, S, In, P, K>
where
    C: Clock,
    D: Delay,
    S: Sensors,
    In: Inputs,
    P: PixelStrip,
    K: Speaker,
{
    /// Borrows the peripherals for one monitoring pass.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        clock: &'a C,
        epoch: C::Instant,
        delay: &'a mut D,
        sensors: &'a mut S,
        inputs: &'a In,
        pixels: &'a mut P,
        speaker: &'a mut K,
        env: &'a EnvThresholds,
    ) -> Self {
        Self {
            clock,
            epoch,
            delay,
            sensors,
            inputs,
            pixels,
            speaker,
            env,
        }
    }

    /// Sounds the alert tone while the temperature is out of range.
    ///
    /// Re-polls the thermistor after every burst. Returns as soon as the
    /// reading is back in `[cold, hot]` or the user disables alert mode.
    pub fn watch_temperature(&mut self) -> Result<(), HardwareError> {
        loop {
            let temp_f = match self.sensors.temperature_f() {
                Ok(value) => value,
                Err(err) => {
                    device_warn!("thermistor read failed, retrying next tick: {}", err);
                    return Ok(());
                }
            };

            if temp_f >= self.env.cold_f && temp_f <= self.env.hot_f {
                return Ok(());
            }

            if !self.inputs.alert_mode_enabled() {
                device_info!("temp is {}", temp_f);
                return Ok(());
            }

            self.speaker.play_tone(TONE_FREQUENCY_HZ, TONE_BURST_MS)?;
            self.delay.delay_ms(TONE_BURST_MS);
            self.speaker.stop()?;
        }
    }

    /// Pulses the strip jade while the room is too dark.
    ///
    /// Re-averages the light reading on every pass. Returns as soon as the
    /// voltage reaches the dark threshold or the user disables alert mode.
    pub fn watch_light(&mut self) -> Result<(), HardwareError> {
        loop {
            let volts = match self.sensors.light_voltage() {
                Ok(value) => value,
                Err(err) => {
                    device_warn!("light read failed, retrying next tick: {}", err);
                    return Ok(());
                }
            };

            if volts >= self.env.dark_volts {
                return Ok(());
            }

            if !self.inputs.alert_mode_enabled() {
                device_info!("the room is too dark: {}", volts);
                return Ok(());
            }

            let secs = self.clock.now().duration_since(self.epoch).as_millis() as f32 / 1000.0;
            // Raw sine: the negative half-cycle clamps to black, giving an
            // on/off warning pulse rather than a smooth breathe.
            let frame = [with_intensity(JADE, sinf(1.25 * secs)); PIXEL_COUNT];
            self.pixels.show(&frame)?;
        }
    }
}
