//! The flow scheduler: intro plus four focus/break cycles.
//!
//! Owns the full peripheral set and the configuration, handed down from the
//! process entry point; there is no global device state. Each phase is run
//! by a freshly assembled [`SessionRunner`]; exit dispositions bubble back up
//! as plain values, never as panics.

use crate::animation::Animation;
use crate::config::{EnvThresholds, FlowConfig};
use crate::hal::{HardwareError, PixelStrip, Speaker};
use crate::input::Inputs;
use crate::sensors::Sensors;
use crate::session::{SessionRunner, SETTLE_DELAY_MS};
use crate::time::{Clock, ClockDuration, Delay, TimeDuration, TimeInstant};
use crate::types::{SessionResult, SessionSpec};

/// Number of focus/break cycles in one flow.
pub const FOCUS_CYCLES: usize = 4;

/// Phases per flow: one intro, four focus sessions, three short breaks and
/// the closing long break.
const PHASE_COUNT: usize = 2 * FOCUS_CYCLES + 1;

/// How a whole flow ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlowOutcome {
    /// All phases ran (some possibly skipped).
    Completed,
    /// A restart request aborted the flow; the device returns to standby.
    Aborted,
}

/// Sequences sessions into a full flow.
pub struct FlowScheduler<'t, C, D, S, In, P, K>
where
    C: Clock,
    D: Delay,
    S: Sensors,
    In: Inputs,
    P: PixelStrip,
    K: Speaker,
{
    clock: &'t C,
    epoch: C::Instant,
    delay: D,
    sensors: S,
    inputs: In,
    pixels: P,
    speaker: K,
    config: FlowConfig<ClockDuration<C>>,
}

impl<'t, C, D, S, In, P, K> FlowScheduler<'t, C, D, S, In, P, K>
where
    C: Clock,
    D: Delay,
    S: Sensors,
    In: Inputs,
    P: PixelStrip,
    K: Speaker,
{
    /// Assembles the scheduler around its peripherals.
    ///
    /// The epoch for wall-clock animation phase is captured here, so fades
    /// stay phase-continuous across every session of the device's lifetime.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        clock: &'t C,
        delay: D,
        sensors: S,
        inputs: In,
        pixels: P,
        speaker: K,
        config: FlowConfig<ClockDuration<C>>,
    ) -> Self {
        Self {
            clock,
            epoch: clock.now(),
            delay,
            sensors,
            inputs,
            pixels,
            speaker,
            config,
        }
    }

    /// The environment thresholds in effect.
    pub fn env(&self) -> &EnvThresholds {
        &self.config.env
    }

    /// Runs one complete flow.
    ///
    /// A `RestartRequested` from any phase aborts the whole flow immediately.
    /// A `SkipRequested` abandons only the current phase and advances to the
    /// next one in sequence.
    pub fn run_flow(&mut self) -> Result<FlowOutcome, HardwareError> {
        for spec in Self::phases(&self.config) {
            device_info!("starting {} session", spec.kind);
            match self.run_session(&spec)? {
                SessionResult::RestartRequested => {
                    device_info!("flow aborted");
                    return Ok(FlowOutcome::Aborted);
                }
                SessionResult::Completed | SessionResult::SkipRequested => {}
            }
        }
        device_info!("flow complete");
        Ok(FlowOutcome::Completed)
    }

    /// Runs a single session against this scheduler's peripherals.
    pub fn run_session(
        &mut self,
        spec: &SessionSpec<ClockDuration<C>>,
    ) -> Result<SessionResult, HardwareError> {
        let mut runner = SessionRunner::new(
            self.clock,
            self.epoch,
            &mut self.delay,
            &mut self.sensors,
            &self.inputs,
            &mut self.pixels,
            &mut self.speaker,
            &self.config.env,
        );
        runner.run(spec)
    }

    /// Services the device while no flow is running.
    ///
    /// Renders one idle-rainbow frame, runs the alert monitors if the switch
    /// enables them, and reports whether button A requested a flow start.
    pub fn standby_tick(&mut self) -> Result<bool, HardwareError> {
        let wall = self.clock.now().duration_since(self.epoch);
        let frame = Animation::IdleRainbow.render(
            wall,
            ClockDuration::<C>::ZERO,
            ClockDuration::<C>::ZERO,
        );
        self.pixels.show(&frame)?;

        if self.inputs.alert_mode_enabled() {
            let mut alerts = crate::alert::AlertMonitor::new(
                self.clock,
                self.epoch,
                &mut self.delay,
                &mut self.sensors,
                &self.inputs,
                &mut self.pixels,
                &mut self.speaker,
                &self.config.env,
            );
            alerts.watch_temperature()?;
            alerts.watch_light()?;
        }

        if self.inputs.restart_pressed() {
            self.delay.delay_ms(SETTLE_DELAY_MS);
            return Ok(true);
        }
        Ok(false)
    }

    /// The fixed phase sequence of one flow.
    fn phases(config: &FlowConfig<ClockDuration<C>>) -> [SessionSpec<ClockDuration<C>>; PHASE_COUNT] {
        [
            SessionSpec::intro(config.intro),
            SessionSpec::focus(config.focus, 0),
            SessionSpec::short_break(config.short_break, 0),
            SessionSpec::focus(config.focus, 1),
            SessionSpec::short_break(config.short_break, 1),
            SessionSpec::focus(config.focus, 2),
            SessionSpec::short_break(config.short_break, 2),
            SessionSpec::focus(config.focus, 3),
            SessionSpec::long_break(config.long_break),
        ]
    }
}
