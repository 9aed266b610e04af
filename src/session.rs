//! The per-session polling loop.
//!
//! [`SessionRunner::run`] drives exactly one timed session: render a frame,
//! service alerts, check buttons, handle tap status overlays, display. One
//! cooperative loop, no preemption, no callbacks. Every decision is an
//! elapsed-time check against the shared clock.
//!
//! Tick order is fixed and load-bearing: alerts run before button checks (a
//! press during an active alert is only observed once the alert clears) and
//! the status overlay is painted after the animation so it always wins the
//! pixels it covers.

use crate::alert::AlertMonitor;
use crate::animation::Animation;
use crate::colors::{Pixel, PixelFrame, PIXEL_COUNT};
use crate::config::EnvThresholds;
use crate::hal::{HardwareError, PixelStrip, Speaker};
use crate::input::Inputs;
use crate::sensors::Sensors;
use crate::time::{Clock, ClockDuration, Delay, TimeDuration, TimeInstant};
use crate::types::{SessionResult, SessionSpec};

/// Settle delay after observing a button press, so a held button does not
/// re-trigger immediately.
pub const SETTLE_DELAY_MS: u64 = 500;

/// How long a tap-triggered status overlay stays visible.
pub const STATUS_OVERLAY_MS: u64 = 2_000;

/// A tap-triggered status display over the first pixels of the frame.
///
/// At most one overlay exists at a time; a new tap replaces the old one
/// outright, it never stacks.
#[derive(Debug, Clone, Copy)]
pub struct StatusOverlay<I: TimeInstant> {
    active_until: I,
    pixel_count: usize,
}

impl<I: TimeInstant> StatusOverlay<I> {
    /// Creates an overlay covering pixels `0..=display_index`, active for
    /// [`STATUS_OVERLAY_MS`] from `now`.
    pub fn new(now: I, display_index: u8) -> Self {
        let lifetime = I::Duration::from_millis(STATUS_OVERLAY_MS);
        Self {
            // On instant overflow the overlay degrades to instantly expired
            // rather than wedging the session.
            active_until: now.checked_add(lifetime).unwrap_or(now),
            pixel_count: (usize::from(display_index) + 1).min(PIXEL_COUNT),
        }
    }

    /// Whether the overlay should still be painted at `now`.
    pub fn is_active(&self, now: I) -> bool {
        now < self.active_until
    }

    /// Paints the covered pixels with the status color.
    pub fn apply(&self, frame: &mut PixelFrame, color: Pixel) {
        for pixel in frame.iter_mut().take(self.pixel_count) {
            *pixel = color;
        }
    }
}

/// Drives one session to its exit disposition.
///
/// Borrows the full peripheral set for the duration of [`SessionRunner::run`];
/// the flow scheduler reassembles a fresh runner per phase.
pub struct SessionRunner<'a, C, D, S, In, P, K>
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

impl<'a, C, D, S, In, P, K> SessionRunner<'a, C, D, S, In, P, K>
where
    C: Clock,
    D: Delay,
    S: Sensors,
    In: Inputs,
    P: PixelStrip,
    K: Speaker,
{
    /// Borrows the peripherals for one session.
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

    /// Runs the session described by `spec` and returns how it ended.
    ///
    /// The loop never outlives `spec.duration` by more than one tick's cost,
    /// except while blocked inside an alert sub-loop, where environmental safety
    /// outranks timing precision. Display write failures are fatal and
    /// propagate immediately.
    pub fn run(
        &mut self,
        spec: &SessionSpec<ClockDuration<C>>,
    ) -> Result<SessionResult, HardwareError> {
        let animation = Animation::for_session(spec);
        let start = self.clock.now();
        let mut overlay: Option<StatusOverlay<C::Instant>> = None;

        loop {
            let now = self.clock.now();
            let elapsed = now.duration_since(start);
            if elapsed.as_millis() >= spec.duration.as_millis() {
                return Ok(SessionResult::Completed);
            }

            let wall = now.duration_since(self.epoch);
            let mut frame = animation.render(wall, elapsed, spec.duration);

            // Alerts may block here for as long as the condition persists;
            // restart/skip below are not observed until they yield.
            if self.inputs.alert_mode_enabled() {
                let mut alerts = AlertMonitor::new(
                    self.clock,
                    self.epoch,
                    &mut *self.delay,
                    &mut *self.sensors,
                    &*self.inputs,
                    &mut *self.pixels,
                    &mut *self.speaker,
                    self.env,
                );
                alerts.watch_temperature()?;
                alerts.watch_light()?;
            }

            if self.inputs.restart_pressed() {
                device_info!("go back to main");
                self.delay.delay_ms(SETTLE_DELAY_MS);
                return Ok(SessionResult::RestartRequested);
            }

            if self.inputs.skip_pressed() {
                device_info!("skipping to next session");
                self.delay.delay_ms(SETTLE_DELAY_MS);
                return Ok(SessionResult::SkipRequested);
            }

            if let Some(display_index) = spec.display_index {
                // The alert sub-loops above may have blocked for seconds, so
                // the overlay clock is read fresh here rather than reused
                // from the top of the tick.
                let tap_now = self.clock.now();
                if self.sensors.poll_tap() {
                    device_info!("status check");
                    overlay = Some(StatusOverlay::new(tap_now, display_index));
                }
                if let Some(active) = overlay {
                    if active.is_active(tap_now) {
                        active.apply(&mut frame, spec.kind.status_color());
                    } else {
                        overlay = None;
                    }
                }
            }

            self.pixels.show(&frame)?;
        }
    }
}
