//! Shared test infrastructure for pomoglow integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pomoglow::{
    Clock, Delay, HardwareError, Inputs, PixelFrame, PixelStrip, SensorError, Sensors, Speaker,
    TimeDuration, TimeInstant,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(TestInstant)
    }

    fn checked_sub(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_sub(duration.0).map(TestInstant)
    }
}

// ============================================================================
// Mock Clock and Delay
// ============================================================================

/// Deterministic clock that advances by a fixed step on every `now()` call,
/// so busy-polling loops make progress without real sleeping. `peek_ms`
/// returns the instant the code under test last observed.
pub struct AutoClock {
    now_ms: Cell<u64>,
    step_ms: u64,
}

impl AutoClock {
    pub fn new(step_ms: u64) -> Self {
        Self {
            now_ms: Cell::new(0),
            step_ms,
        }
    }

    pub fn peek_ms(&self) -> u64 {
        self.now_ms.get()
    }

    pub fn advance_ms(&self, ms: u64) {
        self.now_ms.set(self.now_ms.get() + ms);
    }
}

impl Clock for AutoClock {
    type Instant = TestInstant;

    fn now(&self) -> TestInstant {
        let next = self.now_ms.get() + self.step_ms;
        self.now_ms.set(next);
        TestInstant(next)
    }
}

/// Delay that advances the shared mock clock instead of sleeping.
pub struct ClockDelay<'a>(pub &'a AutoClock);

impl Delay for ClockDelay<'_> {
    fn delay_ms(&mut self, ms: u64) {
        self.0.advance_ms(ms);
    }
}

// ============================================================================
// Value schedules
// ============================================================================

/// A piecewise-constant value over mock time: the value of the latest point
/// at or before the queried instant (the first point's value before that).
#[derive(Debug, Clone)]
pub struct Schedule {
    points: Vec<(u64, f32)>,
}

impl Schedule {
    pub fn constant(value: f32) -> Self {
        Self {
            points: vec![(0, value)],
        }
    }

    pub fn points(points: Vec<(u64, f32)>) -> Self {
        assert!(!points.is_empty());
        Self { points }
    }

    pub fn at(&self, t_ms: u64) -> f32 {
        let mut value = self.points[0].1;
        for &(at, v) in &self.points {
            if at <= t_ms {
                value = v;
            }
        }
        value
    }
}

// ============================================================================
// Scripted sensors
// ============================================================================

/// Sensor gateway mock fed by time-keyed scripts against the shared clock.
pub struct ScriptedSensors<'a> {
    clock: &'a AutoClock,
    pub temp_f: Schedule,
    pub light_volts: Schedule,
    /// Pending double-tap times; each is consumed by the first poll at or
    /// after it.
    pub taps: RefCell<Vec<u64>>,
    pub temp_fail: Cell<bool>,
    pub light_fail: Cell<bool>,
}

impl<'a> ScriptedSensors<'a> {
    /// Comfortable room, no taps.
    pub fn quiet(clock: &'a AutoClock) -> Self {
        Self {
            clock,
            temp_f: Schedule::constant(70.0),
            light_volts: Schedule::constant(1.0),
            taps: RefCell::new(Vec::new()),
            temp_fail: Cell::new(false),
            light_fail: Cell::new(false),
        }
    }

    pub fn with_temp(mut self, schedule: Schedule) -> Self {
        self.temp_f = schedule;
        self
    }

    pub fn with_light(mut self, schedule: Schedule) -> Self {
        self.light_volts = schedule;
        self
    }

    pub fn with_taps(self, taps: Vec<u64>) -> Self {
        *self.taps.borrow_mut() = taps;
        self
    }
}

impl Sensors for ScriptedSensors<'_> {
    fn temperature_f(&mut self) -> Result<f32, SensorError> {
        if self.temp_fail.get() {
            return Err(SensorError::Thermistor);
        }
        Ok(self.temp_f.at(self.clock.peek_ms()))
    }

    fn light_voltage(&mut self) -> Result<f32, SensorError> {
        if self.light_fail.get() {
            return Err(SensorError::Light);
        }
        Ok(self.light_volts.at(self.clock.peek_ms()))
    }

    fn poll_tap(&mut self) -> bool {
        let now = self.clock.peek_ms();
        let mut taps = self.taps.borrow_mut();
        if let Some(pos) = taps.iter().position(|&at| at <= now) {
            taps.remove(pos);
            true
        } else {
            false
        }
    }
}

// ============================================================================
// Scripted inputs
// ============================================================================

/// Input gateway mock: the switch follows a schedule, buttons are "held" for
/// a window starting at their scheduled press time.
pub struct ScriptedInputs<'a> {
    clock: &'a AutoClock,
    pub switch: Vec<(u64, bool)>,
    pub restart_at: Option<u64>,
    pub skip_at: Option<u64>,
    pub hold_ms: u64,
}

impl<'a> ScriptedInputs<'a> {
    /// Switch off, no presses.
    pub fn quiet(clock: &'a AutoClock) -> Self {
        Self {
            clock,
            switch: vec![(0, false)],
            restart_at: None,
            skip_at: None,
            hold_ms: 200,
        }
    }

    pub fn with_switch_on(mut self) -> Self {
        self.switch = vec![(0, true)];
        self
    }

    pub fn with_switch(mut self, points: Vec<(u64, bool)>) -> Self {
        self.switch = points;
        self
    }

    pub fn with_restart_at(mut self, at_ms: u64) -> Self {
        self.restart_at = Some(at_ms);
        self
    }

    pub fn with_skip_at(mut self, at_ms: u64) -> Self {
        self.skip_at = Some(at_ms);
        self
    }

    pub fn with_hold_ms(mut self, hold_ms: u64) -> Self {
        self.hold_ms = hold_ms;
        self
    }

    fn held(&self, at: Option<u64>) -> bool {
        let now = self.clock.peek_ms();
        match at {
            Some(at) => at <= now && now < at.saturating_add(self.hold_ms),
            None => false,
        }
    }
}

impl Inputs for ScriptedInputs<'_> {
    fn alert_mode_enabled(&self) -> bool {
        let now = self.clock.peek_ms();
        let mut on = false;
        for &(at, value) in &self.switch {
            if at <= now {
                on = value;
            }
        }
        on
    }

    fn restart_pressed(&self) -> bool {
        self.held(self.restart_at)
    }

    fn skip_pressed(&self) -> bool {
        self.held(self.skip_at)
    }
}

// ============================================================================
// Recording output peripherals
// ============================================================================

/// Strip mock that records every displayed frame through a shared handle.
pub struct RecordingStrip {
    frames: Rc<RefCell<Vec<PixelFrame>>>,
    pub fail: Cell<bool>,
}

impl RecordingStrip {
    pub fn new() -> Self {
        Self {
            frames: Rc::new(RefCell::new(Vec::new())),
            fail: Cell::new(false),
        }
    }

    /// Handle that stays valid after the strip moves into a scheduler.
    pub fn frames(&self) -> Rc<RefCell<Vec<PixelFrame>>> {
        Rc::clone(&self.frames)
    }
}

impl PixelStrip for RecordingStrip {
    fn show(&mut self, frame: &PixelFrame) -> Result<(), HardwareError> {
        if self.fail.get() {
            return Err(HardwareError::Display);
        }
        self.frames.borrow_mut().push(*frame);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToneEvent {
    Play(f32),
    Stop,
}

/// Speaker mock that records tone starts/stops through a shared handle.
pub struct RecordingSpeaker {
    events: Rc<RefCell<Vec<ToneEvent>>>,
    pub fail: Cell<bool>,
}

impl RecordingSpeaker {
    pub fn new() -> Self {
        Self {
            events: Rc::new(RefCell::new(Vec::new())),
            fail: Cell::new(false),
        }
    }

    pub fn events(&self) -> Rc<RefCell<Vec<ToneEvent>>> {
        Rc::clone(&self.events)
    }
}

impl Speaker for RecordingSpeaker {
    fn play_tone(&mut self, frequency_hz: f32, _duration_hint_ms: u64) -> Result<(), HardwareError> {
        if self.fail.get() {
            return Err(HardwareError::Audio);
        }
        self.events.borrow_mut().push(ToneEvent::Play(frequency_hz));
        Ok(())
    }

    fn stop(&mut self) -> Result<(), HardwareError> {
        self.events.borrow_mut().push(ToneEvent::Stop);
        Ok(())
    }
}

/// Number of tone starts in an event log.
pub fn play_count(events: &[ToneEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, ToneEvent::Play(_)))
        .count()
}
