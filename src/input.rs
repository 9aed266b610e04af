//! User input signals over the raw digital pins.
//!
//! Three independent boolean reads per tick. Button reads are raw levels; the
//! session runner treats a press as a one-shot trigger and inserts the settle
//! delay itself, so no debouncing happens here.

use crate::hal::InputPin;

/// Semantic input signals consumed by the session and alert loops.
pub trait Inputs {
    /// True while the slide switch enables alert mode.
    fn alert_mode_enabled(&self) -> bool;

    /// True while button A (restart / start flow) is held.
    fn restart_pressed(&self) -> bool;

    /// True while button B (skip ahead) is held.
    fn skip_pressed(&self) -> bool;
}

/// The device's input gateway: slide switch plus two buttons.
pub struct InputGateway<S: InputPin, A: InputPin, B: InputPin> {
    switch: S,
    button_a: A,
    button_b: B,
}

impl<S: InputPin, A: InputPin, B: InputPin> InputGateway<S, A, B> {
    /// Creates a gateway over the given pins.
    pub fn new(switch: S, button_a: A, button_b: B) -> Self {
        Self {
            switch,
            button_a,
            button_b,
        }
    }
}

impl<S: InputPin, A: InputPin, B: InputPin> Inputs for InputGateway<S, A, B> {
    fn alert_mode_enabled(&self) -> bool {
        self.switch.is_high()
    }

    fn restart_pressed(&self) -> bool {
        self.button_a.is_high()
    }

    fn skip_pressed(&self) -> bool {
        self.button_b.is_high()
    }
}
