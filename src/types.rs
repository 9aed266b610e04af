//! Core session types.

use crate::colors::{self, Pixel};
use crate::time::TimeDuration;

/// The four kinds of timed session that make up a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionKind {
    /// Rainbow-chase lead-in before the focus cycles.
    Intro,
    /// A focus period.
    Focus,
    /// Short break between focus periods.
    ShortBreak,
    /// Long break closing the flow.
    LongBreak,
}

impl SessionKind {
    /// The color used to paint status-overlay pixels during this session.
    ///
    /// Red against the dim fade of a break, white against the saturated
    /// rainbow of everything else.
    pub fn status_color(self) -> Pixel {
        match self {
            SessionKind::ShortBreak | SessionKind::LongBreak => colors::STATUS_RED,
            SessionKind::Intro | SessionKind::Focus => colors::STATUS_WHITE,
        }
    }
}

/// Immutable description of one session, built by the flow scheduler.
#[derive(Debug, Clone, Copy)]
pub struct SessionSpec<D: TimeDuration> {
    /// What kind of session this is.
    pub kind: SessionKind,
    /// How long it runs.
    pub duration: D,
    /// Which focus cycle this session belongs to (0..=3), if tap status
    /// display is enabled for it. `None` disables overlays entirely.
    pub display_index: Option<u8>,
    /// Fade color pair: (normal, ending-soon warning). Only breaks render it.
    pub colors: (Pixel, Pixel),
}

impl<D: TimeDuration> SessionSpec<D> {
    /// The rainbow-chase intro. No status overlay.
    pub fn intro(duration: D) -> Self {
        Self {
            kind: SessionKind::Intro,
            duration,
            display_index: None,
            colors: (colors::OLD_LACE, colors::BLUE),
        }
    }

    /// A focus session for cycle `index`.
    pub fn focus(duration: D, index: u8) -> Self {
        Self {
            kind: SessionKind::Focus,
            duration,
            display_index: Some(index),
            colors: (colors::OLD_LACE, colors::BLUE),
        }
    }

    /// A short break after cycle `index`.
    pub fn short_break(duration: D, index: u8) -> Self {
        Self {
            kind: SessionKind::ShortBreak,
            duration,
            display_index: Some(index),
            colors: (colors::OLD_LACE, colors::BLUE),
        }
    }

    /// The final long break. No status overlay.
    pub fn long_break(duration: D) -> Self {
        Self {
            kind: SessionKind::LongBreak,
            duration,
            display_index: None,
            colors: (colors::BLUEISH, colors::PINKISH),
        }
    }
}

/// How a session ended. Produced exactly once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionResult {
    /// The session ran out its full duration.
    Completed,
    /// Button A: abort the whole flow.
    RestartRequested,
    /// Button B: advance to the next phase.
    SkipRequested,
}
