//! Busy indicator shown while a request is outstanding.
//!
//! The spinner drives itself: every accepted tick hands back the next one,
//! which the terminal loop schedules after [`Spinner::interval`]. Each call to
//! [`Spinner::start`] begins a new cycle with a fresh tag, so ticks left over
//! from an earlier cycle are recognised and dropped.

use std::time::Duration;

use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::EnumString;
use strum_macros::EnumVariantNames;

use crate::domain::models::SpinnerTick;

const MONKEY_FRAMES: &[&str] = &["🙈", "🙈", "🙉", "🙊"];
const DOT_FRAMES: &[&str] = &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
const LINE_FRAMES: &[&str] = &["|", "/", "-", "\\"];

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumVariantNames, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum SpinnerStyle {
    #[default]
    Monkey,
    Dots,
    Line,
}

impl SpinnerStyle {
    fn frames(&self) -> &'static [&'static str] {
        match self {
            SpinnerStyle::Monkey => MONKEY_FRAMES,
            SpinnerStyle::Dots => DOT_FRAMES,
            SpinnerStyle::Line => LINE_FRAMES,
        }
    }

    fn interval(&self) -> Duration {
        match self {
            SpinnerStyle::Monkey => Duration::from_millis(333),
            SpinnerStyle::Dots | SpinnerStyle::Line => Duration::from_millis(100),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Spinner {
    style: SpinnerStyle,
    frame: usize,
    tag: u64,
}

impl Spinner {
    pub fn new(style: SpinnerStyle) -> Spinner {
        return Spinner {
            style,
            ..Default::default()
        };
    }

    /// Begins a new cycle and returns its first tick.
    pub fn start(&mut self) -> SpinnerTick {
        self.tag = self.tag.wrapping_add(1);
        self.frame = 0;

        return SpinnerTick { tag: self.tag };
    }

    /// Advances one frame. Returns the next tick to schedule, or `None` for a stale tick.
    pub fn update(&mut self, tick: SpinnerTick) -> Option<SpinnerTick> {
        if tick.tag != self.tag {
            return None;
        }

        self.frame = (self.frame + 1) % self.style.frames().len();
        return Some(tick);
    }

    pub fn frame(&self) -> &'static str {
        return self.style.frames()[self.frame];
    }

    pub fn interval(&self) -> Duration {
        return self.style.interval();
    }
}
