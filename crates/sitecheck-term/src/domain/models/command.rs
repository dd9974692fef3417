use std::time::Duration;

use super::SpinnerTick;

/// Work requested by the controller, carried out by the terminal loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Fetch { query: String },
    ScheduleTick { tick: SpinnerTick, after: Duration },
    Quit,
}
