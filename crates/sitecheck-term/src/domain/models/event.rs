use tui_textarea::Input;

use super::FetchResult;

/// Identifies which spinner cycle a tick belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinnerTick {
    pub tag: u64,
}

#[derive(Debug)]
pub enum Event {
    FetchCompleted(FetchResult),
    KeyboardCharInput(Input),
    KeyboardConfirm,
    KeyboardPaste(String),
    KeyboardQuit,
    SpinnerTick(SpinnerTick),
    WindowResize { width: u16, height: u16 },
}
