use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::EnumString;
use strum_macros::EnumVariantNames;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum InteractionState {
    #[default]
    AwaitingInput,
    Pending,
    Displaying,
}

/// What the confirm key does once a result is on screen.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumVariantNames, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum RepeatPolicy {
    /// The result view is terminal for the run.
    #[default]
    Stay,
    /// Clear the input and go back to the form.
    Reset,
}
