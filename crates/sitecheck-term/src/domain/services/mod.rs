mod controller;
pub mod events;
mod spinner;
mod styles;
mod text_entry;

pub use controller::*;
pub use events::EventsService;
pub use spinner::*;
pub use styles::*;
pub use text_entry::*;
