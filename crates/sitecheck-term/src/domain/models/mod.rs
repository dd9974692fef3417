mod command;
mod envelope;
mod event;
mod fetch;
mod request_client;
mod state;

pub use command::*;
pub use envelope::*;
pub use event::*;
pub use fetch::*;
pub use request_client::*;
pub use state::*;
