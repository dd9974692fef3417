//! Terminal form that checks how trustworthy a website is.
//!
//! The user types an address, the form posts it to a trust-score service while
//! a spinner runs, and the decoded report (or the error) is shown in a box.
//! Everything that changes on screen goes through a single state machine,
//! [`Controller`], fed one event at a time by the terminal loop.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::ui::{destruct_terminal_for_panic, start, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{
    ClientSettings, Command, Event, FetchResult, InteractionState, RepeatPolicy, RequestClient,
    RequestClientBox, TrustReport,
};
pub use domain::services::{Controller, ControllerProps};
pub use infrastructure::clients::TrustApi;
