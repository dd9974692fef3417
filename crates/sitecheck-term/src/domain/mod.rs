//! Core domain logic for the terminal form.
//!
//! Plain data models plus the services that drive the form: the controller,
//! its widgets and the event source.

pub mod models;
pub mod services;
