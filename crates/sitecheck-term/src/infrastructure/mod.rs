//! Infrastructure layer providing external integrations.
//!
//! Holds the HTTP implementation of the request client.

pub mod clients;
