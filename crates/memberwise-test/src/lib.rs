//! Shared test fixtures for memberwise crates.
//!
//! The fixtures implement [`memberwise_core::Members`] by hand so the engine
//! crates can test member collection and resolution without depending on the
//! derive macro.
//!
//! - [`account`] - a small fully-populated record
//! - [`contact`] - a record with a nullable member and marker tags

pub mod account;
pub mod contact;

pub use account::Account;
pub use contact::Contact;
