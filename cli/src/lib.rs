//! Command-line client for the PressDesk content API.
//!
//! Shares the session, form and listing logic of `pressdesk-shared` with the
//! browser front end and drives it over reqwest.

pub mod cli;
pub mod commands;
pub mod token_file;
pub mod transport;
