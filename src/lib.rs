//! Live scores for concurrently running matches.
//!
//! [`scoreboard::Scoreboard`] is an immutable value: starting a match, adding
//! points and finishing a match each return a new scoreboard. The
//! [`service::ScoreboardService`] keeps the current value and validates
//! input, and [`dashboard`] serves it over HTTP.

pub mod config;
pub mod dashboard;
pub mod scoreboard;
pub mod service;
