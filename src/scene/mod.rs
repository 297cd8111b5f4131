//! Scene script boundary.
//!
//! The human-authored representation is a line-oriented script (one command
//! per line). [`script::Script`] holds the raw lines; [`compile`] turns them
//! into a validated [`model::Scene`] consumable by an engine.

pub mod compile;
pub mod model;
pub mod script;
