//! The frame pump: fixed-rate, duration-bounded engine driving.
//!
//! One pump run owns the schedule: it steps the engine once per tick, joins
//! the resulting frame lines, and delivers them to a sink in strictly
//! increasing tick order until the planned duration (or a cancellation)
//! ends the run.

pub mod clock;
pub mod frame_pump;
pub mod sink;
