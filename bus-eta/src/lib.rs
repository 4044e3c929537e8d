//! Hong Kong Citybus/NWFB arrival times.
//!
//! A command-line tool that answers: "when is the next bus on this
//! route, or at this stop?" It can also list a route's stops so their
//! stop IDs can be found.

pub mod citybus;
pub mod cli;
pub mod display;
pub mod lookup;
