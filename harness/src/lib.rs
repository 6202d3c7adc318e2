//! Waypoint Harness: concrete worlds and a verifying runner.
//!
//! Worlds implement the kernel's `Problem` contract and nothing else the
//! engine can see. The runner executes a strategy against a world, replays
//! the solution through the kernel to confirm it reaches a goal, and
//! reports cost, statistics and the trace digest.
//!
//! The search engine does NOT depend on this crate.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod runner;
pub mod worlds;
