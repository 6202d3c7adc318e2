//! Waypoint Kernel: the problem contract every search runs against.
//!
//! # API Surface
//!
//! - [`problem::Problem`] -- states, actions, transitions and costs of a search problem
//! - [`problem::Heuristic`] -- remaining-cost estimates supplied by callers
//! - [`cost::Cost`] -- validated, totally ordered non-negative costs
//! - [`replay::verify_solution`] -- replay an action sequence and confirm it reaches a goal
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 over canonical bytes
//!
//! # Module Dependency Direction
//!
//! `cost` ← `problem` ← `replay`; `proof` depends on nothing internal.
//!
//! The kernel knows nothing about frontiers or strategies. It is the leaf
//! that both the search engine and concrete worlds build on.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cost;
pub mod problem;
pub mod proof;
pub mod replay;
