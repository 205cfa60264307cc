//! Fastest-route finder for train networks.
//!
//! Loads a table of direct connections between stations and answers:
//! "how many stops, and how long, from here to there?"

pub mod cli;
pub mod domain;
pub mod loader;
pub mod network;
pub mod planner;
