//! Route planner using label-setting shortest path search.
//!
//! Answers: "what is the fastest way from this station to that one, and how
//! many stops does it take?"
//!
//! Each query keeps its own working state; the route graph is only read.

mod config;
mod search;
mod trip;


pub use config::SearchConfig;
pub use search::{Planner, SearchError, find_route};
pub use trip::{Trip, TripResult};
