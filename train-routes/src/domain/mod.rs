//! Domain types for the route finder.
//!
//! Stations are the only domain entity; connections and trips are built
//! from them in the `network` and `planner` modules.

mod station;

pub use station::Station;
