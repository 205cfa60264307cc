//! Route network construction.
//!
//! Turns `(start, end, minutes)` rows into an immutable, undirected graph
//! with a direct travel time lookup for every adjacent pair of stations.

mod connection;
mod error;
mod graph;

pub use connection::Connection;
pub use error::GraphError;
pub use graph::{RouteGraph, RouteGraphBuilder};
