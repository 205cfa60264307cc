//! Adjacency structure for the route network.
//!
//! Stations are interned to dense indices on first sight. Each index owns
//! an ordered neighbour list (input order, duplicates kept) and every
//! ordered pair of adjacent stations has an entry in the travel time table.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::Station;

use super::connection::Connection;
use super::error::GraphError;

/// An undirected, weighted route network.
///
/// The graph is immutable once built; share it by reference between queries.
///
/// # Example
///
/// ```
/// use train_routes::network::RouteGraphBuilder;
///
/// let graph = RouteGraphBuilder::new()
///     .connect("A", "B", 5)
///     .connect("B", "C", 5)
///     .build();
///
/// assert_eq!(graph.travel_time("B", "A"), Some(5));
/// assert_eq!(graph.neighbours("B").count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    /// Station names by index, in order of first appearance.
    stations: Vec<Station>,

    /// Name → index.
    index: HashMap<Station, usize>,

    /// Neighbour indices per station, in input order.
    adjacency: Vec<Vec<usize>>,

    /// Direct travel time per ordered pair. Last write wins.
    times: HashMap<(usize, usize), u64>,

    /// Number of input connections (each counted once).
    connections: usize,
}

impl RouteGraph {
    /// Build a graph from typed connections.
    pub fn build<I>(connections: I) -> Self
    where
        I: IntoIterator<Item = Connection>,
    {
        let mut builder = RouteGraphBuilder::new();
        for connection in connections {
            builder.add(connection);
        }
        builder.build()
    }

    /// Build a graph from raw `(start, end, minutes)` records.
    ///
    /// Every record must have exactly three fields and a travel time that
    /// parses as a non-negative integer no larger than `u64::MAX`
    /// (surrounding whitespace is ignored).
    /// The first bad record aborts construction; nothing is skipped.
    pub fn from_records<I, R, S>(records: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = RouteGraphBuilder::new();

        for (idx, record) in records.into_iter().enumerate() {
            let row = idx + 1;
            let fields: Vec<S> = record.into_iter().collect();

            let [from, to, minutes] = fields.as_slice() else {
                return Err(GraphError::FieldCount {
                    row,
                    found: fields.len(),
                });
            };

            let raw = minutes.as_ref();
            let minutes: u64 = raw.trim().parse().map_err(|_| GraphError::InvalidTime {
                row,
                value: raw.to_string(),
            })?;

            builder.add(Connection::new(from.as_ref(), to.as_ref(), minutes));
        }

        Ok(builder.build())
    }

    /// Stations directly reachable from `station`, in input order.
    ///
    /// Parallel connections appear once per input row. Unknown stations
    /// have no neighbours.
    pub fn neighbours<'a>(&'a self, station: &str) -> impl Iterator<Item = &'a Station> + 'a {
        self.node(station)
            .into_iter()
            .flat_map(move |node| self.adjacency[node].iter())
            .map(move |&next| &self.stations[next])
    }

    /// Direct travel time in minutes between two adjacent stations.
    pub fn travel_time(&self, from: &str, to: &str) -> Option<u64> {
        let from = self.node(from)?;
        let to = self.node(to)?;
        self.times.get(&(from, to)).copied()
    }

    /// Check if a station appears in any connection.
    pub fn contains(&self, station: &str) -> bool {
        self.index.contains_key(station)
    }

    /// All stations, in order of first appearance.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    /// Returns the number of distinct stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Returns the number of connections the graph was built from.
    pub fn connection_count(&self) -> usize {
        self.connections
    }

    /// Returns true if the graph has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub(crate) fn node(&self, station: &str) -> Option<usize> {
        self.index.get(station).copied()
    }

    pub(crate) fn station(&self, node: usize) -> &Station {
        &self.stations[node]
    }

    /// Outgoing `(neighbour, minutes)` pairs for a node.
    pub(crate) fn edges(&self, node: usize) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.adjacency[node]
            .iter()
            .filter_map(move |&next| self.times.get(&(node, next)).map(|&t| (next, t)))
    }

    fn intern(&mut self, station: Station) -> usize {
        if let Some(&node) = self.index.get(&station) {
            return node;
        }
        let node = self.stations.len();
        self.stations.push(station.clone());
        self.index.insert(station, node);
        self.adjacency.push(Vec::new());
        node
    }

    fn insert(&mut self, connection: Connection) {
        let from = self.intern(connection.from);
        let to = self.intern(connection.to);

        self.adjacency[from].push(to);
        self.adjacency[to].push(from);
        self.times.insert((from, to), connection.minutes);
        self.times.insert((to, from), connection.minutes);
        self.connections += 1;
    }
}

/// Builder for creating route graphs.
///
/// Collects connections into mutable tables and freezes them in `build`.
#[derive(Debug, Default)]
pub struct RouteGraphBuilder {
    inner: RouteGraph,
}

impl RouteGraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connection, usable in both directions.
    pub fn add(&mut self, connection: Connection) -> &mut Self {
        self.inner.insert(connection);
        self
    }

    /// Add a connection by station names.
    pub fn connect(mut self, from: &str, to: &str, minutes: u64) -> Self {
        self.inner.insert(Connection::new(from, to, minutes));
        self
    }

    /// Build the route graph.
    pub fn build(self) -> RouteGraph {
        debug!(
            stations = self.inner.station_count(),
            connections = self.inner.connection_count(),
            "route graph built"
        );
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(graph: &'a RouteGraph, station: &str) -> Vec<&'a str> {
        graph.neighbours(station).map(Station::as_str).collect()
    }

    #[test]
    fn empty_graph() {
        let graph = RouteGraphBuilder::new().build();
        assert!(graph.is_empty());
        assert_eq!(graph.station_count(), 0);
        assert_eq!(graph.connection_count(), 0);
        assert!(graph.travel_time("A", "B").is_none());
    }

    #[test]
    fn connections_are_bidirectional() {
        let graph = RouteGraphBuilder::new().connect("A", "B", 5).build();

        assert_eq!(graph.travel_time("A", "B"), Some(5));
        assert_eq!(graph.travel_time("B", "A"), Some(5));
        assert_eq!(names(&graph, "A"), vec!["B"]);
        assert_eq!(names(&graph, "B"), vec!["A"]);
    }

    #[test]
    fn neighbours_keep_input_order() {
        let graph = RouteGraphBuilder::new()
            .connect("A", "D", 15)
            .connect("A", "B", 5)
            .connect("C", "A", 7)
            .build();

        assert_eq!(names(&graph, "A"), vec!["D", "B", "C"]);
    }

    #[test]
    fn parallel_connections_kept_time_last_write_wins() {
        let graph = RouteGraphBuilder::new()
            .connect("A", "B", 5)
            .connect("A", "B", 3)
            .build();

        assert_eq!(names(&graph, "A"), vec!["B", "B"]);
        assert_eq!(graph.travel_time("A", "B"), Some(3));
        assert_eq!(graph.connection_count(), 2);
        assert_eq!(graph.station_count(), 2);
    }

    #[test]
    fn reversed_duplicate_overwrites_both_directions() {
        let graph = RouteGraphBuilder::new()
            .connect("A", "B", 5)
            .connect("B", "A", 9)
            .build();

        assert_eq!(graph.travel_time("A", "B"), Some(9));
        assert_eq!(graph.travel_time("B", "A"), Some(9));
    }

    #[test]
    fn self_loop_listed_twice() {
        let graph = RouteGraphBuilder::new().connect("A", "A", 2).build();
        assert_eq!(names(&graph, "A"), vec!["A", "A"]);
        assert_eq!(graph.travel_time("A", "A"), Some(2));
    }

    #[test]
    fn every_neighbour_has_a_time() {
        let graph = RouteGraphBuilder::new()
            .connect("A", "B", 5)
            .connect("B", "C", 5)
            .connect("A", "B", 1)
            .build();

        for station in graph.stations() {
            for next in graph.neighbours(station.as_str()) {
                assert!(graph.travel_time(station.as_str(), next.as_str()).is_some());
            }
        }
    }

    #[test]
    fn unknown_station_has_no_neighbours() {
        let graph = RouteGraphBuilder::new().connect("A", "B", 5).build();
        assert!(!graph.contains("Z"));
        assert_eq!(graph.neighbours("Z").count(), 0);
    }

    #[test]
    fn station_names_are_case_sensitive() {
        let graph = RouteGraphBuilder::new().connect("a", "B", 5).build();
        assert!(graph.contains("a"));
        assert!(!graph.contains("A"));
    }

    #[test]
    fn build_from_connections() {
        let graph = RouteGraph::build(vec![
            Connection::new("A", "B", 5),
            Connection::new("B", "C", 5),
        ]);
        assert_eq!(graph.station_count(), 3);
        assert_eq!(graph.connection_count(), 2);
    }

    #[test]
    fn from_records_parses_rows() {
        let graph =
            RouteGraph::from_records(vec![vec!["A", "B", "5"], vec!["B", "C", " 10 "]]).unwrap();

        assert_eq!(graph.travel_time("A", "B"), Some(5));
        assert_eq!(graph.travel_time("C", "B"), Some(10));
    }

    #[test]
    fn from_records_rejects_bad_time() {
        let err = RouteGraph::from_records(vec![vec!["A", "B", "5"], vec!["B", "C", "ten"]])
            .unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidTime {
                row: 2,
                value: "ten".into()
            }
        );
    }

    #[test]
    fn from_records_accepts_times_beyond_u32() {
        let graph = RouteGraph::from_records(vec![vec!["A", "B", "5000000000"]]).unwrap();
        assert_eq!(graph.travel_time("A", "B"), Some(5_000_000_000));
    }

    #[test]
    fn from_records_rejects_times_beyond_u64() {
        let err = RouteGraph::from_records(vec![vec!["A", "B", "18446744073709551616"]])
            .unwrap_err();
        assert!(matches!(err, GraphError::InvalidTime { row: 1, .. }));
    }

    #[test]
    fn from_records_rejects_negative_time() {
        let err = RouteGraph::from_records(vec![vec!["A", "B", "-5"]]).unwrap_err();
        assert!(matches!(err, GraphError::InvalidTime { row: 1, .. }));
    }

    #[test]
    fn from_records_rejects_wrong_field_count() {
        let err = RouteGraph::from_records(vec![vec!["A", "B"]]).unwrap_err();
        assert_eq!(err, GraphError::FieldCount { row: 1, found: 2 });

        let err = RouteGraph::from_records(vec![vec!["A", "B", "5", "x"]]).unwrap_err();
        assert_eq!(err, GraphError::FieldCount { row: 1, found: 4 });
    }

    #[test]
    fn from_records_empty_input() {
        let graph = RouteGraph::from_records(Vec::<Vec<&str>>::new()).unwrap();
        assert!(graph.is_empty());
    }
}
