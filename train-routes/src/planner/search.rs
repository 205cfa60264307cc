//! Label-setting shortest path search.
//!
//! Finds the fastest route between two stations with Dijkstra's algorithm.
//! All working state (labels, frontier) belongs to a single query, so one
//! graph can serve any number of searches.
//!
//! Ties on cumulative time are broken by discovery order: of all unsettled
//! stations with the lowest time, the one first reached by the search is
//! settled next. This makes the reported route reproducible when several
//! routes are equally fast.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::domain::Station;
use crate::network::RouteGraph;

use super::config::SearchConfig;
use super::trip::{Trip, TripResult};

/// Error from route search.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// Search exceeded its deadline
    #[error("search from {start} to {end} timed out after {limit:?}")]
    Timeout {
        start: Station,
        end: Station,
        limit: Duration,
    },
}

/// Find the fastest route from `start` to `end`.
///
/// Never fails: unknown or unreachable stations give
/// [`TripResult::NoRoute`], and `start == end` gives
/// [`TripResult::SameStation`] without searching.
///
/// # Example
///
/// ```
/// use train_routes::network::RouteGraphBuilder;
/// use train_routes::planner::find_route;
///
/// let graph = RouteGraphBuilder::new()
///     .connect("A", "B", 5)
///     .connect("B", "C", 5)
///     .build();
///
/// let result = find_route(&graph, "A", "C");
/// assert_eq!(result.stops(), Some(1));
/// assert_eq!(result.minutes(), Some(10));
/// ```
pub fn find_route(graph: &RouteGraph, start: &str, end: &str) -> TripResult {
    let mut search = Search::new(graph, start, end);
    loop {
        if let ControlFlow::Break(result) = search.step() {
            return result;
        }
    }
}

/// Route planner with per-query limits.
pub struct Planner<'a> {
    graph: &'a RouteGraph,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a RouteGraph, config: &'a SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Find the fastest route, giving up once the configured deadline passes.
    ///
    /// The deadline is checked after each station is settled, so queries
    /// answered without searching never time out.
    pub fn find_route(&self, start: &str, end: &str) -> Result<TripResult, SearchError> {
        let Some(limit) = self.config.deadline() else {
            return Ok(find_route(self.graph, start, end));
        };

        let started = Instant::now();
        let mut search = Search::new(self.graph, start, end);

        loop {
            if let ControlFlow::Break(result) = search.step() {
                return Ok(result);
            }
            if started.elapsed() >= limit {
                debug!(
                    start,
                    end,
                    settled = search.settled,
                    ?limit,
                    "search deadline exceeded"
                );
                return Err(SearchError::Timeout {
                    start: Station::new(start),
                    end: Station::new(end),
                    limit,
                });
            }
        }
    }
}

/// Best known way of reaching a station.
#[derive(Debug, Clone)]
struct Label {
    node: usize,

    /// Label of the station we arrived from.
    predecessor: Option<usize>,

    /// Cumulative travel time from the start.
    minutes: u64,

    settled: bool,
}

/// Frontier entry: a label and the time it had when queued.
///
/// Entries go stale when a label improves; stale ones are skipped on pop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frontier {
    minutes: u64,
    label: usize,
}

// Min-heap on (minutes, discovery order).
impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .minutes
            .cmp(&self.minutes)
            .then_with(|| other.label.cmp(&self.label))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// In-progress search for a single query.
struct Search<'g> {
    graph: &'g RouteGraph,
    start: &'g str,
    end: &'g str,

    /// Resolved before any settling (same station, unknown endpoints).
    outcome: Option<TripResult>,

    end_node: usize,

    /// Labels in discovery order; index 0 is the start.
    labels: Vec<Label>,

    /// Node → label index.
    label_of: Vec<Option<usize>>,

    frontier: BinaryHeap<Frontier>,

    settled: usize,
}

impl<'g> Search<'g> {
    fn new(graph: &'g RouteGraph, start: &'g str, end: &'g str) -> Self {
        let mut search = Self {
            graph,
            start,
            end,
            outcome: None,
            end_node: 0,
            labels: Vec::new(),
            label_of: vec![None; graph.station_count()],
            frontier: BinaryHeap::new(),
            settled: 0,
        };

        if start == end {
            search.outcome = Some(TripResult::SameStation);
            return search;
        }

        let (Some(start_node), Some(end_node)) = (graph.node(start), graph.node(end)) else {
            debug!(start, end, "station not in route graph");
            search.outcome = Some(search.no_route());
            return search;
        };

        search.end_node = end_node;
        search.labels.push(Label {
            node: start_node,
            predecessor: None,
            minutes: 0,
            settled: false,
        });
        search.label_of[start_node] = Some(0);
        search.frontier.push(Frontier {
            minutes: 0,
            label: 0,
        });
        search
    }

    /// Settle one station.
    ///
    /// Breaks with the result once the end is settled or nothing is left to
    /// explore.
    fn step(&mut self) -> ControlFlow<TripResult> {
        if let Some(outcome) = self.outcome.take() {
            return ControlFlow::Break(outcome);
        }

        let current = loop {
            let Some(Frontier { minutes, label }) = self.frontier.pop() else {
                debug!(
                    start = self.start,
                    end = self.end,
                    settled = self.settled,
                    "no route"
                );
                return ControlFlow::Break(self.no_route());
            };
            let entry = &self.labels[label];
            if !entry.settled && entry.minutes == minutes {
                break label;
            }
        };

        self.labels[current].settled = true;
        self.settled += 1;

        let node = self.labels[current].node;
        let minutes = self.labels[current].minutes;

        trace!(
            station = %self.graph.station(node),
            minutes,
            "settled station"
        );

        if node == self.end_node {
            return ControlFlow::Break(self.trip_to(current));
        }

        self.relax(current, node, minutes);
        ControlFlow::Continue(())
    }

    /// Offer every neighbour of a settled station a route through it.
    fn relax(&mut self, current: usize, node: usize, minutes: u64) {
        let graph = self.graph;
        for (next, edge_minutes) in graph.edges(node) {
            let candidate = minutes.saturating_add(edge_minutes);

            match self.label_of[next] {
                None => {
                    let label = self.labels.len();
                    self.labels.push(Label {
                        node: next,
                        predecessor: Some(current),
                        minutes: candidate,
                        settled: false,
                    });
                    self.label_of[next] = Some(label);
                    self.frontier.push(Frontier {
                        minutes: candidate,
                        label,
                    });
                }
                Some(label) => {
                    let entry = &mut self.labels[label];
                    if !entry.settled && candidate < entry.minutes {
                        entry.predecessor = Some(current);
                        entry.minutes = candidate;
                        self.frontier.push(Frontier {
                            minutes: candidate,
                            label,
                        });
                    }
                }
            }
        }
    }

    /// Walk predecessor links back from the end label.
    fn trip_to(&self, end_label: usize) -> TripResult {
        let mut path = Vec::new();
        let mut cursor = Some(end_label);
        while let Some(label) = cursor {
            let entry = &self.labels[label];
            path.push(self.graph.station(entry.node).clone());
            cursor = entry.predecessor;
        }
        path.reverse();

        let trip = Trip::new(path, self.labels[end_label].minutes);
        debug!(
            start = self.start,
            end = self.end,
            stops = trip.stops(),
            minutes = trip.minutes(),
            settled = self.settled,
            "route found"
        );
        TripResult::Trip(trip)
    }

    fn no_route(&self) -> TripResult {
        TripResult::NoRoute {
            start: Station::new(self.start),
            end: Station::new(self.end),
        }
    }
}
