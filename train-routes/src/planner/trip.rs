//! Route search outcomes and their user-facing messages.

use std::fmt;

use chrono::Duration;

use crate::domain::Station;

/// The fastest route found between two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    /// Stations visited, start and end inclusive.
    path: Vec<Station>,

    /// Total travel time in minutes.
    minutes: u64,
}

impl Trip {
    pub(crate) fn new(path: Vec<Station>, minutes: u64) -> Self {
        Self { path, minutes }
    }

    /// Returns the boarding station.
    pub fn start(&self) -> &Station {
        &self.path[0]
    }

    /// Returns the alighting station.
    pub fn end(&self) -> &Station {
        &self.path[self.path.len() - 1]
    }

    /// Number of intermediate stations, excluding start and end.
    pub fn stops(&self) -> usize {
        self.path.len().saturating_sub(2)
    }

    /// Total travel time in minutes.
    pub fn minutes(&self) -> u64 {
        self.minutes
    }

    /// Total travel time as a Duration.
    pub fn duration(&self) -> Duration {
        i64::try_from(self.minutes)
            .ok()
            .and_then(Duration::try_minutes)
            .unwrap_or(Duration::MAX)
    }

    /// Stations visited, start and end inclusive.
    pub fn path(&self) -> &[Station] {
        &self.path
    }
}

/// Result of a route query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripResult {
    /// Start and end are the same station; no search was done.
    SameStation,

    /// The end station cannot be reached from the start.
    NoRoute { start: Station, end: Station },

    /// Fastest route found.
    Trip(Trip),
}

impl TripResult {
    /// Returns the trip, if one was found.
    pub fn trip(&self) -> Option<&Trip> {
        match self {
            TripResult::Trip(trip) => Some(trip),
            _ => None,
        }
    }

    /// Intermediate stop count, if a trip was found.
    pub fn stops(&self) -> Option<usize> {
        self.trip().map(Trip::stops)
    }

    /// Total travel time in minutes, if a trip was found.
    pub fn minutes(&self) -> Option<u64> {
        self.trip().map(Trip::minutes)
    }
}

impl fmt::Display for TripResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripResult::SameStation => f.write_str("Start is the end, nowhere to go."),
            TripResult::NoRoute { start, end } => write!(f, "No routes from {start} to {end}."),
            TripResult::Trip(trip) => {
                let stops = trip.stops();
                let noun = if stops == 1 { "stop" } else { "stops" };
                write!(
                    f,
                    "Your trip from {} to {} includes {stops} {noun} and will take {} minutes.",
                    trip.start(),
                    trip.end(),
                    trip.minutes()
                )
            }
        }
    }
}
