//! Direct connections between stations.

use crate::domain::Station;

/// A direct, bidirectional link between two stations.
///
/// Travelling `from → to` and `to → from` both take `minutes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub from: Station,
    pub to: Station,
    pub minutes: u64,
}

impl Connection {
    /// Create a new connection.
    pub fn new(from: impl Into<Station>, to: impl Into<Station>, minutes: u64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            minutes,
        }
    }
}
