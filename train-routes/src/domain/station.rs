//! Station identifiers.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// A station name as it appears in the route table.
///
/// Names are opaque: equality and hashing are exact, case-sensitive byte
/// comparisons with no trimming or normalisation. Any string is a valid
/// name, including the empty string. Cloning is cheap (the name is shared).
///
/// # Examples
///
/// ```
/// use train_routes::domain::Station;
///
/// let kings_cross = Station::new("King's Cross");
/// assert_eq!(kings_cross.as_str(), "King's Cross");
///
/// // No case folding
/// assert_ne!(Station::new("A"), Station::new("a"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Station(Arc<str>);

impl Station {
    /// Create a station from its name.
    pub fn new(name: &str) -> Self {
        Station(Arc::from(name))
    }

    /// Returns the station name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Station {
    fn from(name: &str) -> Self {
        Station::new(name)
    }
}

impl From<String> for Station {
    fn from(name: String) -> Self {
        Station(Arc::from(name))
    }
}

// `Arc<str>` hashes exactly like `str`, so map lookups by `&str` are sound.
impl Borrow<str> for Station {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.as_str())
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
