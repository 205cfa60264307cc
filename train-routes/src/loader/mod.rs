//! Route table loading.
//!
//! Reads headerless `start,end,time` CSV files into a [`RouteGraph`].
//! Rows are handed to the graph builder unchanged, so a short or long row
//! is reported as a graph error rather than a CSV parse error.

mod error;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use crate::network::RouteGraph;

pub use error::LoadError;

/// Check that `path` looks like a route table and exists.
///
/// The name must end in `.csv` (case-sensitive).
pub fn validate_file(path: &Path) -> Result<(), LoadError> {
    if !path.as_os_str().to_string_lossy().ends_with(".csv") {
        return Err(LoadError::NotCsv);
    }

    if !path.exists() {
        return Err(LoadError::Missing);
    }

    Ok(())
}

/// Read every record of a headerless, comma-delimited route table.
///
/// Blank lines are skipped. Records may have any number of fields.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<StringRecord>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    debug!(records = records.len(), "read route table");
    Ok(records)
}

/// Read a route table and build its graph.
pub fn parse_graph<R: Read>(reader: R) -> Result<RouteGraph, LoadError> {
    let records = read_records(reader)?;
    Ok(RouteGraph::from_records(&records)?)
}

/// Validate, open and parse a route table file.
pub fn load_graph(path: &Path) -> Result<RouteGraph, LoadError> {
    validate_file(path)?;

    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse_graph(file)?;

    info!(
        path = %path.display(),
        stations = graph.station_count(),
        connections = graph.connection_count(),
        "loaded route table"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::GraphError;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn validate_accepts_existing_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "routes.csv", "A,B,5\n");
        assert!(validate_file(&path).is_ok());
    }

    #[test]
    fn validate_rejects_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "routes.json", "A,B,5\n");
        assert!(matches!(validate_file(&path), Err(LoadError::NotCsv)));

        let upper = write_file(&dir, "routes.CSV", "A,B,5\n");
        assert!(matches!(validate_file(&upper), Err(LoadError::NotCsv)));
    }

    #[test]
    fn validate_rejects_missing_file() {
        let err = validate_file(Path::new("random_dir/routes.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Missing));
        assert_eq!(err.to_string(), "The file in this directory does not exist.");
    }

    #[test]
    fn extension_checked_before_existence() {
        let err = validate_file(Path::new("random_dir/routes.json")).unwrap_err();
        assert!(matches!(err, LoadError::NotCsv));
    }

    #[test]
    fn read_records_without_header() {
        let records = read_records("A,B,5\nB,C,5\n".as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "A");
        assert_eq!(&records[1][2], "5");
    }

    #[test]
    fn read_records_skips_blank_lines() {
        let records = read_records("A,B,5\n\nB,C,5\n".as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn read_records_keeps_short_rows() {
        let records = read_records("A,B,5\nB,C\n".as_bytes()).unwrap();
        assert_eq!(records[1].len(), 2);
    }

    #[test]
    fn parse_graph_builds_bidirectional_network() {
        let graph = parse_graph("A,B,5\nB,C,5\nA,D,15\n".as_bytes()).unwrap();
        assert_eq!(graph.station_count(), 4);
        assert_eq!(graph.travel_time("D", "A"), Some(15));
    }

    #[test]
    fn parse_graph_keeps_quoted_names() {
        let graph = parse_graph("\"King's Cross, London\",Euston,5\n".as_bytes()).unwrap();
        assert!(graph.contains("King's Cross, London"));
    }

    #[test]
    fn parse_graph_reports_bad_time() {
        let err = parse_graph("A,B,5\nB,C,soon\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Graph(GraphError::InvalidTime { row: 2, .. })
        ));
    }

    #[test]
    fn parse_graph_reports_short_row() {
        let err = parse_graph("A,B\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Graph(GraphError::FieldCount { row: 1, found: 2 })
        ));
    }

    #[test]
    fn load_graph_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "routes.csv", "A,B,5\nB,C,5\n");

        let graph = load_graph(&path).unwrap();
        assert_eq!(graph.connection_count(), 2);
    }

    #[test]
    fn load_graph_validates_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "routes.txt", "A,B,5\n");
        assert!(matches!(load_graph(&path), Err(LoadError::NotCsv)));
    }
}
