//! Destinations for finished trial series.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::Result;
use crate::harness::TrialSeries;

/// Receives one [`TrialSeries`] per (map, algorithm) pair.
pub trait ResultSink {
    fn write_series(&mut self, map_id: &str, algorithm: &str, series: &TrialSeries) -> Result<()>;
}

/// Write `values` as one comma-separated line without a trailing newline.
pub fn write_csv_line<W: Write>(mut w: W, values: &[f64]) -> io::Result<()> {
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            w.write_all(b",")?;
        }
        write!(w, "{v:?}")?;
    }
    w.flush()
}

/// Writes `<root>/<map>/<algorithm>/{time,distance,path_distance}.csv`.
#[derive(Debug, Clone)]
pub struct CsvDirSink {
    root: PathBuf,
}

impl CsvDirSink {
    pub const TIME_FILE: &'static str = "time.csv";
    pub const DISTANCE_FILE: &'static str = "distance.csv";
    pub const PATH_DISTANCE_FILE: &'static str = "path_distance.csv";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn series_dir(&self, map_id: &str, algorithm: &str) -> PathBuf {
        self.root.join(map_id).join(algorithm)
    }
}

impl ResultSink for CsvDirSink {
    fn write_series(&mut self, map_id: &str, algorithm: &str, series: &TrialSeries) -> Result<()> {
        let dir = self.series_dir(map_id, algorithm);
        fs::create_dir_all(&dir)?;
        let files = [
            (Self::TIME_FILE, &series.times),
            (Self::DISTANCE_FILE, &series.distances),
            (Self::PATH_DISTANCE_FILE, &series.path_costs),
        ];
        for (name, values) in files {
            write_csv_line(BufWriter::new(File::create(dir.join(name))?), values)?;
        }
        log::info!("exported {} trials to {}", series.len(), dir.display());
        Ok(())
    }
}

/// Keeps every series in memory, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub series: Vec<(String, String, TrialSeries)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, map_id: &str, algorithm: &str) -> Option<&TrialSeries> {
        self.series
            .iter()
            .find(|(m, a, _)| m == map_id && a == algorithm)
            .map(|(_, _, s)| s)
    }
}

impl ResultSink for MemorySink {
    fn write_series(&mut self, map_id: &str, algorithm: &str, series: &TrialSeries) -> Result<()> {
        self.series
            .push((map_id.to_owned(), algorithm.to_owned(), series.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> TrialSeries {
        TrialSeries {
            times: vec![0.5, 0.25],
            distances: vec![3.0, 2.5],
            path_costs: vec![4.0, -1.0],
        }
    }

    #[test]
    fn csv_line_has_no_trailing_newline() {
        let mut out = Vec::new();
        write_csv_line(&mut out, &[1.5, 2.0, -1.0]).unwrap();
        assert_eq!(out, b"1.5,2.0,-1.0");

        out.clear();
        write_csv_line(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn csv_dir_layout() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = CsvDirSink::new(dir.path());
        sink.write_series("small", "A-Star", &series()).unwrap();

        let base = dir.path().join("small").join("A-Star");
        let read = |name: &str| fs::read_to_string(base.join(name)).unwrap();
        assert_eq!(read(CsvDirSink::TIME_FILE), "0.5,0.25");
        assert_eq!(read(CsvDirSink::DISTANCE_FILE), "3.0,2.5");
        assert_eq!(read(CsvDirSink::PATH_DISTANCE_FILE), "4.0,-1.0");
    }

    #[test]
    fn rewriting_replaces_old_values() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = CsvDirSink::new(dir.path());
        sink.write_series("m", "Dijkstra", &series()).unwrap();
        let short = TrialSeries {
            times: vec![1.0],
            distances: vec![1.0],
            path_costs: vec![1.0],
        };
        sink.write_series("m", "Dijkstra", &short).unwrap();
        let text = fs::read_to_string(sink.series_dir("m", "Dijkstra").join("time.csv")).unwrap();
        assert_eq!(text, "1.0");
    }

    #[test]
    fn memory_sink_lookup() {
        let mut sink = MemorySink::new();
        sink.write_series("big", "A-Star", &series()).unwrap();
        assert_eq!(sink.get("big", "A-Star"), Some(&series()));
        assert_eq!(sink.get("big", "Dijkstra"), None);
    }
}
