//! Benchmark configuration.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use gridbench_core::DiagonalMovement;
use gridbench_paths::{AStarSearch, DijkstraSearch, PathCostMode, SearchAlgorithm};
use gridbench_terrain::{MapPreset, TerrainConfig};
use serde::{Deserialize, Serialize};

use crate::error::{BenchError, Result};

/// A search algorithm the benchmark can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmKind {
    #[serde(rename = "A-Star", alias = "astar")]
    AStar,
    #[serde(rename = "Dijkstra", alias = "dijkstra")]
    Dijkstra,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 2] = [AlgorithmKind::AStar, AlgorithmKind::Dijkstra];

    /// Name used in output paths and reports.
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::AStar => AStarSearch::NAME,
            AlgorithmKind::Dijkstra => DijkstraSearch::NAME,
        }
    }

    pub fn build(self, movement: DiagonalMovement) -> Box<dyn SearchAlgorithm> {
        match self {
            AlgorithmKind::AStar => Box::new(AStarSearch::new(movement)),
            AlgorithmKind::Dijkstra => Box::new(DijkstraSearch::new(movement)),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "a-star" | "astar" | "a*" => Ok(AlgorithmKind::AStar),
            "dijkstra" => Ok(AlgorithmKind::Dijkstra),
            _ => Err(BenchError::InvalidConfig(format!("unknown algorithm: {s}"))),
        }
    }
}

/// A map to generate: `name=WIDTHxHEIGHT`, or a bare preset name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSpec {
    pub name: String,
    pub width: usize,
    pub height: usize,
}

impl From<MapPreset> for MapSpec {
    fn from(p: MapPreset) -> Self {
        Self {
            name: p.name.to_owned(),
            width: p.width,
            height: p.height,
        }
    }
}

impl FromStr for MapSpec {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || BenchError::InvalidConfig(format!("bad map spec {s:?}, want name=WxH"));
        let Some((name, size)) = s.split_once('=') else {
            return MapPreset::find(s).map(MapSpec::from).ok_or_else(invalid);
        };
        let (w, h) = size.split_once(['x', 'X']).ok_or_else(invalid)?;
        let width: usize = w.trim().parse().map_err(|_| invalid())?;
        let height: usize = h.trim().parse().map_err(|_| invalid())?;
        let name = name.trim();
        if name.is_empty() || width == 0 || height == 0 {
            return Err(invalid());
        }
        Ok(Self {
            name: name.to_owned(),
            width,
            height,
        })
    }
}

/// Everything a benchmark run needs.
///
/// Missing JSON fields take their [`Default`] values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Map ids, run in this order; each is read from `<maps_dir>/<id>.txt`.
    pub maps: Vec<String>,
    pub maps_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Trials per map, shared by every algorithm.
    pub trial_count: usize,
    pub movement: DiagonalMovement,
    pub algorithms: Vec<AlgorithmKind>,
    /// Endpoint sampling seed. A random one is drawn and logged when unset.
    pub seed: Option<u64>,
    pub cost_mode: PathCostMode,
    /// Used by `generate`.
    pub terrain: TerrainConfig,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            maps: ["big", "medium", "small"].map(String::from).to_vec(),
            maps_dir: PathBuf::from("maps"),
            output_dir: PathBuf::from("output"),
            trial_count: 1000,
            movement: DiagonalMovement::IfAtMostOneObstacle,
            algorithms: AlgorithmKind::ALL.to_vec(),
            seed: None,
            cost_mode: PathCostMode::Full,
            terrain: TerrainConfig::default(),
        }
    }
}

impl BenchConfig {
    /// Read a JSON config file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: BenchConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.trial_count == 0 {
            return Err(BenchError::InvalidConfig(
                "trial_count must be positive".into(),
            ));
        }
        if self.maps.is_empty() {
            return Err(BenchError::InvalidConfig("no maps selected".into()));
        }
        if self.algorithms.is_empty() {
            return Err(BenchError::InvalidConfig("no algorithms selected".into()));
        }
        if let Some(dup) = self
            .algorithms
            .iter()
            .enumerate()
            .find(|(i, a)| self.algorithms[..*i].contains(*a))
            .map(|(_, a)| a)
        {
            return Err(BenchError::InvalidConfig(format!(
                "algorithm {dup} listed twice"
            )));
        }
        Ok(())
    }

    /// Build the configured algorithms, in order.
    pub fn build_algorithms(&self) -> Vec<Box<dyn SearchAlgorithm>> {
        self.algorithms
            .iter()
            .map(|a| a.build(self.movement))
            .collect()
    }
}
