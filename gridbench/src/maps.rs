//! Where benchmark maps come from.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use gridbench_core::{WeightedGrid, load_grid, save_grid};
use gridbench_terrain::{TerrainConfig, TerrainGenerator, seed_for_name};

use crate::config::MapSpec;
use crate::error::{BenchError, Result};

/// Loads maps by id.
pub trait MapSource {
    fn load(&mut self, map_id: &str) -> Result<WeightedGrid>;
}

/// Reads `<dir>/<map_id>.txt` in the digit-per-cell text format.
#[derive(Debug, Clone)]
pub struct DirMapSource {
    dir: PathBuf,
}

impl DirMapSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, map_id: &str) -> PathBuf {
        map_path(&self.dir, map_id)
    }
}

impl MapSource for DirMapSource {
    fn load(&mut self, map_id: &str) -> Result<WeightedGrid> {
        let path = self.path_for(map_id);
        log::info!("loading map {}", path.display());
        Ok(load_grid(path)?)
    }
}

/// In-memory maps; every load hands out a fresh copy.
impl MapSource for BTreeMap<String, WeightedGrid> {
    fn load(&mut self, map_id: &str) -> Result<WeightedGrid> {
        self.get(map_id)
            .cloned()
            .ok_or_else(|| BenchError::InvalidConfig(format!("unknown map {map_id}")))
    }
}

pub fn map_path(dir: &Path, map_id: &str) -> PathBuf {
    dir.join(format!("{map_id}.txt"))
}

/// Generate every map in `specs` and save it under `dir`, seeding each
/// from its name.
pub fn generate_maps(dir: &Path, specs: &[MapSpec], terrain: &TerrainConfig) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(specs.len());
    for spec in specs {
        let seed = seed_for_name(&spec.name);
        let grid = TerrainGenerator::new(terrain.clone(), seed).generate(spec.width, spec.height)?;
        let path = map_path(dir, &spec.name);
        save_grid(&grid, &path)?;
        log::info!(
            "wrote {} ({}x{}, seed {seed:#x}, {} walkable)",
            path.display(),
            spec.width,
            spec.height,
            grid.walkable_count()
        );
        written.push(path);
    }
    Ok(written)
}
