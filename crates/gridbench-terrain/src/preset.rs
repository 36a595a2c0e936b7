//! Named map sizes.

use gridbench_core::{Result, WeightedGrid};

use crate::mapgen::{TerrainConfig, TerrainGenerator, seed_for_name};

/// A named map size, seeded from its own name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapPreset {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
}

impl MapPreset {
    pub const SMALL: MapPreset = MapPreset::new("small", 50, 50);
    pub const MEDIUM: MapPreset = MapPreset::new("medium", 200, 200);
    pub const BIG: MapPreset = MapPreset::new("big", 500, 500);

    /// Every preset, smallest first.
    pub const ALL: [MapPreset; 3] = [Self::SMALL, Self::MEDIUM, Self::BIG];

    pub const fn new(name: &'static str, width: usize, height: usize) -> Self {
        Self {
            name,
            width,
            height,
        }
    }

    pub fn find(name: &str) -> Option<MapPreset> {
        Self::ALL.into_iter().find(|p| p.name == name)
    }

    pub fn seed(&self) -> u32 {
        seed_for_name(self.name)
    }

    pub fn generate(&self, config: &TerrainConfig) -> Result<WeightedGrid> {
        TerrainGenerator::new(config.clone(), self.seed()).generate(self.width, self.height)
    }
}
