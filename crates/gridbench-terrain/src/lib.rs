//! Seeded terrain for gridbench: noise-generated weighted grids and the
//! named map presets benchmarks run on.

pub mod mapgen;
pub mod preset;

pub use mapgen::{TerrainConfig, TerrainGenerator, seed_for_name};
pub use preset::MapPreset;
