//! Noise-based terrain generation.
//!
//! Samples fractal Perlin noise over the unit square and quantizes it into
//! cell weights. Low noise becomes blocked terrain, higher noise becomes
//! progressively more expensive ground.

use gridbench_core::{BLOCKED, Result, WeightedGrid};
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

/// Parameters for [`TerrainGenerator`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TerrainConfig {
    /// Number of noise octaves summed per sample. One octave is a single
    /// Perlin layer, the terrain the reference maps were built from.
    pub octaves: usize,
    /// How many noise periods span the grid along each axis.
    pub frequency: f64,
    /// Added to the halved sample; raises the share of walkable cells.
    pub offset: f64,
    /// Multiplier turning the shifted sample into a weight.
    pub scale: f64,
    /// Upper bound for generated weights.
    pub max_weight: u8,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            octaves: 1,
            frequency: 6.0,
            offset: 0.4,
            scale: 10.0,
            max_weight: 9,
        }
    }
}

impl TerrainConfig {
    /// Weight for a raw noise sample in `[-1, 1]`.
    pub fn quantize(&self, sample: f64) -> u8 {
        let v = sample * 0.5 + self.offset;
        if v <= 0.0 {
            return BLOCKED;
        }
        // Tiny positive values floor to zero and stay blocked.
        let w = (v * self.scale).floor();
        if w >= f64::from(self.max_weight) {
            self.max_weight
        } else {
            w as u8
        }
    }
}

/// Deterministic terrain generator: the same config and seed always give
/// the same grid.
pub struct TerrainGenerator {
    config: TerrainConfig,
    fbm: Fbm<Perlin>,
}

impl TerrainGenerator {
    pub fn new(config: TerrainConfig, seed: u32) -> Self {
        let fbm = Fbm::<Perlin>::new(seed).set_octaves(config.octaves.max(1));
        Self { config, fbm }
    }

    /// Generate a `width × height` grid.
    ///
    /// Fails with [`gridbench_core::GridError::EmptyGrid`] when either
    /// dimension is zero.
    pub fn generate(&self, width: usize, height: usize) -> Result<WeightedGrid> {
        let freq = self.config.frequency;
        let mut weights = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let nx = x as f64 / width as f64 * freq;
                let ny = y as f64 / height as f64 * freq;
                weights.push(self.config.quantize(self.fbm.get([nx, ny])));
            }
        }
        let grid = WeightedGrid::new(width, height, weights)?;
        log::debug!(
            "generated {width}x{height} terrain: {} walkable cells",
            grid.walkable_count()
        );
        Ok(grid)
    }
}

/// Terrain seed derived from a map name.
///
/// Folds the UTF-8 bytes big-endian, so the result is the low 32 bits of
/// the name read as one big hexadecimal number.
pub fn seed_for_name(name: &str) -> u32 {
    name.bytes()
        .fold(0u32, |acc, b| (acc << 8) | u32::from(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_keeps_last_four_bytes() {
        assert_eq!(seed_for_name(""), 0);
        assert_eq!(seed_for_name("a"), 0x61);
        assert_eq!(seed_for_name("big"), 0x0062_6967);
        // "small" = 73 6d 61 6c 6c; the leading 0x73 falls off.
        assert_eq!(seed_for_name("small"), 0x6d61_6c6c);
        assert_eq!(seed_for_name("medium"), 0x6469_756d);
    }

    #[test]
    fn quantize_thresholds() {
        let cfg = TerrainConfig::default();
        assert_eq!(cfg.quantize(-1.0), BLOCKED);
        assert_eq!(cfg.quantize(-0.8), BLOCKED);
        // 0.5 * 0.0 + 0.4 = 0.4 -> floor(4.0)
        assert_eq!(cfg.quantize(0.0), 4);
        assert_eq!(cfg.quantize(1.0), 9);
        assert_eq!(cfg.quantize(5.0), 9);

        let capped = TerrainConfig {
            max_weight: 3,
            ..TerrainConfig::default()
        };
        assert_eq!(capped.quantize(1.0), 3);
    }

    #[test]
    fn same_seed_same_grid() {
        let a = TerrainGenerator::new(TerrainConfig::default(), 42)
            .generate(40, 30)
            .unwrap();
        let b = TerrainGenerator::new(TerrainConfig::default(), 42)
            .generate(40, 30)
            .unwrap();
        assert_eq!(a.width(), 40);
        assert_eq!(a.height(), 30);
        assert!(a.rows().eq(b.rows()));
    }

    #[test]
    fn weights_stay_in_range() {
        let grid = TerrainGenerator::new(TerrainConfig::default(), seed_for_name("small"))
            .generate(50, 50)
            .unwrap();
        assert!(grid.rows().flatten().all(|&w| w <= 9));
        assert!(grid.walkable_count() > 0);
    }

    #[test]
    fn default_is_single_layer_perlin() {
        let cfg = TerrainConfig::default();
        assert_eq!(cfg.octaves, 1);
        assert_eq!(cfg.frequency, 6.0);
    }

    #[test]
    fn zero_dimension_is_an_error() {
        let generator = TerrainGenerator::new(TerrainConfig::default(), 1);
        assert!(generator.generate(0, 10).is_err());
        assert!(generator.generate(10, 0).is_err());
    }
}
