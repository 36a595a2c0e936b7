//! Randomized trials of one search algorithm over one grid.
//!
//! A [`TrialHarness`] samples every start/end pair up front, so the same
//! endpoint set can be replayed against several algorithms. Each trial
//! resets the grid's search state, times the search with a [`Clock`], and
//! records the straight-line distance and the realized path cost.

use std::time::{Duration, Instant};

use gridbench_core::{Cell, Point, WeightedGrid};
use gridbench_paths::{PathCostMode, SearchAlgorithm};
use rand::{Rng, RngExt};

use crate::error::{BenchError, Result};

/// Uniform coordinate draws tried per endpoint before falling back to
/// picking among the walkable cells directly.
pub const MAX_SAMPLING_ATTEMPTS: usize = 10_000;

/// Path cost recorded for a trial whose search found no path.
pub const NO_PATH_COST: f64 = -1.0;

/// Monotonic time source for trial timing.
pub trait Clock {
    /// Time elapsed since some fixed origin.
    fn now(&self) -> Duration;
}

/// [`Clock`] backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Draw a start and a distinct end, both walkable.
///
/// Fails fast when the grid has fewer than two walkable cells. Otherwise
/// always terminates: after [`MAX_SAMPLING_ATTEMPTS`] rejected draws the
/// endpoint is picked uniformly among the eligible cells.
pub fn sample_endpoints(grid: &WeightedGrid, rng: &mut impl Rng) -> Result<(Cell, Cell)> {
    let walkable = grid.walkable_count();
    if walkable < 2 {
        return Err(BenchError::InsufficientWalkableCells { walkable });
    }
    let start = sample_walkable(grid, rng, None);
    let end = sample_walkable(grid, rng, Some(start));
    Ok((start, end))
}

fn sample_walkable(grid: &WeightedGrid, rng: &mut impl Rng, exclude: Option<Cell>) -> Cell {
    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        let p = Point::new(
            rng.random_range(0..grid.width()),
            rng.random_range(0..grid.height()),
        );
        match grid.cell(p) {
            Some(c) if c.walkable() && Some(c) != exclude => return c,
            _ => {}
        }
    }
    log::debug!("rejection sampling gave up after {MAX_SAMPLING_ATTEMPTS} draws");
    let eligible: Vec<Cell> = grid
        .walkable_cells()
        .filter(|&c| Some(c) != exclude)
        .collect();
    // Non-empty: the caller checked for at least two walkable cells.
    eligible[rng.random_range(0..eligible.len())]
}

/// Metrics of a single trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialRecord {
    /// Search duration in seconds.
    pub time: f64,
    /// Euclidean distance between start and end.
    pub distance: f64,
    /// Realized path cost, or [`NO_PATH_COST`].
    pub path_cost: f64,
}

/// Parallel metric sequences, one entry per trial in trial order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrialSeries {
    pub times: Vec<f64>,
    pub distances: Vec<f64>,
    pub path_costs: Vec<f64>,
}

impl TrialSeries {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            times: Vec::with_capacity(n),
            distances: Vec::with_capacity(n),
            path_costs: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, record: TrialRecord) {
        self.times.push(record.time);
        self.distances.push(record.distance);
        self.path_costs.push(record.path_cost);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Number of trials that found a path.
    pub fn found(&self) -> usize {
        self.path_costs.iter().filter(|&&c| c != NO_PATH_COST).count()
    }

    pub fn total_time(&self) -> f64 {
        self.times.iter().sum()
    }
}

/// A pre-sampled batch of trials.
#[derive(Debug, Clone)]
pub struct TrialHarness<C = MonotonicClock> {
    endpoints: Vec<(Cell, Cell)>,
    cost_mode: PathCostMode,
    clock: C,
}

impl TrialHarness {
    /// Sample `trial_count` endpoint pairs on `grid`.
    pub fn sample(grid: &WeightedGrid, trial_count: usize, rng: &mut impl Rng) -> Result<Self> {
        if trial_count == 0 {
            return Err(BenchError::InvalidConfig(
                "trial count must be positive".into(),
            ));
        }
        let endpoints = (0..trial_count)
            .map(|_| sample_endpoints(grid, rng))
            .collect::<Result<Vec<_>>>()?;
        log::debug!("sampled {trial_count} endpoint pairs");
        Ok(Self::from_endpoints(endpoints))
    }

    /// Harness replaying a fixed endpoint list.
    pub fn from_endpoints(endpoints: Vec<(Cell, Cell)>) -> Self {
        Self {
            endpoints,
            cost_mode: PathCostMode::default(),
            clock: MonotonicClock::new(),
        }
    }
}

impl<C: Clock> TrialHarness<C> {
    pub fn with_clock<D: Clock>(self, clock: D) -> TrialHarness<D> {
        TrialHarness {
            endpoints: self.endpoints,
            cost_mode: self.cost_mode,
            clock,
        }
    }

    pub fn with_cost_mode(mut self, cost_mode: PathCostMode) -> Self {
        self.cost_mode = cost_mode;
        self
    }

    pub fn endpoints(&self) -> &[(Cell, Cell)] {
        &self.endpoints
    }

    pub fn trial_count(&self) -> usize {
        self.endpoints.len()
    }

    /// Run every trial in order.
    ///
    /// The first search error aborts the batch; no trial is retried.
    pub fn run_trials(
        &self,
        grid: &mut WeightedGrid,
        algorithm: &dyn SearchAlgorithm,
    ) -> Result<TrialSeries> {
        log::info!(
            "running {} trials with {} (movement {})",
            self.endpoints.len(),
            algorithm.name(),
            algorithm.movement()
        );
        let mut series = TrialSeries::with_capacity(self.endpoints.len());
        for (index, &(start, end)) in self.endpoints.iter().enumerate() {
            grid.cleanup();
            let t0 = self.clock.now();
            let result = algorithm
                .find_path(start, end, grid)
                .map_err(|source| BenchError::Trial { index, source })?;
            let elapsed = self.clock.now().saturating_sub(t0);

            let path_cost = if result.is_found() {
                result.cost(self.cost_mode)
            } else {
                NO_PATH_COST
            };
            log::trace!(
                "trial {index}: {} -> {} explored={} cost={path_cost}",
                start.pos,
                end.pos,
                result.explored
            );
            series.push(TrialRecord {
                time: elapsed.as_secs_f64(),
                distance: start.pos.distance(end.pos),
                path_cost,
            });
        }
        Ok(series)
    }
}
