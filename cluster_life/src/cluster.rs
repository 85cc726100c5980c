// cluster.rs - A chunk of the plane anchored at a world-space origin

use crate::grid::{Cell, ChunkGrid};

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fixed-size region of the plane plus its population bookkeeping.
#[derive(Debug, Clone)]
pub struct Cluster {
    origin_x: i64,
    origin_y: i64,
    grid: ChunkGrid,
    cached_population: usize,
    average_population: f64,
    population_delta: f64,
    paused: bool,
}

impl Cluster {
    pub fn new(origin_x: i64, origin_y: i64, width: u32, height: u32) -> Self {
        Self {
            origin_x,
            origin_y,
            grid: ChunkGrid::new(width, height),
            cached_population: 0,
            average_population: 0.0,
            population_delta: 0.0,
            paused: false,
        }
    }

    /// Cluster on the chunk grid that covers `(x, y)`.
    pub fn covering(x: i64, y: i64, width: u32, height: u32) -> Self {
        let (w, h) = (i64::from(width), i64::from(height));
        Self::new(x.div_euclid(w) * w, y.div_euclid(h) * h, width, height)
    }

    pub fn origin(&self) -> (i64, i64) {
        (self.origin_x, self.origin_y)
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn cached_population(&self) -> usize {
        self.cached_population
    }

    pub fn average_population(&self) -> f64 {
        self.average_population
    }

    pub fn population_delta(&self) -> f64 {
        self.population_delta
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.origin_x
            && x < self.origin_x + i64::from(self.width())
            && y >= self.origin_y
            && y < self.origin_y + i64::from(self.height())
    }

    /// Coordinates outside the cluster wrap into it; callers route through
    /// `contains` first.
    pub fn read(&self, x: i64, y: i64) -> Cell {
        self.grid.get(x - self.origin_x, y - self.origin_y)
    }

    /// Any write that changes a cell clears `paused`, so the next
    /// stabilization pass recounts (and can prune) this cluster.
    pub fn write(&mut self, x: i64, y: i64, value: Cell) {
        let (lx, ly) = (x - self.origin_x, y - self.origin_y);
        if self.grid.get(lx, ly) != value {
            self.paused = false;
        }
        self.grid.set(lx, ly, value);
    }

    /// Recount live cells and fold the count into the smoothed average.
    ///
    /// A paused cluster returns its cached count without scanning. This
    /// never affects whether the cluster's cells are advanced.
    pub fn recompute_population(&mut self) -> usize {
        if self.paused {
            return self.cached_population;
        }

        let count = self.grid.count_alive();
        let previous = self.average_population;
        self.cached_population = count;
        self.average_population = round2((previous + count as f64) / 2.0);
        self.population_delta = round2(self.average_population - previous);
        count
    }

    pub(crate) fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Live cells counted directly, bypassing the cache.
    pub fn live_count(&self) -> usize {
        self.grid.count_alive()
    }

    /// Every cell of the chunk as `(local_x, local_y, value)`.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, Cell)> + '_ {
        self.grid.iter()
    }

    /// World coordinates of the live cells.
    pub fn live_cells(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.grid
            .iter()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(move |(lx, ly, _)| (self.origin_x + i64::from(lx), self.origin_y + i64::from(ly)))
    }
}
