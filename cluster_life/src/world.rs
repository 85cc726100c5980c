// world.rs - Unbounded Life plane built from lazily allocated clusters

use tracing::{debug, trace};

use crate::cluster::Cluster;
use crate::config::{LifeConfig, LifeError};
use crate::grid::Cell;
use crate::index::{ClusterIndex, LinearIndex};

/// Moore neighbourhood offsets.
const NEIGHBORS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Outcome of one stabilization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StabilizeReport {
    pub pruned: usize,
    pub paused: usize,
    pub resumed: usize,
    pub remaining: usize,
}

/// B3/S23 transition for a single cell.
fn next_state(current: Cell, neighbors: usize) -> Cell {
    match (current, neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,  // Survival
        (Cell::Dead, 3)                     => Cell::Alive,  // Birth
        (Cell::Alive, _)                    => Cell::Dead,   // Under/overpopulation
        (Cell::Dead, _)                     => Cell::Dead,
    }
}

/// The whole simulation: every cluster plus the generation counter.
///
/// Coordinates not covered by a cluster are dead. Reads never allocate;
/// the only allocation path is writing a live cell to an uncovered
/// coordinate.
#[derive(Debug, Clone)]
pub struct World<I: ClusterIndex = LinearIndex> {
    config: LifeConfig,
    clusters: I,
    generation: u64,
}

impl Default for World {
    fn default() -> Self {
        Self {
            config: LifeConfig::default(),
            clusters: LinearIndex::default(),
            generation: 0,
        }
    }
}

impl World {
    pub fn new(config: LifeConfig) -> Result<Self, LifeError> {
        Self::with_index(config)
    }
}

impl<I: ClusterIndex> World<I> {
    pub fn with_index(config: LifeConfig) -> Result<Self, LifeError> {
        config.validate()?;
        Ok(Self {
            config,
            clusters: I::default(),
            generation: 0,
        })
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Clusters in insertion order. Read-only; intended for drawing.
    pub fn clusters(&self) -> impl Iterator<Item = &Cluster> {
        self.clusters.iter()
    }

    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    pub fn cluster_at(&self, x: i64, y: i64) -> Option<&Cluster> {
        self.clusters.locate(x, y)
    }

    /// Live cells across all clusters, counted directly.
    pub fn population(&self) -> usize {
        self.clusters.iter().map(Cluster::live_count).sum()
    }

    pub fn read(&self, x: i64, y: i64) -> Cell {
        self.clusters
            .locate(x, y)
            .map_or(Cell::Dead, |cluster| cluster.read(x, y))
    }

    /// Set a cell, allocating the covering chunk for a live cell in
    /// uncovered space. Writing `Dead` to uncovered space is a no-op.
    pub fn write(&mut self, x: i64, y: i64, value: Cell) {
        if let Some(cluster) = self.clusters.locate_mut(x, y) {
            cluster.write(x, y, value);
            return;
        }
        if !value.is_alive() {
            return;
        }

        let mut cluster =
            Cluster::covering(x, y, self.config.chunk_width, self.config.chunk_height);
        let (origin_x, origin_y) = cluster.origin();
        debug!(origin_x, origin_y, "allocated cluster");
        cluster.write(x, y, value);
        self.clusters.insert(cluster);
    }

    pub fn toggle(&mut self, x: i64, y: i64) {
        let flipped = Cell::from(!self.read(x, y).is_alive());
        self.write(x, y, flipped);
    }

    pub fn neighbor_count(&self, x: i64, y: i64) -> usize {
        NEIGHBORS
            .iter()
            .filter(|&&(dx, dy)| self.read(x + dx, y + dy).is_alive())
            .count()
    }

    /// Advance exactly one generation.
    ///
    /// Every cluster's interior plus a one-cell halo is evaluated against
    /// the current state, then deaths and births are applied in that order.
    /// Births in the halo allocate new clusters through `write`.
    pub fn advance(&mut self) {
        let mut deaths = Vec::new();
        let mut births = Vec::new();

        for cluster in self.clusters.iter() {
            let (origin_x, origin_y) = cluster.origin();
            let right = origin_x + i64::from(cluster.width());
            let bottom = origin_y + i64::from(cluster.height());

            for y in (origin_y - 1)..=bottom {
                for x in (origin_x - 1)..=right {
                    let current = self.read(x, y);
                    let next = next_state(current, self.neighbor_count(x, y));
                    match (current, next) {
                        (Cell::Alive, Cell::Dead) => deaths.push((x, y)),
                        (Cell::Dead, Cell::Alive) => births.push((x, y)),
                        _ => {}
                    }
                }
            }
        }

        for &(x, y) in &deaths {
            self.write(x, y, Cell::Dead);
        }
        for &(x, y) in &births {
            self.write(x, y, Cell::Alive);
        }

        self.generation += 1;
        trace!(
            generation = self.generation,
            births = births.len(),
            deaths = deaths.len(),
            "advanced"
        );

        if self.generation % self.config.stabilize_every == 0 {
            self.stabilize();
        }
    }

    /// Recount populations, drop empty clusters and pause quiescent ones.
    pub fn stabilize(&mut self) -> StabilizeReport {
        let mut report = StabilizeReport::default();

        for cluster in self.clusters.iter_mut() {
            let population = cluster.recompute_population();
            if population == 0 {
                continue;
            }
            if cluster.population_delta() == 0.0 {
                if !cluster.is_paused() {
                    report.paused += 1;
                }
                cluster.set_paused(true);
            } else if cluster.is_paused() {
                cluster.set_paused(false);
                report.resumed += 1;
            }
        }

        let before = self.clusters.len();
        self.clusters.retain(|cluster| cluster.cached_population() > 0);
        report.remaining = self.clusters.len();
        report.pruned = before - report.remaining;

        debug!(
            generation = self.generation,
            pruned = report.pruned,
            paused = report.paused,
            resumed = report.resumed,
            remaining = report.remaining,
            "stabilized"
        );
        report
    }

    /// Drop every cluster and restart the generation count.
    pub fn clear(&mut self) {
        self.clusters.clear();
        self.generation = 0;
    }
}
