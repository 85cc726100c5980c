// main.rs - Viewer for the chunked Game of Life engine

use eframe::egui;
use egui::Color32;
use rand::{SeedableRng, rngs::SmallRng};
use std::time::{Duration, Instant};
use tracing::{info, warn};

use cluster_life::{Cell, LifeConfig, Pattern, World, scatter};

mod camera;
mod ui;

use camera::Camera;

/// Random cells seeded at startup, matching the classic demo.
const DEFAULT_SCATTER: usize = 50_000;
/// Seeds land in `[-SCATTER_RADIUS, SCATTER_RADIUS]` on both axes.
const SCATTER_RADIUS: i64 = 32;

fn main() -> Result<(), eframe::Error> {
    init_tracing();
    let settings = ViewerSettings::from_env();
    let app = LifeApp::new(settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Chunked Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(name, value = %raw, "ignoring unparsable environment override");
            None
        }
    }
}

/// Startup knobs read from `LIFE_*` environment variables.
#[derive(Debug, Clone, Copy)]
struct ViewerSettings {
    config: LifeConfig,
    seed: u64,
    scatter: usize,
}

impl ViewerSettings {
    fn from_env() -> Self {
        let mut config = LifeConfig::default();
        if let Some(size) = env_parse::<u32>("LIFE_CHUNK_SIZE") {
            config.chunk_width = size;
            config.chunk_height = size;
        }
        if let Some(every) = env_parse::<u64>("LIFE_STABILIZE_EVERY") {
            config.stabilize_every = every;
        }
        if let Err(err) = config.validate() {
            warn!(%err, "falling back to default world configuration");
            config = LifeConfig::default();
        }

        Self {
            config,
            seed: env_parse("LIFE_SEED").unwrap_or(0x5EED_1AFE),
            scatter: env_parse("LIFE_SCATTER").unwrap_or(DEFAULT_SCATTER),
        }
    }
}

pub struct LifeApp {
    world: World,
    rng: SmallRng,

    pub scatter_count: usize,
    pub camera: Camera,
    pub is_running: bool,
    pub last_update: Instant,
    /// Generations per second while running.
    pub target_rate: f32,
    pub live_color: Color32,
    pub cluster_color: Color32,
    pub paused_color: Color32,
}

impl LifeApp {
    fn new(settings: ViewerSettings) -> Self {
        let world = match World::new(settings.config) {
            Ok(world) => world,
            Err(err) => {
                warn!(%err, "using default world");
                World::default()
            }
        };
        info!(
            chunk_width = world.config().chunk_width,
            chunk_height = world.config().chunk_height,
            stabilize_every = world.config().stabilize_every,
            seed = settings.seed,
            "starting viewer"
        );

        let mut app = Self {
            world,
            rng: SmallRng::seed_from_u64(settings.seed),
            scatter_count: settings.scatter,
            camera: Camera::default(),
            is_running: true,
            last_update: Instant::now(),
            target_rate: 60.0,
            live_color: Color32::from_gray(200),
            cluster_color: Color32::YELLOW,
            paused_color: Color32::from_rgb(90, 90, 30),
        };
        app.scatter_random();
        app
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.target_rate.max(0.1))
    }

    pub fn step(&mut self) {
        self.world.advance();
    }

    pub fn clear(&mut self) {
        self.world.clear();
    }

    pub fn scatter_random(&mut self) {
        scatter(&mut self.world, &mut self.rng, self.scatter_count, SCATTER_RADIUS);
        info!(
            cells = self.scatter_count,
            clusters = self.world.cluster_count(),
            "scattered random cells"
        );
    }

    /// Stamp `pattern` around the cell at the middle of the view.
    pub fn stamp_pattern(&mut self, pattern: &Pattern) {
        let (x, y) = self.camera.to_world(0.0, 0.0);
        pattern.stamp_centered(&mut self.world, x, y);
    }

    pub fn toggle_cell(&mut self, x: i64, y: i64) {
        self.world.toggle(x, y);
    }

    pub fn set_cell(&mut self, x: i64, y: i64, alive: bool) {
        self.world.write(x, y, Cell::from(alive));
    }
}
