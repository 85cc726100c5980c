// camera.rs - Screen <-> world mapping for the viewer

pub const MIN_CELL_PX: f32 = 0.5;
pub const MAX_CELL_PX: f32 = 32.0;

/// Pan offset and zoom. World cell `(0, 0)` sits at the canvas centre
/// shifted by `offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub offset: (f32, f32),
    pub cell_px: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            offset: (0.0, 0.0),
            cell_px: 2.0,
        }
    }
}

impl Camera {
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset.0 += dx;
        self.offset.1 += dy;
    }

    /// Multiply zoom, keeping the world point under `anchor` fixed.
    /// `anchor` is relative to the canvas centre.
    pub fn zoom_at(&mut self, factor: f32, anchor: (f32, f32)) {
        let next = (self.cell_px * factor).clamp(MIN_CELL_PX, MAX_CELL_PX);
        let applied = next / self.cell_px;
        self.offset.0 = anchor.0 - (anchor.0 - self.offset.0) * applied;
        self.offset.1 = anchor.1 - (anchor.1 - self.offset.1) * applied;
        self.cell_px = next;
    }

    /// Top-left corner of world cell `(x, y)`, relative to the canvas centre.
    pub fn to_screen(&self, x: i64, y: i64) -> (f32, f32) {
        (
            self.offset.0 + x as f32 * self.cell_px,
            self.offset.1 + y as f32 * self.cell_px,
        )
    }

    /// World cell under a point given relative to the canvas centre.
    pub fn to_world(&self, sx: f32, sy: f32) -> (i64, i64) {
        (
            ((sx - self.offset.0) / self.cell_px).floor() as i64,
            ((sy - self.offset.1) / self.cell_px).floor() as i64,
        )
    }
}
