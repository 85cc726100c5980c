// grid.rs - Fixed-size cell storage backing a single cluster

/// State of a single cell on the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Any non-zero value counts as alive.
    pub fn from_u8(value: u8) -> Self {
        if value > 0 { Cell::Alive } else { Cell::Dead }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Flat `width * height` array of cells addressed by local coordinates.
///
/// Local coordinates wrap around both axes with Euclidean modulo, so the
/// storage behaves as a small torus and every integer pair resolves to a
/// cell, negatives included.
#[derive(Debug, Clone)]
pub struct ChunkGrid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl ChunkGrid {
    /// Both dimensions must be non-zero; `LifeConfig::validate` guarantees
    /// this for every grid the world creates.
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0, "chunk dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, lx: i64, ly: i64) -> usize {
        let col = lx.rem_euclid(i64::from(self.width)) as usize;
        let row = ly.rem_euclid(i64::from(self.height)) as usize;
        col + row * self.width as usize
    }

    pub fn get(&self, lx: i64, ly: i64) -> Cell {
        self.cells[self.index(lx, ly)]
    }

    pub fn set(&mut self, lx: i64, ly: i64, value: Cell) {
        let idx = self.index(lx, ly);
        self.cells[idx] = value;
    }

    /// Full scan; O(width * height).
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Row-major walk yielding `(lx, ly, cell)`.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, Cell)> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| ((idx % width) as u32, (idx / width) as u32, cell))
    }
}
