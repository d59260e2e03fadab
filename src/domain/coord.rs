//! Pixel-space cell coordinates on a toroidal board.
//!
//! Cells are addressed by the pixel position of their top-left corner, so every
//! coordinate is a multiple of the block size.

/// Floor a pixel coordinate down to the nearest multiple of `size`.
/// Results outside the `i32` range saturate.
pub fn round_block(n: f32, size: i32) -> i32 {
    ((n / size as f32).floor() * size as f32) as i32
}

/// Top-left pixel corner of a grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

impl CellCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift by whole cells (not pixels)
    pub const fn offset_cells(self, dx: i32, dy: i32, block_size: i32) -> Self {
        Self::new(self.x + dx * block_size, self.y + dy * block_size)
    }
}

impl From<(i32, i32)> for CellCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Moore neighborhood in cell units: right, left, top, bottom, then diagonals.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 1),
    (-1, -1),
    (-1, 1),
];

/// Dimensions of the toroidal board in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridGeometry {
    width: i32,
    height: i32,
    block_size: i32,
}

impl GridGeometry {
    pub const fn new(width: i32, height: i32, block_size: i32) -> Self {
        Self { width, height, block_size }
    }

    /// Largest block-aligned board that fits inside `width × height` pixels
    pub fn fitting(width: f32, height: f32, block_size: i32) -> Self {
        Self::new(
            round_block(width, block_size),
            round_block(height, block_size),
            block_size,
        )
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    pub const fn block_size(&self) -> i32 {
        self.block_size
    }

    /// Board size in cells (columns, rows)
    pub const fn cells(&self) -> (usize, usize) {
        (
            (self.width / self.block_size) as usize,
            (self.height / self.block_size) as usize,
        )
    }

    pub const fn contains(&self, coord: CellCoord) -> bool {
        coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height
    }

    /// Quantize a pointer position to the cell under it, if it lies on the board
    pub fn quantize(&self, px: f32, py: f32) -> Option<CellCoord> {
        let coord = CellCoord::new(
            round_block(px, self.block_size),
            round_block(py, self.block_size),
        );
        self.contains(coord).then_some(coord)
    }

    /// Wrap one axis: stepping past the far edge lands on 0, stepping below 0
    /// lands on the last cell of that axis.
    const fn wrap_axis(&self, n: i32, extent: i32) -> i32 {
        if n >= extent {
            0
        } else if n < 0 {
            extent - self.block_size
        } else {
            n
        }
    }

    pub const fn wrap(&self, coord: CellCoord) -> CellCoord {
        CellCoord::new(
            self.wrap_axis(coord.x, self.width),
            self.wrap_axis(coord.y, self.height),
        )
    }

    /// The eight wrapped neighbors of `coord`
    pub fn neighbors(&self, coord: CellCoord) -> impl Iterator<Item = CellCoord> + '_ {
        MOORE_OFFSETS
            .iter()
            .map(move |&(dx, dy)| self.wrap(coord.offset_cells(dx, dy, self.block_size)))
    }
}
