use rayon::prelude::*;

use super::{Cell, CellCoord, GridGeometry, LiveCells};

/// Full-board grid in cell units.
/// Evaluates every cell each generation, so it serves as the reference the
/// sparse [`LiveCells`] evaluation is checked against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseGrid {
    geometry: GridGeometry,
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl DenseGrid {
    pub fn new(geometry: GridGeometry) -> Self {
        let (cols, rows) = geometry.cells();
        Self {
            geometry,
            cols,
            rows,
            cells: vec![Cell::Dead; cols * rows],
        }
    }

    pub fn from_live_cells(live: &LiveCells) -> Self {
        let mut grid = Self::new(live.geometry());
        for coord in live.iter() {
            if let Some(idx) = grid.index_of(coord) {
                grid.cells[idx] = Cell::Alive;
            }
        }
        grid
    }

    const fn get_index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    fn index_of(&self, coord: CellCoord) -> Option<usize> {
        self.geometry.contains(coord).then(|| {
            let block = self.geometry.block_size();
            self.get_index((coord.x / block) as usize, (coord.y / block) as usize)
        })
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    fn count_live_neighbors(&self, col: usize, row: usize) -> u8 {
        let w = self.cols as i64;
        let h = self.rows as i64;

        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter(|&(dx, dy)| {
                let nx = (col as i64 + dx).rem_euclid(w) as usize;
                let ny = (row as i64 + dy).rem_euclid(h) as usize;
                self.cells[self.get_index(nx, ny)].is_alive()
            })
            .count() as u8
    }

    fn next_cell(&self, idx: usize) -> Cell {
        let (col, row) = (idx % self.cols, idx / self.cols);
        self.cells[idx].evolve(self.count_live_neighbors(col, row))
    }

    /// Next generation, serial
    pub fn evolve(&self) -> Self {
        let cells = (0..self.cells.len()).map(|idx| self.next_cell(idx)).collect();
        Self { cells, ..self.clone_shape() }
    }

    /// Next generation, rows split across the rayon pool
    pub fn evolve_parallel(&self) -> Self {
        let cells = (0..self.cells.len())
            .into_par_iter()
            .map(|idx| self.next_cell(idx))
            .collect();
        Self { cells, ..self.clone_shape() }
    }

    fn clone_shape(&self) -> Self {
        Self {
            geometry: self.geometry,
            cols: self.cols,
            rows: self.rows,
            cells: Vec::new(),
        }
    }

    pub fn to_live_cells(&self) -> LiveCells {
        let block = self.geometry.block_size();
        let coords = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(idx, _)| {
                let (col, row) = (idx % self.cols, idx / self.cols);
                CellCoord::new(col as i32 * block, row as i32 * block)
            });
        LiveCells::from_coords(self.geometry, coords)
    }
}
