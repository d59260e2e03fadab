use std::collections::HashSet;

use rayon::prelude::*;

use super::{Cell, CellCoord, GridGeometry};

/// Changes one generation would make, computed against a single snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationPlan {
    pub births: Vec<CellCoord>,
    pub deaths: Vec<CellCoord>,
}

/// Sparse set of live cells on a toroidal board.
///
/// Only live cells are stored; everything else is implicitly dead. A
/// generation only has to look at live cells and their neighbors, since a
/// cell with no live cell around it cannot be born.
#[derive(Clone, Debug)]
pub struct LiveCells {
    geometry: GridGeometry,
    cells: HashSet<CellCoord>,
}

impl LiveCells {
    pub fn new(geometry: GridGeometry) -> Self {
        Self {
            geometry,
            cells: HashSet::new(),
        }
    }

    /// Build a board from an iterator of live coordinates
    pub fn from_coords(
        geometry: GridGeometry,
        coords: impl IntoIterator<Item = CellCoord>,
    ) -> Self {
        Self {
            geometry,
            cells: coords.into_iter().collect(),
        }
    }

    pub const fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    /// Returns true if the cell was not live before
    pub fn insert(&mut self, coord: CellCoord) -> bool {
        self.cells.insert(coord)
    }

    /// Returns true if the cell was live before
    pub fn remove(&mut self, coord: CellCoord) -> bool {
        self.cells.remove(&coord)
    }

    pub fn contains(&self, coord: CellCoord) -> bool {
        self.cells.contains(&coord)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Iterate live cells in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.cells.iter().copied()
    }

    /// Live cells sorted by (x, y), handy for comparing boards
    pub fn sorted(&self) -> Vec<CellCoord> {
        let mut cells: Vec<_> = self.iter().collect();
        cells.sort();
        cells
    }

    /// Count live cells among the eight wrapped neighbors
    pub fn count_live_neighbors(&self, coord: CellCoord) -> u8 {
        self.geometry
            .neighbors(coord)
            .filter(|n| self.cells.contains(n))
            .count() as u8
    }

    /// Every live cell plus all of its wrapped neighbors
    pub fn candidate_cells(&self) -> HashSet<CellCoord> {
        let mut candidates = HashSet::with_capacity(self.cells.len() * 9);
        for &coord in &self.cells {
            candidates.insert(coord);
            candidates.extend(self.geometry.neighbors(coord));
        }
        candidates
    }

    /// Next state of `coord` if it differs from the current one
    fn transition(&self, coord: CellCoord) -> Option<Cell> {
        let current = Cell::from_alive(self.contains(coord));
        let next = current.evolve(self.count_live_neighbors(coord));
        (next != current).then_some(next)
    }

    /// Schedule births and deaths for one generation into the given buffers.
    /// The board itself is not touched.
    pub fn plan_into(&self, births: &mut Vec<CellCoord>, deaths: &mut Vec<CellCoord>) {
        for coord in self.candidate_cells() {
            match self.transition(coord) {
                Some(Cell::Alive) => births.push(coord),
                Some(Cell::Dead) => deaths.push(coord),
                None => {}
            }
        }
    }

    /// Same schedule as [`plan_into`](Self::plan_into), evaluated with rayon
    pub fn plan_parallel_into(&self, births: &mut Vec<CellCoord>, deaths: &mut Vec<CellCoord>) {
        let candidates: Vec<CellCoord> = self.candidate_cells().into_iter().collect();
        let changes: Vec<(CellCoord, Cell)> = candidates
            .par_iter()
            .filter_map(|&coord| self.transition(coord).map(|next| (coord, next)))
            .collect();

        for (coord, next) in changes {
            if next.is_alive() {
                births.push(coord);
            } else {
                deaths.push(coord);
            }
        }
    }

    pub fn plan(&self) -> GenerationPlan {
        let mut plan = GenerationPlan::default();
        self.plan_into(&mut plan.births, &mut plan.deaths);
        plan
    }

    /// Advance one generation in place, without any notifications
    pub fn step(&mut self) {
        let plan = self.plan();
        for coord in plan.deaths {
            self.cells.remove(&coord);
        }
        self.cells.extend(plan.births);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEO: GridGeometry = GridGeometry::new(100, 80, 10);

    fn board(cells: &[(i32, i32)]) -> LiveCells {
        LiveCells::from_coords(GEO, cells.iter().copied().map(CellCoord::from))
    }

    #[test]
    fn test_empty_board_has_no_neighbors() {
        let b = LiveCells::new(GEO);
        for x in (0..100).step_by(10) {
            for y in (0..80).step_by(10) {
                assert_eq!(b.count_live_neighbors(CellCoord::new(x, y)), 0);
            }
        }
    }

    #[test]
    fn test_insert_is_set_idempotent() {
        let mut b = LiveCells::new(GEO);
        assert!(b.insert(CellCoord::new(10, 10)));
        assert!(!b.insert(CellCoord::new(10, 10)));
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn test_origin_counts_toward_wrapped_corners() {
        let b = board(&[(0, 0)]);
        for (x, y) in [(90, 70), (90, 0), (0, 70), (90, 10), (10, 70)] {
            assert_eq!(b.count_live_neighbors(CellCoord::new(x, y)), 1, "({x},{y})");
        }
        assert_eq!(b.count_live_neighbors(CellCoord::new(0, 0)), 0);
        assert_eq!(b.count_live_neighbors(CellCoord::new(20, 0)), 0);
    }

    #[test]
    fn test_full_neighborhood_counts_eight() {
        let b = board(&[
            (0, 0),
            (10, 0),
            (20, 0),
            (0, 10),
            (20, 10),
            (0, 20),
            (10, 20),
            (20, 20),
        ]);
        assert_eq!(b.count_live_neighbors(CellCoord::new(10, 10)), 8);
    }

    #[test]
    fn test_candidates_of_single_cell() {
        let b = board(&[(50, 40)]);
        let candidates = b.candidate_cells();
        assert_eq!(candidates.len(), 9);
        assert!(candidates.contains(&CellCoord::new(50, 40)));
        assert!(candidates.contains(&CellCoord::new(40, 30)));
        assert!(candidates.contains(&CellCoord::new(60, 50)));
    }

    #[test]
    fn test_candidates_wrap_at_edge() {
        let b = board(&[(0, 0)]);
        let candidates = b.candidate_cells();
        assert!(candidates.contains(&CellCoord::new(90, 70)));
        assert!(candidates.contains(&CellCoord::new(10, 70)));
        assert!(!candidates.contains(&CellCoord::new(-10, 0)));
    }

    #[test]
    fn test_blinker_plan() {
        let b = board(&[(10, 20), (20, 20), (30, 20)]);
        let mut plan = b.plan();
        plan.births.sort();
        plan.deaths.sort();
        assert_eq!(plan.births, vec![CellCoord::new(20, 10), CellCoord::new(20, 30)]);
        assert_eq!(plan.deaths, vec![CellCoord::new(10, 20), CellCoord::new(30, 20)]);
    }

    #[test]
    fn test_parallel_plan_matches_serial() {
        let b = board(&[(10, 0), (20, 10), (0, 20), (10, 20), (20, 20), (90, 70), (0, 70)]);
        let mut serial = b.plan();
        let mut parallel = GenerationPlan::default();
        b.plan_parallel_into(&mut parallel.births, &mut parallel.deaths);
        for p in [&mut serial, &mut parallel] {
            p.births.sort();
            p.deaths.sort();
        }
        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_block_is_still_life() {
        let mut b = board(&[(40, 40), (50, 40), (40, 50), (50, 50)]);
        let before = b.sorted();
        for _ in 0..10 {
            b.step();
        }
        assert_eq!(b.sorted(), before);
    }
}
