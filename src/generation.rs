use crate::{Cell, Config, LifeError, Result};
use ahash::AHashSet as HashSet;
use std::ops::Range;

/// Game of Life on an unbounded grid.
///
/// Only live cells are stored, so the pattern may drift or grow in any
/// direction without hitting a border. Two generations are equal when their
/// live cells are equal; the generation counter takes no part in it.
#[derive(Clone, Debug, Default)]
pub struct Generation {
    live: HashSet<Cell>,
    generation: u64,
}

impl Generation {
    /// Creates a generation without live cells.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generation with the given live cells.
    pub fn from_cells<C: Into<Cell>>(cells: impl IntoIterator<Item = C>) -> Self {
        cells.into_iter().map(Into::into).collect()
    }

    /// Number of live neighbours of `cell`, the cell itself is not counted.
    fn neighbours_count(&self, cell: Cell) -> usize {
        cell.neighbours()
            .filter(|neighbour| self.live.contains(neighbour))
            .count()
    }

    fn update(&mut self) {
        // only cells next to a live one can have a non-zero neighbour count
        let agenda: HashSet<Cell> = self
            .live
            .iter()
            .flat_map(|&cell| cell.neighbourhood())
            .collect();

        let next = agenda
            .into_iter()
            .filter(|&cell| {
                let count = self.neighbours_count(cell);
                count == 3 || (count == 2 && self.live.contains(&cell))
            })
            .collect();

        self.live = next;
    }

    /// Advances the simulation by `steps` generations.
    ///
    /// Returns the generation counter after the update. A negative `steps`
    /// or a counter that would overflow is rejected before any update, and
    /// leaves the field untouched.
    pub fn advance(&mut self, steps: i64) -> Result<u64> {
        let count = u64::try_from(steps).map_err(|_| LifeError::NegativeSteps(steps))?;
        let generation = self
            .generation
            .checked_add(count)
            .ok_or(LifeError::GenerationOverflow(self.generation))?;

        for _ in 0..count {
            self.update();
        }
        self.generation = generation;
        log::debug!(
            "generation {}: population {}",
            self.generation,
            self.live.len()
        );
        Ok(self.generation)
    }

    /// Advances the simulation by a single generation.
    pub fn step(&mut self) -> Result<u64> {
        self.advance(1)
    }

    /// Number of updates applied since creation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn set_generation(&mut self, generation: u64) {
        self.generation = generation;
    }

    /// Number of live cells.
    pub fn count(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn is_alive(&self, cell: impl Into<Cell>) -> bool {
        self.live.contains(&cell.into())
    }

    /// Makes the cell alive or dead; setting the current state again is a no-op.
    pub fn set_alive(&mut self, cell: impl Into<Cell>, alive: bool) {
        let cell = cell.into();
        if alive {
            self.live.insert(cell);
        } else {
            self.live.remove(&cell);
        }
    }

    /// Live cells in no particular order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + Clone + '_ {
        self.live.iter().copied()
    }

    /// Live cells in row-major order.
    pub fn sorted_cells(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.cells().collect();
        cells.sort_unstable();
        cells
    }

    fn span(&self, key: impl Fn(&Cell) -> i32) -> Range<i64> {
        let mut values = self.live.iter().map(|cell| i64::from(key(cell)));
        let Some(first) = values.next() else {
            return 0..0;
        };
        let (min, max) = values.fold((first, first), |(min, max), v| (min.min(v), max.max(v)));
        min..max + 1
    }

    /// Half-open range of rows holding live cells, `0..0` when there are none.
    pub fn row_range(&self) -> Range<i64> {
        self.span(Cell::row)
    }

    /// Half-open range of columns holding live cells, `0..0` when there are none.
    pub fn column_range(&self) -> Range<i64> {
        self.span(Cell::column)
    }

    /// Like [`Self::is_alive`], for coordinates that may lie off the grid.
    fn is_alive_at(&self, row: i64, column: i64) -> bool {
        match (i32::try_from(row), i32::try_from(column)) {
            (Ok(row), Ok(column)) => self.is_alive((row, column)),
            _ => false,
        }
    }

    /// Renders the given part of the field, one line per row.
    pub fn render_region(
        &self,
        rows: Range<i64>,
        columns: Range<i64>,
        live: char,
        dead: char,
    ) -> String {
        rows.map(|row| {
            columns
                .clone()
                .map(|column| {
                    if self.is_alive_at(row, column) {
                        live
                    } else {
                        dead
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
    }

    /// Renders the bounding box of the live cells; boxes too large to print
    /// are replaced by a fixed window around the origin.
    pub fn render(&self, live: char, dead: char) -> String {
        let mut rows = self.row_range();
        let mut columns = self.column_range();
        if rows.end - rows.start > Config::MAX_RENDER_ROWS {
            rows = Config::CLAMPED_ROWS;
        }
        if columns.end - columns.start > Config::MAX_RENDER_COLUMNS {
            columns = Config::CLAMPED_COLUMNS;
        }
        self.render_region(rows, columns, live, dead)
    }
}

impl PartialEq for Generation {
    fn eq(&self, other: &Self) -> bool {
        self.live == other.live
    }
}

impl Eq for Generation {}

impl FromIterator<Cell> for Generation {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            live: iter.into_iter().collect(),
            generation: 0,
        }
    }
}

impl Extend<Cell> for Generation {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.live.extend(iter);
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(Config::LIVE_CHAR, Config::DEAD_CHAR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: [(i32, i32); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];
    const BLINKER: [(i32, i32); 3] = [(0, 0), (0, 1), (0, 2)];
    const GLIDER: [(i32, i32); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

    #[test]
    fn test_empty_stays_empty() {
        let mut life = Generation::new();
        assert_eq!(life.advance(10).unwrap(), 10);
        assert_eq!(life.count(), 0);
        assert_eq!(life.step().unwrap(), 11);
        assert!(life.is_empty());
    }

    #[test]
    fn test_block_is_still() {
        let mut life = Generation::from_cells(BLOCK);
        life.step().unwrap();
        assert_eq!(life, Generation::from_cells(BLOCK));
        assert_eq!(life.generation(), 1);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut life = Generation::from_cells(BLINKER);
        life.step().unwrap();
        assert_eq!(life, Generation::from_cells([(-1, 1), (0, 1), (1, 1)]));
        life.step().unwrap();
        assert_eq!(life, Generation::from_cells(BLINKER));
    }

    #[test]
    fn test_glider_translates() {
        let mut life = Generation::from_cells(GLIDER);
        assert_eq!(life.advance(4).unwrap(), 4);
        let shifted = Generation::from_cells(GLIDER.map(|(r, c)| (r + 1, c + 1)));
        assert_eq!(life, shifted);
    }

    #[test]
    fn test_glider_crosses_origin() {
        let start = GLIDER.map(|(r, c)| (r - 40, c - 40));
        let mut life = Generation::from_cells(start);
        life.advance(160).unwrap();
        assert_eq!(life, Generation::from_cells(GLIDER));
        assert_eq!(life.row_range(), 0..3);
    }

    #[test]
    fn test_negative_steps_rejected() {
        let mut life = Generation::from_cells(BLINKER);
        life.step().unwrap();
        let before = life.clone();
        assert!(matches!(life.advance(-1), Err(LifeError::NegativeSteps(-1))));
        assert_eq!(life, before);
        assert_eq!(life.generation(), 1);
        assert_eq!(life.advance(0).unwrap(), 1);
    }

    #[test]
    fn test_counter_overflow_rejected() {
        let mut life = Generation::from_cells(BLINKER);
        life.set_generation(u64::MAX - 1);
        assert_eq!(life.step().unwrap(), u64::MAX);
        let before = life.clone();
        assert!(matches!(
            life.step(),
            Err(LifeError::GenerationOverflow(u64::MAX))
        ));
        assert!(life.advance(i64::MAX).is_err());
        assert_eq!(life, before);
        assert_eq!(life.generation(), u64::MAX);
        assert_eq!(life.advance(0).unwrap(), u64::MAX);
    }

    #[test]
    fn test_set_alive_is_idempotent() {
        let mut life = Generation::new();
        life.set_alive((2, -3), true);
        life.set_alive((2, -3), true);
        assert_eq!(life.count(), 1);
        assert!(life.is_alive(Cell::new(2, -3)));

        life.set_alive((7, 7), false);
        assert_eq!(life.count(), 1);
        life.set_alive((2, -3), false);
        assert!(life.is_empty());
    }

    #[test]
    fn test_equality_ignores_counter() {
        let mut a = Generation::from_cells(BLOCK);
        a.advance(3).unwrap();
        let b = Generation::from_cells(BLOCK);
        assert_eq!(a, b);
        assert_ne!(a.generation(), b.generation());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Generation::from_cells(BLINKER);
        let mut copy = original.clone();
        copy.set_alive((5, 5), true);
        copy.step().unwrap();
        assert_eq!(original, Generation::from_cells(BLINKER));
        assert_eq!(original.generation(), 0);
    }

    #[test]
    fn test_ranges() {
        let life = Generation::new();
        assert_eq!(life.row_range(), 0..0);
        assert_eq!(life.column_range(), 0..0);

        let life = Generation::from_cells([(-3, 4), (2, -1), (0, 10)]);
        assert_eq!(life.row_range(), -3..3);
        assert_eq!(life.column_range(), -1..11);
    }

    #[test]
    fn test_ranges_at_grid_bounds() {
        let life = Generation::from_cells([(0, i32::MAX)]);
        assert_eq!(life.column_range(), i64::from(i32::MAX)..i64::from(i32::MAX) + 1);
        assert_eq!(life.row_range(), 0..1);

        let life = Generation::from_cells([(i32::MIN, i32::MIN), (i32::MAX, i32::MAX)]);
        assert_eq!(life.row_range(), i64::from(i32::MIN)..i64::from(i32::MAX) + 1);
        assert_eq!(life.column_range(), i64::from(i32::MIN)..i64::from(i32::MAX) + 1);
    }

    #[test]
    fn test_display_at_grid_bounds() {
        let life = Generation::from_cells([(i32::MIN, 0), (i32::MAX - 1, 0)]);
        let text = life.to_string();
        assert_eq!(text.lines().count(), 51);
        assert!(text.lines().all(|line| line == "."));

        let life = Generation::from_cells([(i32::MAX, i32::MAX)]);
        assert_eq!(life.to_string(), "O");
        assert_eq!(
            life.render_region(i64::from(i32::MAX)..i64::from(i32::MAX) + 2, 0..1, 'O', '.'),
            ".\n."
        );
    }

    #[test]
    fn test_render_region() {
        let life = Generation::from_cells(GLIDER);
        assert_eq!(life.render_region(0..3, 0..3, '#', ' '), " # \n  #\n###");
        assert_eq!(life.render_region(-1..0, 0..2, '#', '-'), "--");
        assert_eq!(life.render_region(0..0, 0..3, '#', '-'), "");
    }

    #[test]
    fn test_display() {
        let life = Generation::from_cells(BLINKER);
        assert_eq!(life.to_string(), "OOO");
        assert_eq!(Generation::new().to_string(), "");

        let life = Generation::from_cells([(-100, 0), (100, 0)]);
        let text = life.to_string();
        assert_eq!(text.lines().count(), 51);
        assert!(text.lines().all(|line| line == "."));
    }

    #[test]
    fn test_display_clamps_columns() {
        let life = Generation::from_cells([(0, -500), (0, 0), (0, 500)]);
        let text = life.to_string();
        assert_eq!(text.chars().count(), 101);
        assert_eq!(text.chars().nth(50), Some('O'));
        assert_eq!(text.matches('O').count(), 1);
    }

    #[test]
    fn test_cells_snapshot() {
        let life = Generation::from_cells(GLIDER);
        let cells = life.cells();
        assert_eq!(cells.clone().count(), 5);
        assert_eq!(cells.count(), 5);
        let sorted: Vec<(i32, i32)> = life.sorted_cells().into_iter().map(Into::into).collect();
        assert_eq!(sorted, GLIDER.to_vec());
    }
}
