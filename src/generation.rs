use crate::error::Error;
use std::{ops::Index, sync::Arc};

/// One row of cells at one time step. Never empty, never mutated, and
/// cheap to clone.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct Generation {
    cells: Arc<[bool]>,
}

impl Generation {
    pub fn new(cells: Vec<bool>) -> Result<Self, Error> {
        if cells.is_empty() {
            return Err(Error::InvalidGeneration);
        }
        Ok(Generation {
            cells: cells.into(),
        })
    }

    /// Characters equal to `alive` become live cells; anything else is dead.
    pub fn from_symbols(line: &str, alive: char) -> Result<Self, Error> {
        Generation::new(line.chars().map(|c| c == alive).collect())
    }

    pub(crate) fn from_cells_unchecked(cells: Vec<bool>) -> Self {
        debug_assert!(!cells.is_empty(), "A generation cannot be empty.");
        Generation {
            cells: cells.into(),
        }
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    // (left, center, right), wrapping around both ends of the row.
    pub fn neighborhood(&self, index: usize) -> (bool, bool, bool) {
        let width = self.width();
        debug_assert!(index < width, "Cell index out of range.");
        let left = self.cells[(index + width - 1) % width];
        let right = self.cells[(index + 1) % width];
        (left, self.cells[index], right)
    }

    pub fn to_symbols(&self, dead: char, alive: char) -> String {
        self.cells
            .iter()
            .map(|&cell| if cell { alive } else { dead })
            .collect()
    }
}

impl Index<usize> for Generation {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl TryFrom<Vec<bool>> for Generation {
    type Error = Error;

    fn try_from(cells: Vec<bool>) -> Result<Self, Self::Error> {
        Generation::new(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(s: &str) -> Generation {
        Generation::from_symbols(s, '1').unwrap()
    }

    #[test]
    fn test_empty_generation() {
        assert!(matches!(
            Generation::new(Vec::new()),
            Err(Error::InvalidGeneration)
        ));
        assert!(matches!(
            Generation::from_symbols("", '#'),
            Err(Error::InvalidGeneration)
        ));
    }

    #[test]
    fn test_from_symbols() {
        let generation = Generation::from_symbols("..#.#x", '#').unwrap();
        assert_eq!(
            generation.cells(),
            &[false, false, true, false, true, false][..]
        );
        assert_eq!(generation.width(), 6);
        assert_eq!(generation.population(), 2);
    }

    #[test]
    fn test_neighborhood_wraps() {
        let generation = row("10010");
        assert_eq!(generation.neighborhood(0), (false, true, false));
        assert_eq!(generation.neighborhood(3), (false, true, false));
        assert_eq!(generation.neighborhood(4), (true, false, true));
        let generation = row("01");
        assert_eq!(generation.neighborhood(0), (true, false, true));
        assert_eq!(generation.neighborhood(1), (false, true, false));
    }

    #[test]
    fn test_neighborhood_edges() {
        let generation = row("100101");
        let n = generation.width();
        assert_eq!(generation.neighborhood(0).0, generation[n - 1]);
        assert_eq!(generation.neighborhood(n - 1).2, generation[0]);
    }

    #[test]
    fn test_single_cell() {
        assert_eq!(row("1").neighborhood(0), (true, true, true));
        assert_eq!(row("0").neighborhood(0), (false, false, false));
    }

    #[test]
    fn test_to_symbols() {
        let generation = Generation::new(vec![true, false, true]).unwrap();
        assert_eq!(generation.to_symbols('0', '1'), "101");
        assert_eq!(generation.to_symbols('.', 'o'), "o.o");
    }
}
