use std::fmt;

/// A grid coordinate. Rows and columns are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Site {
    pub row: usize,
    pub col: usize,
}

impl Site {
    pub fn new(row: usize, col: usize) -> Site {
        Site { row, col }
    }

    /// The neighbor one step away in `dir`, or `None` when it would leave the
    /// 1..=size range. Row 0 and row size+1 are not sites.
    pub fn neighbor(&self, dir: Direction, size: usize) -> Option<Site> {
        let (row, col) = match dir {
            Direction::North => (self.row.checked_sub(1)?, self.col),
            Direction::East => (self.row, self.col + 1),
            Direction::South => (self.row + 1, self.col),
            Direction::West => (self.row, self.col.checked_sub(1)?),
        };
        if row >= 1 && row <= size && col >= 1 && col <= size {
            Some(Site { row, col })
        } else {
            None
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    North, East, South, West,
}

impl Direction {
    pub fn adjacent_directions() -> [Direction; 4] {
        [Direction::North, Direction::East,
        Direction::South, Direction::West]
    }
}
