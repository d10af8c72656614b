use std::io::BufRead;

use crate::data::Site;
use crate::error::InputError;
use crate::grid::PercolationGrid;

/// A grid size followed by the sites to open, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridScript {
    pub size: usize,
    pub sites: Vec<Site>,
}

pub fn parse_line_of_nums(line: &str, line_no: usize) -> Result<Vec<usize>, InputError> {
    line.split_whitespace()
        .map(|token| token.parse::<usize>().map_err(|_| InputError::BadToken {
            line: line_no,
            token: token.to_string(),
        }))
        .collect()
}

/// Reads whitespace separated integers: the grid size, then row/col pairs.
/// Line breaks carry no meaning.
pub fn read_script<R: BufRead>(reader: R) -> Result<GridScript, InputError> {
    let mut nums = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        nums.extend(parse_line_of_nums(&line?, i + 1)?);
    }

    let mut iter = nums.into_iter();
    let size = iter.next().ok_or(InputError::MissingSize)?;
    let mut sites = Vec::new();
    while let Some(row) = iter.next() {
        let col = iter.next().ok_or(InputError::DanglingCoordinate { row })?;
        sites.push(Site::new(row, col));
    }
    Ok(GridScript { size, sites })
}

impl GridScript {
    /// Opens every listed site on a fresh grid and returns it.
    pub fn replay(&self) -> Result<PercolationGrid, InputError> {
        let mut grid = PercolationGrid::new(self.size)?;
        for site in &self.sites {
            grid.open(site.row, site.col)?;
            let full = grid.is_full(site.row, site.col)?;
            debug!("open {}: full = {}", site, full);
        }
        info!("{}x{} grid, {} open sites, percolates: {}",
            self.size, self.size, grid.open_sites(), grid.percolates());
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PercolationError;

    #[test]
    fn reads_size_and_pairs_across_lines() {
        let text = "3\n1 2\n2 2 3\n2\n";
        let script = read_script(text.as_bytes()).unwrap();
        assert_eq!(script.size, 3);
        assert_eq!(script.sites, vec![Site::new(1, 2), Site::new(2, 2), Site::new(3, 2)]);
    }

    #[test]
    fn replay_reports_percolation() {
        let script = read_script("3\n1 2\n2 2\n3 2\n".as_bytes()).unwrap();
        let mut grid = script.replay().unwrap();
        assert!(grid.percolates());
        assert_eq!(grid.open_sites(), 3);
    }

    #[test]
    fn empty_input_has_no_size() {
        assert!(matches!(read_script("\n  \n".as_bytes()), Err(InputError::MissingSize)));
    }

    #[test]
    fn odd_coordinate_count_is_an_error() {
        let err = read_script("4\n1 1\n2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, InputError::DanglingCoordinate { row: 2 }));
    }

    #[test]
    fn bad_token_reports_line() {
        let err = read_script("4\n1 x\n".as_bytes()).unwrap_err();
        match err {
            InputError::BadToken { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn replay_rejects_sites_outside_grid() {
        let script = read_script("2\n1 1\n3 3\n".as_bytes()).unwrap();
        let err = script.replay().unwrap_err();
        assert!(matches!(
            err,
            InputError::Percolation(PercolationError::OutOfBounds { row: 3, col: 3, size: 2 })
        ));
    }

    #[test]
    fn replay_rejects_zero_size() {
        let script = read_script("0\n".as_bytes()).unwrap();
        assert!(matches!(
            script.replay(),
            Err(InputError::Percolation(PercolationError::InvalidArgument { .. }))
        ));
    }
}
