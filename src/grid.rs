use crate::data::{Direction, Site};
use crate::disjoint_set::DisjointSet;
use crate::error::PercolationError;

/// An N-by-N grid of sites that are opened one at a time.
///
/// Connectivity lives in two disjoint-set structures over the same linear
/// index space `row * (N + 2) + col`. Row 0 is a virtual row above the grid
/// and row N + 1 a virtual row below it; all cells of a virtual row are
/// linked together at construction, so each behaves as a single node.
///
/// * `primary` has both virtual rows and answers [`PercolationGrid::percolates`].
/// * `auxiliary` has only the virtual top row and answers
///   [`PercolationGrid::is_full`]. Bottom-row sites in it are never joined
///   through a virtual bottom, which would otherwise make every open bottom
///   site look full as soon as the system percolates (backwash).
#[derive(Debug, Clone)]
pub struct PercolationGrid {
	size: usize,
	opened: Vec<bool>,
	open_count: usize,
	primary: DisjointSet,
	auxiliary: DisjointSet,
}

impl PercolationGrid {
	pub fn new(size: usize) -> Result<PercolationGrid, PercolationError> {
		if size == 0 {
			return Err(PercolationError::InvalidArgument { name: "grid size", value: 0 });
		}
		let width = size + 2;
		let mut grid = PercolationGrid {
			size,
			opened: vec![false; size * size],
			open_count: 0,
			primary: DisjointSet::make_singletons(width * width),
			auxiliary: DisjointSet::make_singletons((size + 1) * width),
		};

		let top = grid.virtual_top();
		let bottom = grid.virtual_bottom();
		for col in 2..=size {
			let top_cell = grid.index(0, col);
			let bottom_cell = grid.index(size + 1, col);
			grid.primary.union(top, top_cell);
			grid.auxiliary.union(top, top_cell);
			grid.primary.union(bottom, bottom_cell);
		}
		Ok(grid)
	}

	/// Grid dimension N.
	pub fn size(&self) -> usize {
		self.size
	}

	/// Number of distinct sites opened so far.
	pub fn open_sites(&self) -> usize {
		self.open_count
	}

	/// Opens the site at (row, col) and links it with its open neighbors.
	/// Opening an already open site changes nothing.
	pub fn open(&mut self, row: usize, col: usize) -> Result<(), PercolationError> {
		let site = self.check(row, col)?;
		let slot = self.slot(site);
		if !self.opened[slot] {
			self.opened[slot] = true;
			self.open_count += 1;
			trace!("opened site {}, {} open", site, self.open_count);
		}

		let center = self.index(site.row, site.col);
		if site.row == 1 {
			let above = self.index(0, site.col);
			self.primary.union(center, above);
			self.auxiliary.union(center, above);
		}
		if site.row == self.size {
			// below row N only exists in the primary structure
			let below = self.index(self.size + 1, site.col);
			self.primary.union(center, below);
		}

		for &dir in Direction::adjacent_directions().iter() {
			if let Some(nb) = site.neighbor(dir, self.size) {
				if self.opened[self.slot(nb)] {
					let other = self.index(nb.row, nb.col);
					self.primary.union(center, other);
					self.auxiliary.union(center, other);
				}
			}
		}
		Ok(())
	}

	pub fn is_open(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
		let site = self.check(row, col)?;
		Ok(self.opened[self.slot(site)])
	}

	/// Whether the site is connected to the top row through open sites.
	/// Does not depend on whether the whole system percolates.
	pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool, PercolationError> {
		let site = self.check(row, col)?;
		let idx = self.index(site.row, site.col);
		let top = self.virtual_top();
		Ok(self.auxiliary.connected(top, idx))
	}

	pub fn percolates(&mut self) -> bool {
		let top = self.virtual_top();
		let bottom = self.virtual_bottom();
		self.primary.connected(top, bottom)
	}

	fn check(&self, row: usize, col: usize) -> Result<Site, PercolationError> {
		if row < 1 || col < 1 || row > self.size || col > self.size {
			return Err(PercolationError::OutOfBounds { row, col, size: self.size });
		}
		Ok(Site::new(row, col))
	}

	fn index(&self, row: usize, col: usize) -> usize {
		row * (self.size + 2) + col
	}

	fn slot(&self, site: Site) -> usize {
		(site.row - 1) * self.size + (site.col - 1)
	}

	fn virtual_top(&self) -> usize {
		self.index(0, 1)
	}

	fn virtual_bottom(&self) -> usize {
		self.index(self.size + 1, 1)
	}
}
