
// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
// Weighted quick-union: the smaller tree is hung under the root of the larger one.
#[derive(Debug, Clone)]
pub struct DisjointSet {
	parent: Vec<usize>,
	size: Vec<usize>,
	count: usize,
}

impl DisjointSet {
	pub fn make_singletons(len: usize) -> DisjointSet {
		DisjointSet {
			parent: (0..len).collect(),
			size: vec![1; len],
			count: len,
		}
	}

	pub fn len(&self) -> usize {
		self.parent.len()
	}

	pub fn is_empty(&self) -> bool {
		self.parent.is_empty()
	}

	/// Number of disjoint sets.
	pub fn count(&self) -> usize {
		self.count
	}

	pub fn find(&mut self, x: usize) -> usize {
		let parent = self.parent[x];
		if parent != x {
			self.parent[x] = self.find(parent);
		}
		self.parent[x]
	}

	pub fn connected(&mut self, x: usize, y: usize) -> bool {
		self.find(x) == self.find(y)
	}

	pub fn union(&mut self, x: usize, y: usize) {
		let x_root = self.find(x);
		let y_root = self.find(y);
		if x_root == y_root {
			return;
		}
		let (small, large) = if self.size[x_root] < self.size[y_root] {
			(x_root, y_root)
		} else {
			(y_root, x_root)
		};
		self.parent[small] = large;
		self.size[large] += self.size[small];
		self.count -= 1;
	}
}
