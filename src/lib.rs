#[macro_use] extern crate log;

mod data;
mod disjoint_set;
mod error;
mod grid;
mod input;
pub mod experiment;
pub mod stats;

pub use data::{Site, Direction};
pub use disjoint_set::DisjointSet;
pub use error::{PercolationError, InputError};
pub use experiment::{PercolationExperiment, Summary};
pub use grid::PercolationGrid;
pub use input::{GridScript, read_script, parse_line_of_nums};
