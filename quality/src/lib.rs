mod color;
mod dataset;
mod line;

pub use color::*;
pub use dataset::*;
pub use line::*;

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("could not open {}: {source}", path.display())]
	Open {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("line {line}: {source}")]
	InvalidNumber {
		line: usize,
		#[source]
		source: InvalidNumber,
	},

	#[error(transparent)]
	IO(#[from] std::io::Error),
}
