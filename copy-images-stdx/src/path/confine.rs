use std::path::{Component, Path, PathBuf};

use path_clean::PathClean;

pub trait Confine {
	/// Turns the path into one that stays below whatever directory it is joined onto:
	/// roots, prefixes and parent components are dropped after lexical cleaning.
	fn confine(&self) -> PathBuf;
}

impl<T: AsRef<Path>> Confine for T {
	fn confine(&self) -> PathBuf {
		self.as_ref()
			.clean()
			.components()
			.filter(|c| matches!(c, Component::Normal(_)))
			.collect()
	}
}
