use std::{
	collections::HashSet,
	path::{Component, Path, PathBuf},
};

use copy_images_stdx::path::is_uri;
use walkdir::WalkDir;

use crate::search_path::{SearchPath, SearchStrategy};

/// One candidate that was checked while resolving a reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
	/// The search path entry the candidate was derived from.
	pub base: PathBuf,
	pub candidate: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
	/// The reference points at a remote resource; the filesystem was not touched.
	External,
	Found { base: PathBuf, path: PathBuf },
	/// Every candidate that was tried, in search order.
	NotFound { attempts: Vec<Attempt> },
}

/// Maps an image reference onto the first existing file in a [`SearchPath`].
/// It keeps no state between calls.
pub struct PathResolver<'a> {
	pub search_path: &'a SearchPath,
	pub strategy: SearchStrategy,
}

impl<'a> PathResolver<'a> {
	pub fn new(search_path: &'a SearchPath, strategy: SearchStrategy) -> Self {
		Self { search_path, strategy }
	}

	#[tracing::instrument(skip(self), ret, level = "debug")]
	pub fn resolve(&self, reference: &str) -> Resolution {
		if is_uri(reference) {
			return Resolution::External;
		}

		let relative = below_base(reference);
		let mut attempts = Vec::new();
		let mut visited = HashSet::new();
		for base in self.search_path.iter() {
			for dir in self.directories(base) {
				if self.strategy == SearchStrategy::Descend && !visited.insert(dir.clone()) {
					continue;
				}
				let candidate = dir.join(&relative);
				tracing::trace!(candidate = %candidate.display(), "checking");
				if candidate.is_file() {
					return Resolution::Found {
						base: base.to_path_buf(),
						path: candidate,
					};
				}
				attempts.push(Attempt {
					base: base.to_path_buf(),
					candidate,
				});
			}
		}
		Resolution::NotFound { attempts }
	}

	fn directories(&self, base: &Path) -> Vec<PathBuf> {
		match self.strategy {
			SearchStrategy::Flat => vec![base.to_path_buf()],
			SearchStrategy::Descend => breadth_first(base),
		}
	}
}

/// The reference as joined onto each base: a leading root or drive prefix is
/// dropped so `/img/a.png` is looked up as `<base>/img/a.png`.
fn below_base(reference: &str) -> PathBuf {
	let path = Path::new(reference);
	if !path.has_root() {
		return path.to_path_buf();
	}
	path.components()
		.filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
		.collect()
}

/// `base` followed by all directories below it, level by level, siblings by name.
/// A missing or unreadable `base` yields just itself.
fn breadth_first(base: &Path) -> Vec<PathBuf> {
	if !base.is_dir() {
		return vec![base.to_path_buf()];
	}
	let mut dirs: Vec<(usize, PathBuf)> = WalkDir::new(base)
		.sort_by_file_name()
		.into_iter()
		.filter_map(Result::ok)
		.filter(|entry| entry.file_type().is_dir())
		.map(|entry| (entry.depth(), entry.into_path()))
		.collect();
	dirs.sort_by_key(|(depth, _)| *depth);
	dirs.into_iter().map(|(_, dir)| dir).collect()
}
