use std::path::{Path, PathBuf};

use copy_images_stdx::path::Expand;
use serde::{Deserialize, Serialize};

/// Searched after everything else, relative to the document directory.
pub const FALLBACK_DIR: &str = "resources/copy_images";

/// Extra directories to search, in the order they were configured.
///
/// The `resources` setting is either a single path or a comma separated list.
/// It is split once, when it is loaded, so resolution never has to look at the
/// raw string again. Entries are trimmed and empty entries are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "ResourcesValue")]
pub struct Resources(Vec<PathBuf>);

#[derive(Deserialize)]
#[serde(untagged)]
enum ResourcesValue {
	One(String),
	Many(Vec<String>),
}

impl From<ResourcesValue> for Resources {
	fn from(value: ResourcesValue) -> Self {
		match value {
			ResourcesValue::One(value) => Self::parse(&value),
			ResourcesValue::Many(values) => values.iter().map(String::as_str).collect(),
		}
	}
}

impl<'a> FromIterator<&'a str> for Resources {
	fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(str::trim)
				.filter(|entry| !entry.is_empty())
				.map(PathBuf::from)
				.collect(),
		)
	}
}

impl Resources {
	pub fn parse(value: &str) -> Self {
		value.split(',').collect()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Path> {
		self.0.iter().map(PathBuf::as_path)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

/// How each base directory of a [`SearchPath`] is searched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchStrategy {
	/// Only the base directory itself.
	#[default]
	Flat,
	/// The base directory, then every directory below it, breadth first.
	Descend,
}

/// The ordered base directories an image reference is resolved against.
/// Built once per document; the first entry wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
	bases: Vec<PathBuf>,
}

impl SearchPath {
	/// `document_dir`, then each resource directory, then `fallback` below `document_dir`.
	///
	/// `~` in resource entries is expanded, and relative entries are taken
	/// relative to the document directory.
	pub fn new(document_dir: &Path, resources: &Resources, fallback: &Path) -> Self {
		let mut bases = Vec::with_capacity(resources.len() + 2);
		bases.push(document_dir.to_path_buf());
		for entry in resources.iter() {
			let entry = entry.expand_user();
			if entry.is_absolute() {
				bases.push(entry);
			} else {
				bases.push(document_dir.join(entry));
			}
		}
		bases.push(document_dir.join(fallback));
		Self { bases }
	}

	pub fn for_document(document_dir: &Path, resources: &Resources) -> Self {
		Self::new(document_dir, resources, Path::new(FALLBACK_DIR))
	}

	/// A search path made of exactly `bases`, in order.
	pub fn from_bases<I, P>(bases: I) -> Self
	where
		I: IntoIterator<Item = P>,
		P: Into<PathBuf>,
	{
		Self {
			bases: bases.into_iter().map(Into::into).collect(),
		}
	}

	pub fn bases(&self) -> &[PathBuf] {
		&self.bases
	}

	pub fn iter(&self) -> impl Iterator<Item = &Path> {
		self.bases.iter().map(PathBuf::as_path)
	}
}
