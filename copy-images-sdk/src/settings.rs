use std::{
	fs,
	path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
	copier::ConflictOption,
	error::Error,
	search_path::{Resources, SearchPath, SearchStrategy, FALLBACK_DIR},
};

/// Per-document configuration, usually read from a TOML file.
///
/// ```toml
/// resources = "shared/images, ~/screenshots"
/// destination = "build/html"
/// conflict = "skip"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
	pub resources: Resources,
	pub fallback: PathBuf,
	pub destination: Option<PathBuf>,
	pub conflict: ConflictOption,
	/// Also search every directory below each search path entry.
	pub descend: bool,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			resources: Resources::default(),
			fallback: PathBuf::from(FALLBACK_DIR),
			destination: None,
			conflict: ConflictOption::default(),
			descend: false,
		}
	}
}

impl Settings {
	pub fn from_file(path: &Path) -> Result<Self, Error> {
		let content = fs::read_to_string(path).map_err(|source| Error::Settings {
			source,
			path: path.to_path_buf(),
		})?;
		Self::from_toml(&content)
	}

	pub fn from_toml(content: &str) -> Result<Self, Error> {
		Ok(toml::from_str(content)?)
	}

	pub fn strategy(&self) -> SearchStrategy {
		if self.descend {
			SearchStrategy::Descend
		} else {
			SearchStrategy::Flat
		}
	}

	pub fn search_path(&self, document_dir: &Path) -> SearchPath {
		SearchPath::new(document_dir, &self.resources, &self.fallback)
	}
}
