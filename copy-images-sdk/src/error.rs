use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for a copy pass.
///
/// Missing images are not errors: they are reported as warnings and the pass
/// goes on. Only a failed copy or an unusable settings file ends up here.
#[derive(Error, Debug)]
pub enum Error {
	#[error("Could not copy image {path:?} (target: {target:?})")]
	Copy {
		#[source]
		source: std::io::Error,
		path: PathBuf,
		target: Option<PathBuf>,
	},

	#[error("Could not read settings from {path:?}")]
	Settings {
		#[source]
		source: std::io::Error,
		path: PathBuf,
	},

	#[error("Error in configuration: {0}")]
	Config(#[from] toml::de::Error),
}
