use std::{
	fs, io,
	path::{Path, PathBuf},
};

use copy_images_stdx::path::Confine;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The side effect run for every resolved image.
///
/// Any `FnMut(&str, &Path) -> io::Result<()>` closure is a copier, which is
/// how hosts plug in their own output handling.
pub trait CopyImage {
	/// Copies the image `reference` resolved to `source`.
	fn copy_image(&mut self, reference: &str, source: &Path) -> Result<(), Error>;
}

impl<F> CopyImage for F
where
	F: FnMut(&str, &Path) -> io::Result<()>,
{
	fn copy_image(&mut self, reference: &str, source: &Path) -> Result<(), Error> {
		self(reference, source).map_err(|e| Error::Copy {
			source: e,
			path: source.to_path_buf(),
			target: None,
		})
	}
}

/// What to do when the copy target already exists.
#[derive(Eq, PartialEq, Default, Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictOption {
	#[default]
	Overwrite,
	Skip,
}

/// Copies images below a destination directory, keeping the reference's relative layout:
/// `image::shots/a.png[]` lands in `<destination>/shots/a.png`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsCopier {
	pub destination: PathBuf,
	pub conflict: ConflictOption,
}

impl FsCopier {
	pub fn new<P: Into<PathBuf>>(destination: P) -> Self {
		Self {
			destination: destination.into(),
			conflict: ConflictOption::default(),
		}
	}

	pub fn with_conflict(mut self, conflict: ConflictOption) -> Self {
		self.conflict = conflict;
		self
	}

	pub fn target_for(&self, reference: &str) -> PathBuf {
		self.destination.join(reference.confine())
	}
}

impl CopyImage for FsCopier {
	#[tracing::instrument(skip(self), level = "debug", err)]
	fn copy_image(&mut self, reference: &str, source: &Path) -> Result<(), Error> {
		let target = self.target_for(reference);
		let error = |e: io::Error| Error::Copy {
			source: e,
			path: source.to_path_buf(),
			target: Some(target.clone()),
		};

		if target.exists() {
			if self.conflict == ConflictOption::Skip {
				tracing::debug!(target = %target.display(), "target exists, skipping");
				return Ok(());
			}
			// Copying a file onto itself would truncate it.
			if fs::canonicalize(&target).map_err(error)? == fs::canonicalize(source).map_err(error)? {
				tracing::debug!(target = %target.display(), "source and target are the same file");
				return Ok(());
			}
		}

		ensure_parent_dir_exists(&target).map_err(error)?;
		fs::copy(source, &target).map_err(error)?;
		Ok(())
	}
}

pub fn ensure_parent_dir_exists(path: &Path) -> io::Result<()> {
	if let Some(parent) = path.parent() {
		if !parent.exists() {
			fs::create_dir_all(parent)?;
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use tempfile::tempdir;

	#[test]
	fn copies_keeping_layout() {
		let dir = tempdir().unwrap();
		let source = dir.path().join("src/a.png");
		ensure_parent_dir_exists(&source).unwrap();
		fs::write(&source, b"first").unwrap();

		let mut copier = FsCopier::new(dir.path().join("out"));
		copier.copy_image("shots/a.png", &source).unwrap();
		assert_eq!(fs::read(dir.path().join("out/shots/a.png")).unwrap(), b"first");
	}

	#[test]
	fn target_is_confined() {
		let copier = FsCopier::new("/out");
		assert_eq!(copier.target_for("../../a.png"), PathBuf::from("/out/a.png"));
		assert_eq!(copier.target_for("/abs/a.png"), PathBuf::from("/out/abs/a.png"));
	}

	#[test]
	fn overwrite_existing() {
		let dir = tempdir().unwrap();
		let source = dir.path().join("a.png");
		fs::write(&source, b"new").unwrap();
		let target = dir.path().join("out/a.png");
		ensure_parent_dir_exists(&target).unwrap();
		fs::write(&target, b"old").unwrap();

		let mut copier = FsCopier::new(dir.path().join("out"));
		copier.copy_image("a.png", &source).unwrap();
		assert_eq!(fs::read(&target).unwrap(), b"new");
	}

	#[test]
	fn skip_existing() {
		let dir = tempdir().unwrap();
		let source = dir.path().join("a.png");
		fs::write(&source, b"new").unwrap();
		let target = dir.path().join("out/a.png");
		ensure_parent_dir_exists(&target).unwrap();
		fs::write(&target, b"old").unwrap();

		let mut copier = FsCopier::new(dir.path().join("out")).with_conflict(ConflictOption::Skip);
		copier.copy_image("a.png", &source).unwrap();
		assert_eq!(fs::read(&target).unwrap(), b"old");
	}

	#[test]
	fn copy_onto_itself_is_a_noop() {
		let dir = tempdir().unwrap();
		let source = dir.path().join("a.png");
		fs::write(&source, b"keep me").unwrap();

		let mut copier = FsCopier::new(dir.path());
		copier.copy_image("a.png", &source).unwrap();
		assert_eq!(fs::read(&source).unwrap(), b"keep me");
	}

	#[test]
	fn missing_source_is_an_error() {
		let dir = tempdir().unwrap();
		let mut copier = FsCopier::new(dir.path().join("out"));
		let err = copier.copy_image("a.png", &dir.path().join("gone.png")).unwrap_err();
		assert!(matches!(err, Error::Copy { target: Some(_), .. }));
	}

	#[test]
	fn closures_are_copiers() {
		let mut seen = Vec::new();
		let mut copier = |reference: &str, source: &Path| -> io::Result<()> {
			seen.push((reference.to_string(), source.to_path_buf()));
			Ok(())
		};
		copier.copy_image("a.png", Path::new("/docs/a.png")).unwrap();
		assert_eq!(seen, vec![("a.png".to_string(), PathBuf::from("/docs/a.png"))]);
	}
}
