use std::{
	fs,
	path::{Path, PathBuf},
};

use copy_images_sdk::{
	coordinator::{CopyCoordinator, Summary},
	document::Document,
	error::Error,
	settings::Settings,
	testing::{CopyLog, ReportLog},
};
use tempfile::TempDir;

/// A document directory holding `resources/copy_images/example{1,2}.png`.
pub struct Fixture {
	pub dir: TempDir,
}

pub struct Pass {
	pub copied: Vec<(String, PathBuf)>,
	pub lines: Vec<String>,
	pub summary: Summary,
}

impl Fixture {
	pub fn new() -> Self {
		let dir = tempfile::tempdir().unwrap();
		let images = dir.path().join("resources").join("copy_images");
		fs::create_dir_all(&images).unwrap();
		fs::write(images.join("example1.png"), b"example1").unwrap();
		fs::write(images.join("example2.png"), b"example2").unwrap();
		Self { dir }
	}

	pub fn doc_dir(&self) -> &Path {
		self.dir.path()
	}

	/// Runs one pass over `references`, given as `(line, reference)` in document order.
	pub fn run(&self, settings: &Settings, references: &[(usize, &str)]) -> Result<Pass, Error> {
		let document = Document::stdin(self.doc_dir());
		let search_path = settings.search_path(self.doc_dir());
		let mut copies = CopyLog::default();
		let reports = ReportLog::default();

		let mut coordinator =
			CopyCoordinator::new(&document, &search_path, &mut copies, &reports).with_strategy(settings.strategy());
		for (line, reference) in references {
			coordinator.resolve_and_copy(reference, *line)?;
		}
		let summary = coordinator.summary();
		drop(coordinator);

		Ok(Pass {
			copied: copies.copied,
			lines: reports.lines(),
			summary,
		})
	}
}

pub fn quoted(path: &Path) -> String {
	format!("{:?}", path.display().to_string())
}
