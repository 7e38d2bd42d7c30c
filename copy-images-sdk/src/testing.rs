//! Stand-ins for the host side of a pass: a copier that only records what it
//! was asked to do and a reporter that keeps every rendered line.

use std::{
	cell::RefCell,
	io,
	path::{Path, PathBuf},
};

use crate::{
	copier::CopyImage,
	document::SourceLocation,
	error::Error,
	reporter::{format_line, Reporter, Severity},
};

#[derive(Debug, Default)]
pub struct CopyLog {
	pub copied: Vec<(String, PathBuf)>,
	fail_with: Option<io::ErrorKind>,
}

impl CopyLog {
	/// A copier whose every copy fails with `kind`.
	pub fn failing(kind: io::ErrorKind) -> Self {
		Self {
			copied: Vec::new(),
			fail_with: Some(kind),
		}
	}
}

impl CopyImage for CopyLog {
	fn copy_image(&mut self, reference: &str, source: &Path) -> Result<(), Error> {
		if let Some(kind) = self.fail_with {
			return Err(Error::Copy {
				source: io::Error::from(kind),
				path: source.to_path_buf(),
				target: None,
			});
		}
		self.copied.push((reference.to_string(), source.to_path_buf()));
		Ok(())
	}
}

#[derive(Debug, Default)]
pub struct ReportLog {
	lines: RefCell<Vec<String>>,
}

impl ReportLog {
	pub fn lines(&self) -> Vec<String> {
		self.lines.borrow().clone()
	}

	/// Lines starting with `severity`'s tag.
	pub fn with_severity(&self, severity: Severity) -> Vec<String> {
		let prefix = format!("{severity}: ");
		self.lines.borrow().iter().filter(|line| line.starts_with(&prefix)).cloned().collect()
	}
}

impl Reporter for ReportLog {
	fn report(&self, severity: Severity, location: &SourceLocation, message: &str) {
		self.lines.borrow_mut().push(format_line(severity, location, message));
	}
}
