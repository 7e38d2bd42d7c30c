use std::{
	fmt,
	path::{Path, PathBuf},
};

/// The document whose image references are being processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
	/// How the document is named in diagnostics, e.g. a file path or `<stdin>`.
	pub name: String,
	/// The directory the document was loaded from. Always the first entry of the search path.
	pub dir: PathBuf,
}

impl Document {
	pub fn new<N: Into<String>, P: Into<PathBuf>>(name: N, dir: P) -> Self {
		Self {
			name: name.into(),
			dir: dir.into(),
		}
	}

	/// A document read from standard input, resolved relative to `dir`.
	pub fn stdin<P: Into<PathBuf>>(dir: P) -> Self {
		Self::new("<stdin>", dir)
	}

	pub fn dir(&self) -> &Path {
		&self.dir
	}

	pub fn location(&self, line: usize) -> SourceLocation {
		SourceLocation {
			document: self.name.clone(),
			line,
		}
	}
}

/// Where in the document an image reference was found. Lines are 1-based and
/// come from the host; nothing here counts lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
	pub document: String,
	pub line: usize,
}

impl fmt::Display for SourceLocation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: line {}", self.document, self.line)
	}
}
