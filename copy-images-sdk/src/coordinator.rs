use std::{collections::HashSet, path::PathBuf};

use crate::{
	copier::CopyImage,
	document::Document,
	error::Error,
	reporter::Reporter,
	resolver::{PathResolver, Resolution},
	search_path::{SearchPath, SearchStrategy},
};

/// References already handled during the current pass. Only membership matters.
#[derive(Debug, Default, Clone)]
pub struct SeenSet(HashSet<String>);

impl SeenSet {
	/// Marks `reference` as seen. Returns `true` only the first time.
	pub fn mark(&mut self, reference: &str) -> bool {
		// `contains` first so repeats don't allocate.
		if self.0.contains(reference) {
			return false;
		}
		self.0.insert(reference.to_string())
	}

	pub fn contains(&self, reference: &str) -> bool {
		self.0.contains(reference)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

/// What a single call to [`CopyCoordinator::resolve_and_copy`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
	/// The reference was handled earlier in this pass. Nothing happened.
	AlreadySeen,
	External,
	Copied { source: PathBuf },
	NotFound { attempts: Vec<PathBuf> },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
	pub copied: usize,
	pub missing: usize,
	pub external: usize,
}

/// Drives one document pass: resolves each distinct reference once, copies what
/// it finds and reports what it can't.
///
/// Create one per document and drop it when the pass is over; the dedup state
/// lives and dies with it.
pub struct CopyCoordinator<'a> {
	document: &'a Document,
	resolver: PathResolver<'a>,
	copier: &'a mut dyn CopyImage,
	reporter: &'a dyn Reporter,
	seen: SeenSet,
	summary: Summary,
}

impl<'a> CopyCoordinator<'a> {
	pub fn new(
		document: &'a Document,
		search_path: &'a SearchPath,
		copier: &'a mut dyn CopyImage,
		reporter: &'a dyn Reporter,
	) -> Self {
		Self {
			document,
			resolver: PathResolver::new(search_path, SearchStrategy::default()),
			copier,
			reporter,
			seen: SeenSet::default(),
			summary: Summary::default(),
		}
	}

	pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
		self.resolver.strategy = strategy;
		self
	}

	/// Handles one occurrence of `reference`, found on `line` of the document.
	///
	/// Only a failing copy is an error. It aborts the pass, since the
	/// `copying` line has already been reported.
	#[tracing::instrument(skip(self), fields(document = %self.document.name), level = "debug", err)]
	pub fn resolve_and_copy(&mut self, reference: &str, line: usize) -> Result<Outcome, Error> {
		if !self.seen.mark(reference) {
			tracing::trace!("already handled");
			return Ok(Outcome::AlreadySeen);
		}

		let location = self.document.location(line);
		match self.resolver.resolve(reference) {
			Resolution::External => {
				self.summary.external += 1;
				Ok(Outcome::External)
			}
			Resolution::Found { path, .. } => {
				self.reporter.info(&location, &format!("copying {reference}"));
				self.copier.copy_image(reference, &path)?;
				self.summary.copied += 1;
				Ok(Outcome::Copied { source: path })
			}
			Resolution::NotFound { attempts } => {
				let attempts: Vec<PathBuf> = attempts.into_iter().map(|a| a.candidate).collect();
				self.reporter.warning(&location, &not_found_message(&attempts));
				self.summary.missing += 1;
				Ok(Outcome::NotFound { attempts })
			}
		}
	}

	pub fn seen(&self) -> &SeenSet {
		&self.seen
	}

	pub fn summary(&self) -> Summary {
		self.summary
	}
}

fn not_found_message(attempts: &[PathBuf]) -> String {
	let listed = attempts
		.iter()
		.map(|path| format!("{:?}", path.display().to_string()))
		.collect::<Vec<_>>()
		.join(", ");
	format!("can't read image at any of [{listed}]")
}
