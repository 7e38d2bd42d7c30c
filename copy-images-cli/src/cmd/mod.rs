use std::{path::PathBuf, str::FromStr};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueHint};
use copy_images_sdk::{
	copier::{ConflictOption, FsCopier},
	coordinator::CopyCoordinator,
	document::Document,
	search_path::Resources,
	settings::Settings,
};

use crate::{logs, ui::ConsoleReporter};

/// An image reference together with the line it was found on, written `LINE:REFERENCE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
	pub line: usize,
	pub reference: String,
}

impl FromStr for Occurrence {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let Some((line, reference)) = s.split_once(':') else {
			return Err(format!("expected LINE:REFERENCE, got `{s}`"));
		};
		let line: usize = line.parse().map_err(|_| format!("`{line}` is not a line number"))?;
		if line == 0 {
			return Err("line numbers start at 1".into());
		}
		if reference.is_empty() {
			return Err(format!("missing reference in `{s}`"));
		}
		Ok(Self {
			line,
			reference: reference.to_string(),
		})
	}
}

#[derive(Parser, Debug)]
#[command(about, author, version)]
pub struct App {
	/// Image references in document order, each as LINE:REFERENCE
	#[arg(required = true)]
	occurrences: Vec<Occurrence>,
	#[arg(long, short = 'c', value_hint = ValueHint::FilePath)]
	config: Option<PathBuf>,
	/// The directory the document was loaded from
	#[arg(long, short = 'd', default_value = ".", value_hint = ValueHint::DirPath)]
	docdir: PathBuf,
	/// How the document is named in diagnostics
	#[arg(long, default_value = "<stdin>")]
	document: String,
	#[arg(long, help = "A single directory or a comma-separated list of directories to search")]
	resources: Option<String>,
	#[arg(long, value_hint = ValueHint::DirPath)]
	fallback: Option<PathBuf>,
	#[arg(long, short = 'o', value_hint = ValueHint::DirPath)]
	destination: Option<PathBuf>,
	#[arg(long, help = "Keep files that already exist in the destination")]
	skip_existing: bool,
	#[arg(long, help = "Also search every directory below each search path entry")]
	descend: bool,
	#[arg(long, short = 'v')]
	verbose: bool,
	#[arg(long, value_hint = ValueHint::DirPath)]
	logs_dir: Option<PathBuf>,
}

pub trait Cmd {
	fn run(self) -> anyhow::Result<()>;
}

impl App {
	/// File settings first, then whatever was passed on the command line.
	fn settings(&self) -> Result<Settings> {
		let mut settings = match &self.config {
			Some(path) => Settings::from_file(path).with_context(|| format!("loading {}", path.display()))?,
			None => Settings::default(),
		};
		if let Some(resources) = &self.resources {
			settings.resources = Resources::parse(resources);
		}
		if let Some(fallback) = &self.fallback {
			settings.fallback = fallback.clone();
		}
		if let Some(destination) = &self.destination {
			settings.destination = Some(destination.clone());
		}
		if self.skip_existing {
			settings.conflict = ConflictOption::Skip;
		}
		settings.descend |= self.descend;
		Ok(settings)
	}
}

impl Cmd for App {
	fn run(self) -> anyhow::Result<()> {
		let _guard = logs::init(self.verbose, self.logs_dir.as_deref());

		let settings = self.settings()?;
		let Some(destination) = settings.destination.clone() else {
			bail!("no destination directory configured, pass --destination or set it in the config file");
		};

		let document = Document::new(self.document, self.docdir);
		let search_path = settings.search_path(document.dir());
		tracing::debug!(?search_path, "search path built");

		let mut copier = FsCopier::new(destination).with_conflict(settings.conflict);
		let reporter = ConsoleReporter::default();
		let mut coordinator =
			CopyCoordinator::new(&document, &search_path, &mut copier, &reporter).with_strategy(settings.strategy());

		for occurrence in &self.occurrences {
			coordinator
				.resolve_and_copy(&occurrence.reference, occurrence.line)
				.with_context(|| format!("{}: line {}", document.name, occurrence.line))?;
		}

		let summary = coordinator.summary();
		tracing::info!(
			copied = summary.copied,
			missing = summary.missing,
			external = summary.external,
			"pass finished"
		);
		Ok(())
	}
}
