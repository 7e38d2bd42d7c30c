use std::fmt;

use crate::document::SourceLocation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
	Info,
	Warn,
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Severity::Info => f.write_str("INFO"),
			Severity::Warn => f.write_str("WARN"),
		}
	}
}

/// Renders a diagnostic the way hosts print it: `INFO: <stdin>: line 2: copying example1.png`.
pub fn format_line(severity: Severity, location: &SourceLocation, message: &str) -> String {
	format!("{severity}: {location}: {message}")
}

/// Receives the user-facing diagnostics of a copy pass.
///
/// The message bodies are part of the observable contract: hosts and tests
/// match on them literally.
pub trait Reporter {
	fn report(&self, severity: Severity, location: &SourceLocation, message: &str);

	fn info(&self, location: &SourceLocation, message: &str) {
		self.report(Severity::Info, location, message);
	}

	fn warning(&self, location: &SourceLocation, message: &str) {
		self.report(Severity::Warn, location, message);
	}
}

/// The `tracing` target of events emitted by [`TracingReporter`], so subscribers
/// that already print diagnostics themselves can leave them out.
pub const REPORT_TARGET: &str = "copy_images::report";

/// Forwards diagnostics to `tracing`, tagged with the document and line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
	fn report(&self, severity: Severity, location: &SourceLocation, message: &str) {
		match severity {
			Severity::Info => tracing::info!(
				target: REPORT_TARGET,
				file = %location.document,
				line = location.line,
				"{message}"
			),
			Severity::Warn => tracing::warn!(
				target: REPORT_TARGET,
				file = %location.document,
				line = location.line,
				"{message}"
			),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn info_line() {
		let location = SourceLocation {
			document: "<stdin>".into(),
			line: 2,
		};
		assert_eq!(
			format_line(Severity::Info, &location, "copying example1.png"),
			"INFO: <stdin>: line 2: copying example1.png"
		);
	}

	#[test]
	fn warn_line() {
		let location = SourceLocation {
			document: "index.adoc".into(),
			line: 7,
		};
		assert_eq!(
			format_line(Severity::Warn, &location, "can't read image at any of []"),
			"WARN: index.adoc: line 7: can't read image at any of []"
		);
	}
}
