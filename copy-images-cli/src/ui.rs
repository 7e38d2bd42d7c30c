use console::style;
use copy_images_sdk::{
	document::SourceLocation,
	reporter::{format_line, Reporter, Severity, TracingReporter},
};

/// Prints diagnostics to stderr the way document toolchains do
/// (`WARN: index.adoc: line 4: ...`) and forwards them to `tracing`.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
	tracing: TracingReporter,
}

impl Reporter for ConsoleReporter {
	fn report(&self, severity: Severity, location: &SourceLocation, message: &str) {
		let line = format_line(severity, location, message);
		match severity {
			Severity::Info => eprintln!("{}", style(line).blue()),
			Severity::Warn => eprintln!("{}", style(line).yellow()),
		}
		self.tracing.report(severity, location, message);
	}
}
