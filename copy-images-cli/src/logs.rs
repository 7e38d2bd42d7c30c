use chrono::Local;
use copy_images_sdk::{reporter::REPORT_TARGET, PROJECT_NAME};
use std::path::Path;
use tracing::{Level, Metadata};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
	filter::{filter_fn, LevelFilter},
	fmt::{self},
	layer::SubscriberExt,
	util::SubscriberInitExt,
	Layer,
};

/// Installs the global subscriber.
///
/// `verbose` mirrors library events to stderr at `DEBUG`, minus the reporter's
/// own events which the console already prints; `logs_dir` adds a
/// per-run file at `TRACE`. The returned guard must outlive the run so the
/// file writer gets flushed.
pub fn init(verbose: bool, logs_dir: Option<&Path>) -> Option<WorkerGuard> {
	let stderr_layer = verbose.then(|| {
		fmt::layer()
			.with_writer(std::io::stderr)
			.pretty()
			.with_filter(filter_fn(|meta: &Metadata<'_>| mirrored_to_stderr(meta.level(), meta.target())))
	});

	let (file_layer, guard) = match logs_dir {
		Some(logs_dir) => {
			let timestamp = Local::now().format("%Y-%m-%d-%H-%M-%S%.3f");
			let file_appender = tracing_appender::rolling::never(logs_dir, format!("{PROJECT_NAME}-{timestamp}.log"));
			let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
			let layer = fmt::layer()
				.with_writer(non_blocking_writer)
				.with_ansi(false)
				.with_filter(LevelFilter::TRACE);
			(Some(layer), Some(guard))
		}
		None => (None, None),
	};

	tracing_subscriber::registry().with(stderr_layer).with(file_layer).init();

	if let Some(logs_dir) = logs_dir {
		tracing::debug!("Logging initialized. Log file in: {}", logs_dir.display());
	}
	guard
}

fn mirrored_to_stderr(level: &Level, target: &str) -> bool {
	*level <= Level::DEBUG && target != REPORT_TARGET
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reporter_events_stay_off_stderr() {
		assert!(!mirrored_to_stderr(&Level::INFO, REPORT_TARGET));
		assert!(!mirrored_to_stderr(&Level::WARN, REPORT_TARGET));
	}

	#[test]
	fn library_events_up_to_debug() {
		assert!(mirrored_to_stderr(&Level::DEBUG, "copy_images_sdk::resolver"));
		assert!(mirrored_to_stderr(&Level::WARN, "copy_images_sdk::copier"));
		assert!(!mirrored_to_stderr(&Level::TRACE, "copy_images_sdk::resolver"));
	}
}
