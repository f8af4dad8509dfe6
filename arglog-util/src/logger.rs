//! Logger
//!
//! Diagnostic logging for all binaries in the workspace.
//! Diagnostics always go to `stderr` (and optionally a file), never to `stdout`.

// Imports
use {
	std::{
		fs,
		io::{self, IsTerminal},
		path::Path,
		sync::{Mutex, PoisonError},
	},
	tracing::{metadata::LevelFilter, Level},
	tracing_subscriber::{prelude::*, EnvFilter},
};

/// Initializes the logger.
///
/// Logs to `stderr`, filtered by `RUST_LOG` (`info` by default).
/// If `log_file` is given, additionally logs to it, filtered by `RUST_LOG_FILE`
/// (`debug` by default). The file is truncated unless `log_file_append` is set.
///
/// Any messages sent through [`pre_init`] are emitted once the logger is initialized.
pub fn init(log_file: Option<&Path>, log_file_append: bool) {
	// Create the stderr layer
	// Note: Colors only make sense if a terminal is reading them
	let stderr_layer = tracing_subscriber::fmt::layer()
		.with_ansi(io::stderr().is_terminal())
		.with_writer(io::stderr)
		.with_filter(self::env_filter("RUST_LOG", LevelFilter::INFO));

	// Then the file layer, if we have a file
	let file_layer = log_file.and_then(|log_file| {
		let file = fs::OpenOptions::new()
			.create(true)
			.write(true)
			.append(log_file_append)
			.truncate(!log_file_append)
			.open(log_file);

		match file {
			Ok(file) => Some(
				tracing_subscriber::fmt::layer()
					.with_ansi(false)
					.with_writer(Mutex::new(file))
					.with_filter(self::env_filter("RUST_LOG_FILE", LevelFilter::DEBUG)),
			),
			Err(err) => {
				pre_init::warn(format!("Unable to open log file {log_file:?}: {err}"));
				None
			},
		}
	});

	// Finally initialize
	if let Err(err) = tracing_subscriber::registry()
		.with(stderr_layer)
		.with(file_layer)
		.try_init()
	{
		pre_init::warn(format!("Unable to initialize logger: {err}"));
	}

	pre_init::flush();
}

/// Creates an env filter from `var`, using `default` if it's unset
fn env_filter(var: &str, default: LevelFilter) -> EnvFilter {
	EnvFilter::builder()
		.with_default_directive(default.into())
		.with_env_var(var)
		.from_env_lossy()
}

/// Logging before the logger is initialized.
///
/// Messages are buffered and emitted in order once [`init`] runs.
pub mod pre_init {
	// Imports
	use super::*;

	/// Buffered messages
	static MESSAGES: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

	/// Buffers a message with level `level`
	fn push(level: Level, message: String) {
		MESSAGES
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.push((level, message));
	}

	/// Buffers a debug message
	pub fn debug(message: impl Into<String>) {
		self::push(Level::DEBUG, message.into());
	}

	/// Buffers an info message
	pub fn info(message: impl Into<String>) {
		self::push(Level::INFO, message.into());
	}

	/// Buffers a warning message
	pub fn warn(message: impl Into<String>) {
		self::push(Level::WARN, message.into());
	}

	/// Emits and clears all buffered messages
	pub(super) fn flush() {
		let messages = std::mem::take(&mut *MESSAGES.lock().unwrap_or_else(PoisonError::into_inner));
		for (level, message) in messages {
			match level {
				Level::ERROR => tracing::error!("{message}"),
				Level::WARN => tracing::warn!("{message}"),
				Level::INFO => tracing::info!("{message}"),
				Level::DEBUG => tracing::debug!("{message}"),
				_ => tracing::trace!("{message}"),
			}
		}
	}

	/// Returns the number of buffered messages
	#[cfg(test)]
	pub(super) fn len() -> usize {
		MESSAGES.lock().unwrap_or_else(PoisonError::into_inner).len()
	}
}
