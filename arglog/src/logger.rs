//! Argument logger

// Imports
use {
	crate::{
		record::InvocationRecord,
		timestamp::{Clock, LocalClock, Timestamp},
	},
	arglog_util::WriteLine,
	std::{
		fmt,
		fs,
		io,
		path::{Path, PathBuf},
	},
};

/// Argument logger.
///
/// Appends a timestamped record of an invocation's arguments to a log file.
/// The file is created if missing, but its parent directory never is.
#[derive(Debug)]
pub struct ArgumentLogger<C = LocalClock> {
	/// Log file path
	path: PathBuf,

	/// Clock used for timestamps
	clock: C,
}

impl ArgumentLogger {
	/// Creates a new logger appending to `path`
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self::with_clock(path, LocalClock)
	}
}

impl<C: Clock> ArgumentLogger<C> {
	/// Creates a new logger appending to `path`, timestamped by `clock`
	pub fn with_clock(path: impl Into<PathBuf>, clock: C) -> Self {
		Self {
			path: path.into(),
			clock,
		}
	}

	/// Returns the log file path
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Logs an invocation with arguments `args`
	pub fn run<I, S>(&mut self, args: I) -> Result<(), ExecutionError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let record = InvocationRecord::new(args);
		self.log(&record)
	}

	/// Logs an invocation record
	pub fn log(&mut self, record: &InvocationRecord) -> Result<(), ExecutionError> {
		let mut file = fs::OpenOptions::new()
			.create(true)
			.append(true)
			.open(&self.path)
			.map_err(|source| ExecutionError::Open {
				path: self.path.clone(),
				source,
			})?;
		tracing::debug!(path = ?self.path, args = record.argument_count(), "Opened log file");

		self::write_record(&mut file, record, &mut self.clock).map_err(|source| ExecutionError::Write {
			path: self.path.clone(),
			source,
		})
	}

	/// Logs an invocation with arguments `args`, reporting any error to `stdout`.
	///
	/// Errors are reported as a single `Error= <kind>` line, with the full
	/// cause going to the diagnostic log.
	pub fn run_reporting<I, S>(&mut self, args: I, stdout: &mut impl io::Write)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let record = InvocationRecord::new(args);
		self.log_reporting(&record, stdout);
	}

	/// Logs an invocation record, reporting any error to `stdout`.
	///
	/// See [`Self::run_reporting`] for details.
	pub fn log_reporting(&mut self, record: &InvocationRecord, stdout: &mut impl io::Write) {
		let Err(err) = self.log(record) else {
			return;
		};
		tracing::error!(path = ?self.path, "{}", DisplayChain(&err));

		// Note: If we can't even write to stdout, there's nowhere left to report to
		if let Err(report_err) = stdout.write_line(format_args!("Error= {:?}", err.kind())) {
			tracing::warn!("Unable to report error to stdout: {report_err}");
		}
	}
}

/// Writes all lines of `record` to `sink`.
///
/// Writes `3 + record.argument_count()` lines, each with a single write.
pub fn write_record<W: io::Write>(
	sink: &mut W,
	record: &InvocationRecord,
	clock: &mut impl Clock,
) -> Result<(), io::Error> {
	let mut writer = TimestampedWriter {
		sink,
		clock,
		last_timestamp: None,
	};

	writer.write(format_args!("Name of the script: {}", record.script_name()))?;
	writer.write(format_args!("Number of arguments: {}", record.argument_count()))?;
	for (arg_idx, arg) in record.arguments().iter().enumerate() {
		writer.write(format_args!("Arg[{arg_idx}]={arg}"))?;
	}
	writer.write(format_args!("The list of arguments: {:?}", record.arguments()))?;

	Ok(())
}

/// Writer prefixing each line with a timestamp
struct TimestampedWriter<'a, W, C> {
	/// Sink
	sink: &'a mut W,

	/// Clock
	clock: &'a mut C,

	/// Last timestamp written
	last_timestamp: Option<Timestamp>,
}

impl<W: io::Write, C: Clock> TimestampedWriter<'_, W, C> {
	/// Writes a timestamped line
	fn write(&mut self, message: fmt::Arguments) -> Result<(), io::Error> {
		// Note: The wall clock may go backwards, so we never write
		//       a timestamp earlier than the previous one.
		let timestamp = Timestamp::new(self.clock.now());
		let timestamp = self.last_timestamp.map_or(timestamp, |last| last.max(timestamp));
		self.last_timestamp = Some(timestamp);

		// Note: Exactly one space follows the timestamp. Logs written by the Python
		//       samples (`print("[..] ", message)`) have two, so they differ byte-wise.
		self.sink.write_line(format_args!("{timestamp} {message}"))
	}
}

/// Execution error
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
	/// Unable to open the log file
	#[error("Unable to open log file {path:?}")]
	Open {
		path:   PathBuf,
		#[source]
		source: io::Error,
	},

	/// Unable to write to the log file
	#[error("Unable to write to log file {path:?}")]
	Write {
		path:   PathBuf,
		#[source]
		source: io::Error,
	},
}

impl ExecutionError {
	/// Returns the kind of the underlying io error
	pub fn kind(&self) -> io::ErrorKind {
		match self {
			Self::Open { source, .. } | Self::Write { source, .. } => source.kind(),
		}
	}
}

/// Displays an error along with all of its sources
struct DisplayChain<'a>(&'a dyn std::error::Error);

impl fmt::Display for DisplayChain<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)?;
		let mut source = self.0.source();
		while let Some(err) = source {
			write!(f, ": {err}")?;
			source = err.source();
		}

		Ok(())
	}
}
