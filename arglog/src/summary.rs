//! Argument summaries
//!
//! Appends a block per invocation to a file next to the executable:
//!
//! ```text
//!
//! 14:03:27.11: CommandLine=[run-args alpha beta]
//!     There are 2 arguments
//!     Arg[0]=[alpha]
//!     Arg[1]=[beta]
//! ```
//!
//! Unlike the argument log, the program name isn't counted as an argument.

// Imports
use {
	crate::{
		logger::ExecutionError,
		record::InvocationRecord,
		timestamp::{Clock, Timestamp},
	},
	std::{
		fmt::Write as _,
		fs,
		io::Write as _,
		path::{Path, PathBuf},
	},
};

/// Summary file name
pub const FILE_NAME: &str = "TestRunArguments.txt";

/// Returns the summary path for `executable`, in the same directory
pub fn output_path(executable: &Path) -> PathBuf {
	executable.parent().unwrap_or(Path::new("")).join(FILE_NAME)
}

/// Formats the summary block of `record`
pub fn format_summary(record: &InvocationRecord, timestamp: Timestamp) -> String {
	let args = record.arguments().get(1..).unwrap_or_default();

	// Note: Writing to a `String` can't fail
	let mut summary = String::from("\n");
	let _ = writeln!(
		summary,
		"{}: CommandLine=[{}]",
		timestamp.centis(),
		record.arguments().join(" ")
	);
	let _ = writeln!(summary, "    There are {} arguments", args.len());
	for (arg_idx, arg) in args.iter().enumerate() {
		let _ = writeln!(summary, "    Arg[{arg_idx}]=[{arg}]");
	}

	summary
}

/// Appends the summary block of `record` to `path`.
///
/// The block is written with a single write, so concurrent invocations
/// never interleave within a block.
pub fn append_summary(path: &Path, record: &InvocationRecord, clock: &mut impl Clock) -> Result<(), ExecutionError> {
	let summary = self::format_summary(record, Timestamp::new(clock.now()));

	let mut file = fs::OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.map_err(|source| ExecutionError::Open {
			path: path.to_path_buf(),
			source,
		})?;
	file.write_all(summary.as_bytes())
		.map_err(|source| ExecutionError::Write {
			path: path.to_path_buf(),
			source,
		})
}
