//! Appends a summary of its arguments to `TestRunArguments.txt`,
//! next to its own executable.

// Imports
use {
	arglog::{summary, InvocationRecord, LocalClock},
	arglog_util::{logger, WriteLine},
	std::{env, fmt, io},
};

fn main() {
	logger::init(None, false);

	let record = InvocationRecord::from_os_args(env::args_os());
	let mut stdout = io::stdout().lock();

	let output_path = match env::current_exe() {
		Ok(executable) => summary::output_path(&executable),
		Err(err) => {
			tracing::error!("Unable to get current executable: {err}");
			self::print(&mut stdout, format_args!("Oops. Outpath= Err={err}"));
			return;
		},
	};
	self::print(&mut stdout, format_args!("OutputPath={}", output_path.display()));

	if let Err(err) = summary::append_summary(&output_path, &record, &mut LocalClock) {
		tracing::error!(?output_path, "Unable to append summary: {err}");
		self::print(
			&mut stdout,
			format_args!("Oops. Outpath={} Err={:?}", output_path.display(), err.kind()),
		);
	}
}

/// Prints a line to `stdout`
fn print(stdout: &mut impl io::Write, line: fmt::Arguments) {
	if let Err(err) = stdout.write_line(line) {
		tracing::warn!("Unable to write to stdout: {err}");
	}
}
