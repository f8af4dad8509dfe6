//! Logs its arguments when run directly as an executable

// Imports
use {
	arglog::{paths, ArgumentLogger, InvocationRecord},
	arglog_util::logger,
	std::{env, io},
};

fn main() {
	logger::init(None, false);

	let record = InvocationRecord::from_os_args(env::args_os());
	ArgumentLogger::new(paths::DIRECT_LOG_PATH).log_reporting(&record, &mut io::stdout().lock());
}
