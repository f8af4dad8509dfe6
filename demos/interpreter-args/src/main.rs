//! Logs its arguments when run through an interpreter, with the
//! script path as the first argument and every argument double-quoted.

// Imports
use {
	arglog::{paths, ArgumentLogger, InvocationRecord},
	arglog_util::logger,
	std::{env, io},
};

fn main() {
	logger::init(None, false);

	let record = InvocationRecord::from_os_args(env::args_os());
	ArgumentLogger::new(paths::INTERPRETER_LOG_PATH).log_reporting(&record, &mut io::stdout().lock());
}
