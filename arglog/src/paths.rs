//! Log file paths
//!
//! Both paths are fixed at build time. They may be overridden by setting
//! `ARGLOG_DIRECT_LOG_PATH` / `ARGLOG_INTERPRETER_LOG_PATH` while compiling.

/// Log path when invoked directly as an executable
pub const DIRECT_LOG_PATH: &str = match option_env!("ARGLOG_DIRECT_LOG_PATH") {
	Some(path) => path,
	None => DEFAULT_DIRECT_LOG_PATH,
};

/// Log path when invoked through an interpreter
pub const INTERPRETER_LOG_PATH: &str = match option_env!("ARGLOG_INTERPRETER_LOG_PATH") {
	Some(path) => path,
	None => DEFAULT_INTERPRETER_LOG_PATH,
};

#[cfg(windows)]
const DEFAULT_DIRECT_LOG_PATH: &str = r"c:\test\testRunExecutable\PythonScriptTakingArgumentsOutput.txt";
#[cfg(not(windows))]
const DEFAULT_DIRECT_LOG_PATH: &str = "/tmp/test/testRunExecutable/PythonScriptTakingArgumentsOutput.txt";

#[cfg(windows)]
const DEFAULT_INTERPRETER_LOG_PATH: &str = r"c:\test\PythonScriptTakingArgumentsOutput.txt";
#[cfg(not(windows))]
const DEFAULT_INTERPRETER_LOG_PATH: &str = "/tmp/test/PythonScriptTakingArgumentsOutput.txt";
