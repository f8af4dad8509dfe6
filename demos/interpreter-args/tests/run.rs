//! Runs the program as a real process

// Imports
use {
	arglog::paths,
	std::{fs, path::Path, process::Command},
};

#[test]
fn logs_arguments_or_reports_error() {
	let log_path = Path::new(paths::INTERPRETER_LOG_PATH);
	let log_dir_existed = log_path.parent().is_some_and(Path::is_dir);
	let token = format!("interpreter-args-{}", std::process::id());

	let run = Command::new(env!("CARGO_BIN_EXE_interpreter-args"))
		.args([token.as_str(), "b e t a"])
		.output()
		.unwrap();

	// Note: Failures are only ever reported, never through the exit status
	assert!(run.status.success());
	let stderr = String::from_utf8(run.stderr).unwrap();
	assert!(!stderr.contains('\x1b'), "Found escape codes in stderr {stderr:?}");

	let stdout = String::from_utf8(run.stdout).unwrap();
	if !log_dir_existed {
		assert_eq!(stdout, "Error= NotFound\n");
		assert!(!log_path.exists());
		return;
	}

	match stdout.as_str() {
		"" => {
			let contents = fs::read_to_string(log_path).unwrap();
			let arg_line = format!(" Arg[1]={token}");
			assert!(contents.lines().any(|line| line.ends_with(&arg_line)));
		},
		_ => {
			assert_eq!(stdout.lines().count(), 1);
			assert!(stdout.starts_with("Error= "));
		},
	}
}
