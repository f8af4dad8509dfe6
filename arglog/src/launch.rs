//! Launching executables with arguments

// Imports
use {
	crate::config::LaunchConfig,
	itertools::Itertools,
	std::{
		fs,
		io,
		path::{Path, PathBuf},
		process::Command,
	},
};

/// Logic used to turn configured arguments into a process' argument vector
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentLogic {
	/// Values are passed as-is
	#[default]
	None,

	/// Each value is surrounded by a delimiter
	Delimited,

	/// The first value is a script, whose directory becomes the working directory
	Python,
}

/// Argument
#[derive(PartialEq, Eq, Clone, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Argument {
	/// Name, only used for diagnostics
	pub name: String,

	/// Value
	pub value: String,
}

/// Prepared arguments
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct PreparedArguments {
	/// Argument vector, excluding the executable
	pub args: Vec<String>,

	/// Working directory implied by the argument logic
	pub working_dir: Option<PathBuf>,
}

impl PreparedArguments {
	/// Renders the arguments as a double-quoted command line
	pub fn command_line(&self) -> String {
		self.args.iter().map(|arg| format!("\"{arg}\"")).join(" ")
	}
}

/// Prepares `arguments` according to `logic`
pub fn prepare_arguments(
	logic: ArgumentLogic,
	delimiter: &str,
	arguments: &[Argument],
) -> Result<PreparedArguments, LaunchError> {
	let prepared = match logic {
		ArgumentLogic::None => PreparedArguments {
			args:        arguments.iter().map(|arg| arg.value.clone()).collect(),
			working_dir: None,
		},

		// Note: A double quote delimiter is the quoting the OS strips when splitting
		//       the command line, so the child receives the bare value.
		ArgumentLogic::Delimited => PreparedArguments {
			args:        arguments
				.iter()
				.map(|arg| match delimiter {
					"\"" => self::replace_quotes(&arg.value),
					_ => format!("{delimiter}{}{delimiter}", self::replace_quotes(&arg.value)),
				})
				.collect(),
			working_dir: None,
		},

		ArgumentLogic::Python => {
			let (script, rest) = arguments.split_first().ok_or(LaunchError::NoScript)?;

			// Note: The child runs in the script's directory, so a relative script path
			//       must be resolved against our own working directory first.
			let script_path = Path::new(&script.value);
			let script_path = match fs::canonicalize(script_path) {
				Ok(path) if path.is_file() => path,
				_ => return Err(LaunchError::ScriptNotFound(script_path.to_path_buf())),
			};

			let args = std::iter::once(self::replace_quotes(&script_path.to_string_lossy()))
				.chain(rest.iter().map(|arg| self::replace_quotes(&arg.value)))
				.collect();
			PreparedArguments {
				args,
				working_dir: script_path.parent().map(Path::to_path_buf),
			}
		},
	};

	Ok(prepared)
}

/// Replaces all double quotes in `value` with `?`.
///
/// The receiving side splits its command line on double quotes, so they can't
/// appear within a value.
fn replace_quotes(value: &str) -> String {
	value.replace('"', "?")
}

/// Launch outcome
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum LaunchOutcome {
	/// Process was spawned and left running
	Spawned { pid: u32 },

	/// Process was waited on until it exited
	Exited { code: Option<i32> },
}

/// Launches the executable in `config`
pub fn launch(config: &LaunchConfig) -> Result<LaunchOutcome, LaunchError> {
	if !config.executable.is_file() {
		return Err(LaunchError::ExecutableNotFound(config.executable.clone()));
	}

	let prepared = self::prepare_arguments(config.argument_logic, &config.delimiter, &config.arguments)?;
	for arg in &config.arguments {
		tracing::trace!(name = %arg.name, value = %arg.value, "Argument");
	}
	tracing::debug!(
		executable = ?config.executable,
		"Starting executable with arguments {}",
		prepared.command_line()
	);

	let mut command = Command::new(&config.executable);
	command.args(&prepared.args);
	if let Some(working_dir) = config.working_dir.as_ref().or(prepared.working_dir.as_ref()) {
		command.current_dir(working_dir);
	}

	let mut child = command.spawn().map_err(|source| LaunchError::Spawn {
		executable: config.executable.clone(),
		source,
	})?;

	if !config.wait_for_exit {
		return Ok(LaunchOutcome::Spawned { pid: child.id() });
	}

	let status = child.wait().map_err(|source| LaunchError::Wait {
		executable: config.executable.clone(),
		source,
	})?;
	tracing::debug!(executable = ?config.executable, %status, "Executable exited");

	Ok(LaunchOutcome::Exited { code: status.code() })
}

/// Launch error
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
	/// No arguments, but the logic requires a script
	#[error("No arguments, expected at least one argument with the script path")]
	NoScript,

	/// Script wasn't found
	#[error("Cannot locate script {0:?}")]
	ScriptNotFound(PathBuf),

	/// Executable wasn't found
	#[error("Cannot find executable {0:?}")]
	ExecutableNotFound(PathBuf),

	/// Unable to spawn the executable
	#[error("Unable to spawn executable {executable:?}")]
	Spawn {
		executable: PathBuf,
		#[source]
		source:     io::Error,
	},

	/// Unable to wait for the executable
	#[error("Unable to wait for executable {executable:?}")]
	Wait {
		executable: PathBuf,
		#[source]
		source:     io::Error,
	},
}

#[cfg(test)]
mod tests {
	use super::*;

	fn arguments(values: &[&str]) -> Vec<Argument> {
		values
			.iter()
			.enumerate()
			.map(|(idx, value)| Argument {
				name:  format!("arg{idx}"),
				value: value.to_string(),
			})
			.collect()
	}

	#[test]
	fn none_passes_values_verbatim() {
		let prepared = prepare_arguments(ArgumentLogic::None, "'", &arguments(&["a b", "say \"hi\""])).unwrap();

		assert_eq!(prepared.args, ["a b", "say \"hi\""]);
		assert_eq!(prepared.working_dir, None);
	}

	#[test]
	fn delimited_wraps_values() {
		let prepared = prepare_arguments(ArgumentLogic::Delimited, "'", &arguments(&["alpha", "say \"hi\""])).unwrap();

		assert_eq!(prepared.args, ["'alpha'", "'say ?hi?'"]);
		assert_eq!(prepared.command_line(), r#""'alpha'" "'say ?hi?'""#);
	}

	#[test]
	fn delimited_double_quote_is_os_quoting() {
		let prepared = prepare_arguments(ArgumentLogic::Delimited, "\"", &arguments(&["alpha", "say \"hi\""])).unwrap();

		assert_eq!(prepared.args, ["alpha", "say ?hi?"]);
		assert_eq!(prepared.command_line(), r#""alpha" "say ?hi?""#);
	}

	#[test]
	fn python_requires_script() {
		let err = prepare_arguments(ArgumentLogic::Python, "", &[]).unwrap_err();
		assert!(matches!(err, LaunchError::NoScript));

		let err = prepare_arguments(ArgumentLogic::Python, "", &arguments(&["/nonexistent/script.py"])).unwrap_err();
		assert!(matches!(err, LaunchError::ScriptNotFound(path) if path == Path::new("/nonexistent/script.py")));
	}

	#[test]
	fn python_rejects_directory_script() {
		let dir = tempfile::tempdir().unwrap();

		let err = prepare_arguments(ArgumentLogic::Python, "", &arguments(&[dir.path().to_str().unwrap()])).unwrap_err();
		assert!(matches!(err, LaunchError::ScriptNotFound(_)));
	}

	#[test]
	fn python_uses_script_directory() {
		let dir = tempfile::tempdir().unwrap();
		let script = dir.path().join("log_args.py");
		std::fs::write(&script, "").unwrap();

		let prepared =
			prepare_arguments(ArgumentLogic::Python, "", &arguments(&[script.to_str().unwrap(), "a \"b\""])).unwrap();

		let script = fs::canonicalize(&script).unwrap();
		assert_eq!(prepared.args, [script.to_str().unwrap(), "a ?b?"]);
		assert_eq!(prepared.working_dir.as_deref(), script.parent());
	}

	#[test]
	fn python_resolves_relative_script() {
		let cur_dir = std::env::current_dir().unwrap();
		let dir = tempfile::tempdir_in(&cur_dir).unwrap();
		std::fs::write(dir.path().join("log_args.py"), "").unwrap();

		let script = dir.path().strip_prefix(&cur_dir).unwrap().join("log_args.py");
		assert!(script.is_relative());

		let prepared = prepare_arguments(ArgumentLogic::Python, "", &arguments(&[script.to_str().unwrap()])).unwrap();

		assert!(Path::new(&prepared.args[0]).is_absolute());
		assert_eq!(Path::new(&prepared.args[0]), fs::canonicalize(&script).unwrap());
		assert!(prepared.working_dir.unwrap().is_absolute());
	}

	#[test]
	fn launch_requires_executable() {
		let config = LaunchConfig {
			executable:     PathBuf::from("/nonexistent/executable"),
			arguments:      vec![],
			argument_logic: ArgumentLogic::None,
			delimiter:      String::new(),
			wait_for_exit:  true,
			working_dir:    None,
		};

		let err = launch(&config).unwrap_err();
		assert!(matches!(err, LaunchError::ExecutableNotFound(_)));
	}
}
