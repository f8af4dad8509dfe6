//! Launch configuration

// Imports
use {
	crate::launch::{Argument, ArgumentLogic},
	std::path::PathBuf,
};

/// Launch configuration
#[derive(Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct LaunchConfig {
	/// Full path to the executable
	pub executable: PathBuf,

	/// Arguments, in order
	#[serde(default)]
	pub arguments: Vec<Argument>,

	/// Logic used to turn the arguments into the process' argument vector
	#[serde(default)]
	pub argument_logic: ArgumentLogic,

	/// Delimiter placed around each argument, for [`ArgumentLogic::Delimited`]
	#[serde(default)]
	pub delimiter: String,

	/// Whether to wait for the executable to exit
	#[serde(default)]
	pub wait_for_exit: bool,

	/// Working directory.
	///
	/// Overrides any working directory implied by the argument logic.
	#[serde(default)]
	pub working_dir: Option<PathBuf>,
}
