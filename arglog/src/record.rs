//! Invocation record

// Imports
use std::ffi::OsString;

/// Invocation record.
///
/// The argument vector of a single invocation, in invocation order.
/// By convention, the first argument identifies the program itself.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct InvocationRecord {
	/// Arguments
	arguments: Vec<String>,
}

impl InvocationRecord {
	/// Creates a record from an argument vector
	pub fn new<I, S>(arguments: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			arguments: arguments.into_iter().map(Into::into).collect(),
		}
	}

	/// Creates a record from an OS argument vector.
	///
	/// Arguments that aren't valid UTF-8 are converted lossily.
	pub fn from_os_args(arguments: impl IntoIterator<Item = OsString>) -> Self {
		Self::new(
			arguments
				.into_iter()
				.map(|arg| arg.to_string_lossy().into_owned()),
		)
	}

	/// Returns the script name (argument 0).
	///
	/// Returns an empty string if the argument vector is empty.
	pub fn script_name(&self) -> &str {
		self.arguments.first().map_or("", String::as_str)
	}

	/// Returns the number of arguments, including the script name
	pub fn argument_count(&self) -> usize {
		self.arguments.len()
	}

	/// Returns all arguments
	pub fn arguments(&self) -> &[String] {
		&self.arguments
	}
}
