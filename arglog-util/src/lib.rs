//! Utilities

// Modules
pub mod logger;

// Imports
use std::{fmt, io};

/// Extension trait for `W: io::Write` types to write whole lines
#[extend::ext(name = WriteLine)]
pub impl<W: io::Write> W {
	/// Writes `line` followed by a newline with a single write.
	///
	/// The line is formatted up-front, so that appends to a shared file
	/// never get split mid-line between two writers.
	fn write_line(&mut self, line: fmt::Arguments) -> Result<(), io::Error> {
		let mut line = line.to_string();
		line.push('\n');
		self.write_all(line.as_bytes())
	}
}
