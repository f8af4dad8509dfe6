//! Argument logger (`arglog`)
//!
//! Records the arguments a program was invoked with into an append-only
//! text file, and launches programs with arguments prepared the way an
//! external orchestrator would.

// Modules
pub mod config;
pub mod launch;
pub mod logger;
pub mod paths;
pub mod record;
pub mod summary;
pub mod timestamp;

// Exports
pub use self::{
	config::LaunchConfig,
	logger::{ArgumentLogger, ExecutionError},
	record::InvocationRecord,
	timestamp::{CentisTimestamp, Clock, LocalClock, Timestamp},
};
