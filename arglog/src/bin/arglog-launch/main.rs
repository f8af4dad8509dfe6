//! Launches an executable with arguments described by a config file

// Modules
mod args;

// Imports
use {
	self::args::Args,
	anyhow::Context,
	arglog::{launch, LaunchConfig},
	arglog_util::logger,
	clap::Parser,
	std::fs,
};

fn main() -> Result<(), anyhow::Error> {
	// Get arguments
	let args = Args::parse();
	logger::pre_init::debug(format!("Args: {args:?}"));

	// Initialize logging
	logger::init(args.log_file.as_deref(), args.log_file_append);

	// Read the config file
	let mut config = {
		let config_file = fs::File::open(&args.config_file).context("Unable to open config file")?;
		serde_json::from_reader::<_, LaunchConfig>(config_file).context("Unable to parse config file")?
	};
	if args.wait {
		config.wait_for_exit = true;
	}
	tracing::trace!(?config, "Parsed config");

	// Then launch
	match launch::launch(&config).context("Unable to launch executable")? {
		launch::LaunchOutcome::Spawned { pid } => tracing::info!(pid, "Spawned executable"),
		launch::LaunchOutcome::Exited { code } => match code {
			Some(code) => tracing::info!(code, "Executable exited"),
			None => tracing::warn!("Executable was terminated by a signal"),
		},
	}

	Ok(())
}
