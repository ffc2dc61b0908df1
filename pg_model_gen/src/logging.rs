//! Diagnostic logging for the CLI
//!
//! Everything goes to stderr so stdout only ever carries generated code.

use tracing_subscriber::EnvFilter;

/// Maps the number of `-v` flags to a default filter directive
pub fn verbosity_directive(verbose: u8) -> &'static str {
	match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	}
}

/// Installs the global subscriber. `RUST_LOG` wins over `-v` when set.
///
/// Calling this twice is harmless, the second call is ignored.
pub fn init_logging(verbose: u8) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(verbosity_directive(verbose)));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}
