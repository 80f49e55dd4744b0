use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "PROTOFORM_LOG";

/// Install a stderr subscriber filtered by `PROTOFORM_LOG`, else `warn` (`debug` when verbose).
pub fn init(verbose: bool) {
	let default_filter = if verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}
