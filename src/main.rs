use anyhow::{Context, Result};
use tracing::info;

use disksched::config::Config;
use disksched::error::ConfigError;
use disksched::logging;
use disksched::report::Report;
use disksched::utils::read_request_file;

fn main() -> Result<()> {
    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(ConfigError::Cli(err)) => err.exit(),
        Err(err) => return Err(err.into()),
    };
    logging::init(config.trace);

    let queue = read_request_file(&config.request_file, config.num_requests, &config.disk)
        .with_context(|| format!("loading requests from {}", config.request_file.display()))?;
    info!(
        requests = queue.len(),
        start = config.start,
        direction = %config.direction,
        "running schedulers"
    );

    print!("{}", Report::build(&config, &queue));
    Ok(())
}
