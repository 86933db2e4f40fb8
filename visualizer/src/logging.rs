//! Log output for the binary.
//!
//! The library crates log through the `log` facade; the fmt subscriber
//! installed here picks those records up and writes them to stderr.

use std::error::Error;

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// The filter comes from `directive` when given, then `RUST_LOG`, then
/// defaults to `info`.
pub fn init(directive: Option<&str>) -> Result<(), Box<dyn Error>> {
    let filter = match directive {
        Some(d) => EnvFilter::try_new(d)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| -> Box<dyn Error> { e })?;
    Ok(())
}
