//! Config command implementation

use crate::cli::output::print_output;
use crate::cli::OutputFormat;
use crate::config::Settings;
use crate::error::Result;

/// Print the settings the sampler would run with
pub fn run_config(format: OutputFormat) -> Result<()> {
    let settings = Settings::from_env()?;
    print_output(&settings, format)?;
    Ok(())
}
