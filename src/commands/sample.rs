//! Sample command implementation
//!
//! Wires the real provider, command runner and notifiers into the pipeline.

use crate::alerts::{NotificationManager, SystemCommandRunner, TerminalEcho};
use crate::cli::output::{print_output, SampleSummary};
use crate::cli::OutputFormat;
use crate::config::Settings;
use crate::error::Result;
use crate::sampler::{MetricsProvider, SysinfoProvider};
use crate::services::Pipeline;

use std::sync::Arc;

/// Take one sample, log it, alert on breaches and print the summary
pub fn run_sample(format: OutputFormat) -> Result<()> {
    let settings = Settings::from_env()?;
    log::debug!("Loaded settings: {:?}", settings.thresholds);

    let provider = SysinfoProvider::new()?;
    let notifications = NotificationManager::with_echo(
        &settings.email,
        Arc::new(SystemCommandRunner::new()),
        &provider.host_name(),
        terminal_echo(format),
    );

    let mut pipeline = Pipeline::new(settings, provider, notifications);
    let report = pipeline.run()?;

    print_output(&SampleSummary::from(&report), format)?;
    Ok(())
}

/// Fallback echo stream; JSON output keeps stdout to the summary alone
fn terminal_echo(format: OutputFormat) -> TerminalEcho {
    match format {
        OutputFormat::Text => TerminalEcho::stdout(),
        OutputFormat::Json => TerminalEcho::stderr(),
    }
}
