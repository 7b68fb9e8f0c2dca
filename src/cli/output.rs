//! Output formatting utilities
//!
//! Provides text and JSON output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::config::Settings;
use crate::services::RunReport;
use crate::store::SampleRecord;
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TextDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => {
            writeln!(handle, "{}", data.to_text())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string(data).map_err(io::Error::other)?;
            writeln!(handle, "{}", json)?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as plain text
pub trait TextDisplay {
    fn to_text(&self) -> String;
}

/// Result of a sampling run
#[derive(Debug, Clone, Serialize)]
pub struct SampleSummary {
    #[serde(flatten)]
    pub record: SampleRecord,
    pub alerts: Vec<String>,
    #[serde(skip)]
    line: String,
}

impl From<&RunReport> for SampleSummary {
    fn from(report: &RunReport) -> Self {
        Self {
            record: SampleRecord::from(&report.sample),
            alerts: report.alerts.iter().map(ToString::to_string).collect(),
            line: report.sample.to_string(),
        }
    }
}

impl TextDisplay for SampleSummary {
    fn to_text(&self) -> String {
        self.line.clone()
    }
}

impl TextDisplay for Settings {
    fn to_text(&self) -> String {
        let t = &self.thresholds;
        let smtp = &self.email.smtp;
        let unset = || "(unset)".to_string();

        let mut output = String::new();
        output.push_str(&format!("CPU_WARN        {}%\n", t.cpu_percent));
        output.push_str(&format!("RAM_WARN        {}%\n", t.ram_percent));
        output.push_str(&format!("NET_WARN_Mbps   {} Mbps\n", t.net_mbps));
        output.push_str(&format!("SAMPLE_SECONDS  {}s\n", t.sample_seconds));
        output.push_str(&format!("LOG_DIR         {}\n", self.log_dir.display()));
        output.push_str(&format!(
            "EMAIL_TO        {}\n",
            self.email.recipient.clone().unwrap_or_else(unset)
        ));
        output.push_str(&format!(
            "SMTP_HOST       {}\n",
            smtp.host.clone().unwrap_or_else(unset)
        ));
        output.push_str(&format!("SMTP_PORT       {}\n", smtp.port));
        output.push_str(&format!(
            "SMTP_USER       {}\n",
            smtp.user.clone().unwrap_or_else(unset)
        ));
        output.push_str(&format!(
            "SMTP_PASS       {}\n",
            if smtp.password.is_some() { "********" } else { "(unset)" }
        ));
        output.push_str(&format!(
            "SMTP_STARTTLS   {}",
            if smtp.starttls { "on" } else { "off" }
        ));

        output
    }
}
