//! Single-shot sampling pipeline
//!
//! ensure logs → sample → evaluate → append → notify (only if alerts fired).

use crate::alerts::{evaluate, Alert, AlertMessage, NotificationManager};
use crate::config::Settings;
use crate::domain::Sample;
use crate::error::AppError;
use crate::sampler::{MetricsProvider, Sampler};
use crate::store::LogStore;

/// Outcome of one run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub sample: Sample,
    pub alerts: Vec<Alert>,
    /// Channels that delivered the alert message
    pub notified: usize,
}

/// One invocation's worth of work
pub struct Pipeline<P: MetricsProvider> {
    settings: Settings,
    provider: P,
    store: LogStore,
    notifications: NotificationManager,
}

impl<P: MetricsProvider> Pipeline<P> {
    /// Create a pipeline writing under `settings.log_dir`
    pub fn new(settings: Settings, provider: P, notifications: NotificationManager) -> Self {
        let store = LogStore::new(&settings.log_dir);
        Self {
            settings,
            provider,
            store,
            notifications,
        }
    }

    /// Execute the pipeline once
    ///
    /// Store and sampling failures abort the run; notification failures
    /// are logged and ignored.
    pub fn run(&mut self) -> Result<RunReport, AppError> {
        self.store.ensure()?;

        let sampler = Sampler::new(self.settings.thresholds.sample_seconds);
        let sample = sampler.sample(&mut self.provider)?;
        let alerts = evaluate(&sample, &self.settings.thresholds);

        self.store.append(&sample)?;

        let notified = if alerts.is_empty() {
            0
        } else {
            log::debug!("{} threshold(s) breached", alerts.len());
            let message = AlertMessage::compose(&sample, &alerts, self.store.csv_path());
            self.notifications.notify_all(&message)
        };

        Ok(RunReport {
            sample,
            alerts,
            notified,
        })
    }

    pub fn store(&self) -> &LogStore {
        &self.store
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EmailSettings, Thresholds};
    use crate::domain::NetCounters;
    use crate::mock::{FakeProvider, RecordingRunner};
    use std::sync::Arc;

    fn settings(dir: &std::path::Path, thresholds: Thresholds) -> Settings {
        Settings {
            thresholds,
            log_dir: dir.to_path_buf(),
            email: EmailSettings::default(),
        }
    }

    #[test]
    fn test_run_without_alerts_skips_notifier() {
        let tmp = tempfile::tempdir().unwrap();
        let runner = Arc::new(RecordingRunner::with_programs(&["wall", "mail"]));
        let notifications =
            NotificationManager::from_settings(&EmailSettings::default(), runner.clone(), "h");
        let provider = FakeProvider::new(10.0, 10.0);

        let mut pipeline =
            Pipeline::new(settings(tmp.path(), Thresholds::default()), provider, notifications);
        let report = pipeline.run().unwrap();

        assert!(report.alerts.is_empty());
        assert_eq!(report.notified, 0);
        assert!(runner.calls().is_empty());
        assert!(pipeline.store().csv_path().exists());
    }

    #[test]
    fn test_run_with_breach_broadcasts() {
        let tmp = tempfile::tempdir().unwrap();
        let runner = Arc::new(RecordingRunner::with_programs(&["wall"]));
        let notifications =
            NotificationManager::from_settings(&EmailSettings::default(), runner.clone(), "h");
        let provider = FakeProvider::new(50.0, 20.0)
            .with_counters(NetCounters::new(0, 0), NetCounters::new(625_000, 625_000));
        let thresholds = Thresholds {
            cpu_percent: 10.0,
            ..Thresholds::default()
        };

        let mut pipeline = Pipeline::new(settings(tmp.path(), thresholds), provider, notifications);
        let report = pipeline.run().unwrap();

        assert_eq!(report.alerts.len(), 1);
        assert_eq!(report.notified, 1);
        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].args[0].contains("- CPU 50.0% ≥ 10%"));
        assert!(calls[0].args[0].ends_with(&format!("Log: {}", tmp.path().join("metrics.csv").display())));
    }
}
