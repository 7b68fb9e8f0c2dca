//! Mock implementations for testing
//!
//! Provides a fake metrics provider, a recording command runner and a
//! recording notifier so unit tests never touch the host or spawn processes.

use crate::alerts::{AlertMessage, CommandRunner, Notifier};
use crate::domain::NetCounters;
use crate::error::{NotifyError, ProviderError};
use crate::sampler::MetricsProvider;

use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Fake provider with fixed CPU/RAM readings and scripted counters
#[derive(Debug)]
pub struct FakeProvider {
    cpu: f64,
    ram: f64,
    counters: VecDeque<NetCounters>,
    network_fails: bool,
    waited: Vec<Duration>,
}

impl FakeProvider {
    pub fn new(cpu: f64, ram: f64) -> Self {
        Self {
            cpu,
            ram,
            counters: VecDeque::new(),
            network_fails: false,
            waited: Vec::new(),
        }
    }

    /// Builder: counters returned by the first and second snapshot
    pub fn with_counters(mut self, before: NetCounters, after: NetCounters) -> Self {
        self.counters = VecDeque::from(vec![before, after]);
        self
    }

    /// Builder: every counter snapshot fails
    pub fn failing_network(mut self) -> Self {
        self.network_fails = true;
        self
    }

    /// Windows passed to `wait`, in order
    pub fn waited(&self) -> Vec<Duration> {
        self.waited.clone()
    }
}

impl MetricsProvider for FakeProvider {
    fn cpu_percent(&mut self) -> Result<f64, ProviderError> {
        Ok(self.cpu)
    }

    fn memory_percent(&mut self) -> Result<f64, ProviderError> {
        Ok(self.ram)
    }

    fn net_counters(&mut self) -> Result<NetCounters, ProviderError> {
        if self.network_fails {
            return Err(ProviderError::Unavailable {
                metric: "network".to_string(),
                reason: "mock failure".to_string(),
            });
        }
        Ok(self.counters.pop_front().unwrap_or_default())
    }

    fn host_name(&self) -> String {
        "fake-host".to_string()
    }

    fn wait(&mut self, window: Duration) {
        self.waited.push(window);
    }
}

/// One recorded command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
    pub stdin: Option<String>,
}

/// Command runner that records calls instead of spawning processes
#[derive(Debug, Default)]
pub struct RecordingRunner {
    available: HashSet<String>,
    failing: HashSet<String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingRunner {
    /// Runner on which only `programs` are installed
    pub fn with_programs(programs: &[&str]) -> Self {
        Self {
            available: programs.iter().map(|p| p.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Builder: `program` exits non-zero
    pub fn failing(mut self, program: &str) -> Self {
        self.failing.insert(program.to_string());
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn is_available(&self, program: &str) -> bool {
        self.available.contains(program)
    }

    fn run(&self, program: &str, args: &[&str], stdin: Option<&str>) -> Result<(), NotifyError> {
        self.calls.lock().unwrap().push(RecordedCall {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            stdin: stdin.map(str::to_string),
        });

        if self.failing.contains(program) {
            return Err(NotifyError::CommandFailed {
                program: program.to_string(),
                status: "exit status: 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Notifier that counts attempts and succeeds or fails on demand
#[derive(Debug, Clone)]
pub struct RecordingNotifier {
    name: String,
    succeed: bool,
    attempts: Arc<AtomicUsize>,
}

impl RecordingNotifier {
    pub fn succeeding(name: &str) -> Self {
        Self {
            name: name.to_string(),
            succeed: true,
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(name: &str) -> Self {
        Self {
            succeed: false,
            ..Self::succeeding(name)
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl Notifier for RecordingNotifier {
    fn attempt(&self, _message: &AlertMessage) -> Result<(), NotifyError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.succeed {
            Ok(())
        } else {
            Err(NotifyError::CommandFailed {
                program: self.name.clone(),
                status: "exit status: 1".to_string(),
            })
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
