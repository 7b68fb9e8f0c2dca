//! Alert notification system
//!
//! Provides the terminal broadcast channel and the recipient channel
//! (local `mail` command, then SMTP). Each channel is an ordered
//! [`FallbackChain`] of notifiers; delivery is best-effort.

use super::email::SmtpRelay;
use super::runner::CommandRunner;
use super::types::AlertMessage;
use crate::config::EmailSettings;
use crate::error::NotifyError;

use std::io::{self, Write};
use std::sync::Arc;

/// Notification strategy
pub trait Notifier: Send + Sync {
    /// Try to deliver the message once
    fn attempt(&self, message: &AlertMessage) -> Result<(), NotifyError>;

    /// Channel name for identification
    fn name(&self) -> &str;
}

/// Ordered list of notifiers tried until one succeeds
pub struct FallbackChain {
    name: String,
    notifiers: Vec<Box<dyn Notifier>>,
}

impl FallbackChain {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            notifiers: Vec::new(),
        }
    }

    /// Append a notifier to the end of the chain
    pub fn then(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifiers.push(notifier);
        self
    }

    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }

    /// Names of the notifiers, in attempt order
    pub fn names(&self) -> Vec<&str> {
        self.notifiers.iter().map(|n| n.name()).collect()
    }
}

impl Notifier for FallbackChain {
    fn attempt(&self, message: &AlertMessage) -> Result<(), NotifyError> {
        let mut last_err = NotifyError::NoChannels;
        for notifier in &self.notifiers {
            match notifier.attempt(message) {
                Ok(()) => {
                    log::debug!("{}: delivered via {}", self.name, notifier.name());
                    return Ok(());
                }
                Err(e) => {
                    log::debug!("{}: {} failed: {}", self.name, notifier.name(), e);
                    last_err = e;
                }
            }
        }
        Err(last_err)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Broadcast to logged-in terminals with `wall`
pub struct WallBroadcast {
    runner: Arc<dyn CommandRunner>,
}

impl WallBroadcast {
    pub const PROGRAM: &'static str = "wall";

    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

impl Notifier for WallBroadcast {
    fn attempt(&self, message: &AlertMessage) -> Result<(), NotifyError> {
        if !self.runner.is_available(Self::PROGRAM) {
            return Err(NotifyError::CommandUnavailable(Self::PROGRAM.to_string()));
        }
        self.runner.run(Self::PROGRAM, &[&message.body], None)
    }

    fn name(&self) -> &str {
        Self::PROGRAM
    }
}

/// Print the message on this process's stdout or stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalEcho {
    use_stderr: bool,
}

impl TerminalEcho {
    /// Echo to stdout
    pub fn stdout() -> Self {
        Self { use_stderr: false }
    }

    /// Echo to stderr, keeping stdout free for machine-readable output
    pub fn stderr() -> Self {
        Self { use_stderr: true }
    }
}

impl Notifier for TerminalEcho {
    fn attempt(&self, message: &AlertMessage) -> Result<(), NotifyError> {
        let result = if self.use_stderr {
            let stderr = io::stderr();
            let mut handle = stderr.lock();
            writeln!(handle, "{}", message.body).and_then(|_| handle.flush())
        } else {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", message.body).and_then(|_| handle.flush())
        };
        result.map_err(NotifyError::Echo)
    }

    fn name(&self) -> &str {
        if self.use_stderr {
            "stderr"
        } else {
            "stdout"
        }
    }
}

/// Hand the message to the local `mail` command
pub struct MailCommand {
    runner: Arc<dyn CommandRunner>,
    recipient: String,
}

impl MailCommand {
    pub const PROGRAM: &'static str = "mail";

    pub fn new(runner: Arc<dyn CommandRunner>, recipient: impl Into<String>) -> Self {
        Self {
            runner,
            recipient: recipient.into(),
        }
    }
}

impl Notifier for MailCommand {
    fn attempt(&self, message: &AlertMessage) -> Result<(), NotifyError> {
        if !self.runner.is_available(Self::PROGRAM) {
            return Err(NotifyError::CommandUnavailable(Self::PROGRAM.to_string()));
        }
        self.runner.run(
            Self::PROGRAM,
            &["-s", &message.subject, &self.recipient],
            Some(&message.body),
        )
    }

    fn name(&self) -> &str {
        Self::PROGRAM
    }
}

/// Notification manager
///
/// Dispatches a message to every configured channel and swallows failures.
pub struct NotificationManager {
    channels: Vec<Box<dyn Notifier>>,
}

impl NotificationManager {
    /// Create a manager with no channels
    pub fn new() -> Self {
        Self {
            channels: Vec::new(),
        }
    }

    /// Build the standard channels, echoing to stdout when `wall` fails
    pub fn from_settings(
        email: &EmailSettings,
        runner: Arc<dyn CommandRunner>,
        local_host: &str,
    ) -> Self {
        Self::with_echo(email, runner, local_host, TerminalEcho::stdout())
    }

    /// Build the standard channels with an explicit terminal fallback
    ///
    /// The terminal channel is always present. The recipient channel exists
    /// only when a recipient is configured.
    pub fn with_echo(
        email: &EmailSettings,
        runner: Arc<dyn CommandRunner>,
        local_host: &str,
        echo: TerminalEcho,
    ) -> Self {
        let mut manager = Self::new();
        manager.add_channel(Box::new(terminal_chain(Arc::clone(&runner), echo)));
        if let Some(chain) = email_chain(email, runner, local_host) {
            manager.add_channel(Box::new(chain));
        }
        manager
    }

    /// Add a channel
    pub fn add_channel(&mut self, channel: Box<dyn Notifier>) {
        self.channels.push(channel);
    }

    /// Deliver to every channel, returning how many succeeded
    pub fn notify_all(&self, message: &AlertMessage) -> usize {
        let mut delivered = 0;
        for channel in &self.channels {
            match channel.attempt(message) {
                Ok(()) => delivered += 1,
                Err(e) => log::warn!("Failed to notify via {}: {}", channel.name(), e),
            }
        }
        delivered
    }

    /// Get number of channels
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// `wall`, then the terminal echo
pub fn terminal_chain(runner: Arc<dyn CommandRunner>, echo: TerminalEcho) -> FallbackChain {
    FallbackChain::new("terminal")
        .then(Box::new(WallBroadcast::new(runner)))
        .then(Box::new(echo))
}

/// `mail`, then the SMTP relay when `SMTP_HOST` is set; `None` without a recipient
pub fn email_chain(
    email: &EmailSettings,
    runner: Arc<dyn CommandRunner>,
    local_host: &str,
) -> Option<FallbackChain> {
    let recipient = email.recipient.as_ref()?;
    let mut chain =
        FallbackChain::new("email").then(Box::new(MailCommand::new(runner, recipient.clone())));
    if let Some(relay) = SmtpRelay::from_settings(&email.smtp, recipient, local_host) {
        chain = chain.then(Box::new(relay));
    }
    Some(chain)
}
