//! Alert evaluation and notification
//!
//! Compares a sample against thresholds and delivers any breaches through
//! best-effort notification channels.

mod email;
mod evaluator;
mod notifier;
mod runner;
mod types;

pub use email::SmtpRelay;
pub use evaluator::evaluate;
pub use notifier::{
    email_chain, terminal_chain, FallbackChain, MailCommand, NotificationManager, Notifier,
    TerminalEcho, WallBroadcast,
};
pub use runner::{CommandRunner, SystemCommandRunner};
pub use types::{Alert, AlertMessage, MetricKind, ALERT_SUBJECT};
