//! Side channel for reporting degenerate (repeated-root) equations.
//!
//! Notification never changes the roots a solver returns; callers that need to act on degeneracy should read
//! [`Solution::is_degenerate`](crate::Solution::is_degenerate) instead.

use log::warn;

pub const DEGENERATE_MESSAGE: &str = "Degenerate equation: repeated roots";

pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Drops every message.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Notifier for Silent {
    fn notify(&self, _message: &str) {}
}

/// Forwards messages to the `log` facade at `warn` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        warn!("{}", message);
    }
}

impl<F: Fn(&str) + Send + Sync> Notifier for F {
    fn notify(&self, message: &str) {
        self(message)
    }
}
