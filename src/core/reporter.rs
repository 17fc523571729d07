//! Reporting capability for diagnostic notices
//!
//! The merge engine emits human-readable notices at four severities on two
//! named channels: a "file" channel for per-file and per-line import
//! diagnostics, and a "transactions" channel for the final summary. Where
//! those notices go is a startup concern, not a core concern, so the core
//! only ever talks to the [`Reporter`] trait.
//!
//! Two implementations are provided:
//!
//! - [`LogReporter`] forwards each notice to `tracing`, using the channel
//!   name as the event target. The binary installs a subscriber once at
//!   startup; the core never configures it.
//! - [`MemoryReporter`] records notices in memory, for tests and for
//!   embedding the engine in a host that wants to inspect diagnostics.

use std::cell::RefCell;
use std::fmt;

/// Named destination for diagnostic notices, independent of severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Per-file and per-line import diagnostics
    File,
    /// Final summary statistics
    Transactions,
}

impl Channel {
    /// Channel name as used for the `tracing` event target
    pub fn name(&self) -> &'static str {
        match self {
            Channel::File => "file",
            Channel::Transactions => "transactions",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

/// One recorded notice
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub severity: Severity,
    pub channel: Channel,
    pub message: String,
}

/// Reporting capability injected into the merge engine
///
/// Implementations decide where notices go; the engine only decides
/// severity, channel, and content.
pub trait Reporter {
    fn debug(&self, channel: Channel, message: &str);
    fn info(&self, channel: Channel, message: &str);
    fn warn(&self, channel: Channel, message: &str);
    fn error(&self, channel: Channel, message: &str);
}

/// Reporter that forwards notices to `tracing`
///
/// The channel name becomes the event target, so a filter directive like
/// `file=debug` enables the per-record import trace without touching the
/// summary channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

// tracing targets must be literals, so each level match-dispatches on the
// channel.
macro_rules! forward {
    ($level:ident, $channel:expr, $message:expr) => {
        match $channel {
            Channel::File => tracing::$level!(target: "file", "{}", $message),
            Channel::Transactions => tracing::$level!(target: "transactions", "{}", $message),
        }
    };
}

impl Reporter for LogReporter {
    fn debug(&self, channel: Channel, message: &str) {
        forward!(debug, channel, message);
    }

    fn info(&self, channel: Channel, message: &str) {
        forward!(info, channel, message);
    }

    fn warn(&self, channel: Channel, message: &str) {
        forward!(warn, channel, message);
    }

    fn error(&self, channel: Channel, message: &str) {
        forward!(error, channel, message);
    }
}

/// Reporter that records notices in memory
///
/// Single-threaded by design, like the rest of the system; interior
/// mutability lets the engine hold it behind a shared reference.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    notices: RefCell<Vec<Notice>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices recorded so far, in emission order
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    /// Number of recorded notices matching the given severity and channel
    pub fn count(&self, severity: Severity, channel: Channel) -> usize {
        self.notices
            .borrow()
            .iter()
            .filter(|n| n.severity == severity && n.channel == channel)
            .count()
    }

    fn record(&self, severity: Severity, channel: Channel, message: &str) {
        self.notices.borrow_mut().push(Notice {
            severity,
            channel,
            message: message.to_string(),
        });
    }
}

impl Reporter for MemoryReporter {
    fn debug(&self, channel: Channel, message: &str) {
        self.record(Severity::Debug, channel, message);
    }

    fn info(&self, channel: Channel, message: &str) {
        self.record(Severity::Info, channel, message);
    }

    fn warn(&self, channel: Channel, message: &str) {
        self.record(Severity::Warn, channel, message);
    }

    fn error(&self, channel: Channel, message: &str) {
        self.record(Severity::Error, channel, message);
    }
}
