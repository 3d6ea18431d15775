//! Signal kinds and the sources that deliver them.
//!
//! # Responsibilities
//! - Name the signals a shutdown can be triggered by
//! - Subscribe to the OS for a set of them (`OsSignals`)
//! - Let code trigger a shutdown without the OS (`channel`)
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - An empty filter means any terminating signal, not every signal
//! - Off unix only Ctrl-C is observable and it maps to `Interrupt`

use std::collections::BTreeSet;
use std::fmt;
use std::future::Future;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::lifecycle::error::{ParseSignalError, ShutdownError};

/// A signal that can trigger shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Signal {
    Interrupt,
    Terminate,
    Quit,
    Hangup,
    User1,
    User2,
}

impl Signal {
    /// Signals listened for when no filter is given.
    pub const TERMINATING: [Signal; 4] = [
        Signal::Interrupt,
        Signal::Terminate,
        Signal::Quit,
        Signal::Hangup,
    ];

    /// Conventional `SIG*` name.
    pub fn name(self) -> &'static str {
        match self {
            Signal::Interrupt => "SIGINT",
            Signal::Terminate => "SIGTERM",
            Signal::Quit => "SIGQUIT",
            Signal::Hangup => "SIGHUP",
            Signal::User1 => "SIGUSR1",
            Signal::User2 => "SIGUSR2",
        }
    }

    /// Human readable description, as printed by `kill -l` style tools.
    pub fn description(self) -> &'static str {
        match self {
            Signal::Interrupt => "interrupt",
            Signal::Terminate => "terminated",
            Signal::Quit => "quit",
            Signal::Hangup => "hangup",
            Signal::User1 => "user defined signal 1",
            Signal::User2 => "user defined signal 2",
        }
    }

    #[cfg(unix)]
    fn kind(self) -> tokio::signal::unix::SignalKind {
        use tokio::signal::unix::SignalKind;

        match self {
            Signal::Interrupt => SignalKind::interrupt(),
            Signal::Terminate => SignalKind::terminate(),
            Signal::Quit => SignalKind::quit(),
            Signal::Hangup => SignalKind::hangup(),
            Signal::User1 => SignalKind::user_defined1(),
            Signal::User2 => SignalKind::user_defined2(),
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Signal {
    type Err = ParseSignalError;

    /// Accepts `SIGINT`, `INT` and `interrupt` style names, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let name = upper.strip_prefix("SIG").unwrap_or(upper.as_str());
        match name {
            "INT" | "INTERRUPT" => Ok(Signal::Interrupt),
            "TERM" | "TERMINATE" | "TERMINATED" => Ok(Signal::Terminate),
            "QUIT" => Ok(Signal::Quit),
            "HUP" | "HANGUP" => Ok(Signal::Hangup),
            "USR1" | "USER1" => Ok(Signal::User1),
            "USR2" | "USER2" => Ok(Signal::User2),
            _ => Err(ParseSignalError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Signal {
    type Error = ParseSignalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Signal> for String {
    fn from(signal: Signal) -> Self {
        signal.name().to_string()
    }
}

/// Filter passed to `listen`.
///
/// An empty set matches any of [`Signal::TERMINATING`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignalSet {
    signals: BTreeSet<Signal>,
}

impl SignalSet {
    /// A set matching any terminating signal.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn is_any(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn matches(&self, signal: Signal) -> bool {
        if self.is_any() {
            Signal::TERMINATING.contains(&signal)
        } else {
            self.signals.contains(&signal)
        }
    }

    /// The signals that have to be subscribed to.
    pub fn kinds(&self) -> Vec<Signal> {
        if self.is_any() {
            Signal::TERMINATING.to_vec()
        } else {
            self.signals.iter().copied().collect()
        }
    }
}

impl FromIterator<Signal> for SignalSet {
    fn from_iter<I: IntoIterator<Item = Signal>>(iter: I) -> Self {
        Self {
            signals: iter.into_iter().collect(),
        }
    }
}

impl From<&[Signal]> for SignalSet {
    fn from(signals: &[Signal]) -> Self {
        signals.iter().copied().collect()
    }
}

impl<const N: usize> From<[Signal; N]> for SignalSet {
    fn from(signals: [Signal; N]) -> Self {
        signals.into_iter().collect()
    }
}

/// Something that delivers shutdown signals.
pub trait SignalSource {
    /// Wait for the next signal. `None` means no more signals will arrive.
    fn recv(&mut self) -> impl Future<Output = Option<Signal>> + Send;
}

/// Signals delivered by the operating system.
///
/// Handlers are installed by [`OsSignals::subscribe`]; signals raised before
/// that are not observed. Must be created inside a Tokio runtime.
#[cfg(unix)]
pub struct OsSignals {
    streams: Vec<(Signal, tokio::signal::unix::Signal)>,
    // Stream polled first on the next recv; rotates so none starves.
    next: usize,
}

#[cfg(unix)]
impl OsSignals {
    pub fn subscribe(set: &SignalSet) -> Result<Self, ShutdownError> {
        let streams = set
            .kinds()
            .into_iter()
            .map(|signal| {
                tokio::signal::unix::signal(signal.kind())
                    .map(|stream| (signal, stream))
                    .map_err(|source| ShutdownError::Subscribe { signal, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(signals = ?set.kinds(), "Subscribed to OS signals");
        Ok(Self { streams, next: 0 })
    }
}

#[cfg(unix)]
impl SignalSource for OsSignals {
    async fn recv(&mut self) -> Option<Signal> {
        use std::task::Poll;

        std::future::poll_fn(|cx| {
            let len = self.streams.len();
            for offset in 0..len {
                let index = (self.next + offset) % len;
                let (signal, stream) = &mut self.streams[index];
                if let Poll::Ready(received) = stream.poll_recv(cx) {
                    let signal = *signal;
                    self.next = (index + 1) % len;
                    return Poll::Ready(received.map(|()| signal));
                }
            }
            Poll::Pending
        })
        .await
    }
}

#[cfg(not(unix))]
pub struct OsSignals {
    _private: (),
}

#[cfg(not(unix))]
impl OsSignals {
    pub fn subscribe(set: &SignalSet) -> Result<Self, ShutdownError> {
        if !set.is_any() {
            if let Some(signal) = set.kinds().into_iter().find(|s| *s != Signal::Interrupt) {
                return Err(ShutdownError::Unsupported(signal));
            }
        }
        tracing::debug!("Subscribed to Ctrl-C");
        Ok(Self { _private: () })
    }
}

#[cfg(not(unix))]
impl SignalSource for OsSignals {
    async fn recv(&mut self) -> Option<Signal> {
        match tokio::signal::ctrl_c().await {
            Ok(()) => Some(Signal::Interrupt),
            Err(e) => {
                tracing::error!(error = %e, "Ctrl-C handler failed");
                None
            }
        }
    }
}

/// Create a source fed by code instead of the OS.
///
/// The source closes once every [`SignalTrigger`] has been dropped.
pub fn channel() -> (SignalTrigger, ChannelSignals) {
    let (tx, rx) = mpsc::unbounded_channel();
    (SignalTrigger { tx }, ChannelSignals { rx })
}

/// Sending half of [`channel`].
#[derive(Debug, Clone)]
pub struct SignalTrigger {
    tx: mpsc::UnboundedSender<Signal>,
}

impl SignalTrigger {
    /// Deliver a signal. Returns false if the source has been dropped.
    pub fn trigger(&self, signal: Signal) -> bool {
        self.tx.send(signal).is_ok()
    }
}

/// Receiving half of [`channel`].
#[derive(Debug)]
pub struct ChannelSignals {
    rx: mpsc::UnboundedReceiver<Signal>,
}

impl SignalSource for ChannelSignals {
    async fn recv(&mut self) -> Option<Signal> {
        self.rx.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("SIGINT".parse::<Signal>().unwrap(), Signal::Interrupt);
        assert_eq!("int".parse::<Signal>().unwrap(), Signal::Interrupt);
        assert_eq!("interrupt".parse::<Signal>().unwrap(), Signal::Interrupt);
        assert_eq!("sigterm".parse::<Signal>().unwrap(), Signal::Terminate);
        assert_eq!("HUP".parse::<Signal>().unwrap(), Signal::Hangup);
        assert_eq!("SIGUSR2".parse::<Signal>().unwrap(), Signal::User2);
        assert!("SIGKILL".parse::<Signal>().is_err());
        assert!("".parse::<Signal>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for signal in [Signal::Quit, Signal::User1] {
            assert_eq!(signal.to_string().parse::<Signal>().unwrap(), signal);
        }
        assert_eq!(Signal::Terminate.description(), "terminated");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Signal::Interrupt).unwrap();
        assert_eq!(json, "\"SIGINT\"");

        let parsed: Vec<Signal> = serde_json::from_str(r#"["term", "SIGHUP"]"#).unwrap();
        assert_eq!(parsed, vec![Signal::Terminate, Signal::Hangup]);

        assert!(serde_json::from_str::<Signal>("\"SIGSEGV\"").is_err());
    }

    #[test]
    fn test_empty_set_matches_terminating_only() {
        let set = SignalSet::any();
        assert!(set.is_any());
        assert!(set.matches(Signal::Interrupt));
        assert!(set.matches(Signal::Hangup));
        assert!(!set.matches(Signal::User1));
        assert_eq!(set.kinds().len(), Signal::TERMINATING.len());
    }

    #[test]
    fn test_explicit_set() {
        let set = SignalSet::from([Signal::Terminate, Signal::User1, Signal::Terminate]);
        assert!(!set.is_any());
        assert!(set.matches(Signal::User1));
        assert!(!set.matches(Signal::Interrupt));
        assert_eq!(set.kinds(), vec![Signal::Terminate, Signal::User1]);
    }

    #[tokio::test]
    async fn test_channel_source() {
        let (trigger, mut source) = channel();
        assert!(trigger.trigger(Signal::Quit));
        assert_eq!(source.recv().await, Some(Signal::Quit));

        drop(trigger);
        assert_eq!(source.recv().await, None);
    }

    #[tokio::test]
    async fn test_trigger_after_source_dropped() {
        let (trigger, source) = channel();
        drop(source);
        assert!(!trigger.trigger(Signal::Interrupt));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_os_subscribe() {
        let source = OsSignals::subscribe(&SignalSet::from([Signal::User2]));
        assert!(source.is_ok());
    }
}
