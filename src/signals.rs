//! Host signal counters and edge detection.
//!
//! The host UI delivers user actions as monotonically bumped counters,
//! re-sent with every frame. Only a *change* in a counter is an occurrence:
//! `SignalLedger` compares each snapshot against the previously observed one
//! and emits the corresponding [`Command`]s, so redelivering an unchanged
//! snapshot is a no-op. The first snapshot only establishes the baseline —
//! a host that starts mid-count must not trigger phantom taps.

#[cfg(test)]
#[path = "signals_test.rs"]
mod signals_test;

use serde::{Deserialize, Serialize};

use crate::engine::Command;

/// One snapshot of the host's signal counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signals {
    /// Bumped on each "add point" tap.
    pub add_point: u64,
    /// Bumped on each "clear" tap.
    pub clear: u64,
    /// Bumped on each "undo" tap.
    pub undo: u64,
}

/// Converts counter snapshots into discrete commands by edge detection.
#[derive(Debug, Clone, Default)]
pub struct SignalLedger {
    last: Option<Signals>,
}

impl SignalLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare `signals` against the previous observation and return the
    /// commands whose counters changed, in processing order: add point,
    /// clear, undo. Any change counts as one edge, even a decrement.
    pub fn observe(&mut self, signals: Signals) -> Vec<Command> {
        let Some(last) = self.last.replace(signals) else {
            return Vec::new();
        };

        let mut commands = Vec::new();
        if signals.add_point != last.add_point {
            commands.push(Command::AddPoint);
        }
        if signals.clear != last.clear {
            commands.push(Command::Clear);
        }
        if signals.undo != last.undo {
            commands.push(Command::Undo);
        }
        commands
    }
}
