//! Match events and the publish/subscribe bus that carries them.
//!
//! Presentation collaborators subscribe to receive [`MatchEvent`]s over an
//! `mpsc` channel and unsubscribe with the id they were given. Subscribers
//! whose receiver has been dropped are pruned on the next publish.

use std::sync::mpsc::{self, Receiver, Sender};

use serde::Serialize;

use crate::types::{GridSize, LevelType, Position, RejectReason};

/// Everything the engine reports to the outside world
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum MatchEvent {
    /// A level was (re)started; carries what the host needs to frame the grid.
    LevelInitialized {
        level_type: LevelType,
        grid_size: GridSize,
        time_seconds: u32,
    },
    WordAccepted {
        word: String,
        score: u32,
    },
    WordRejected {
        word: String,
        reason: RejectReason,
    },
    BonusLetterFound {
        letter: char,
    },
    TileUnblocked {
        position: Position,
    },
    ScoreUpdated {
        total_score: u32,
        average_score_per_word: f32,
    },
    LevelWon,
    LevelLost,
}

/// Handle returned by [`EventBus::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Debug, Default)]
pub struct EventBus {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Sender<MatchEvent>)>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber; events published from now on are delivered to it.
    pub fn subscribe(&mut self) -> (SubscriptionId, Receiver<MatchEvent>) {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let (tx, rx) = mpsc::channel();
        self.subscribers.push((id, tx));
        (id, rx)
    }

    /// Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn publish(&mut self, event: MatchEvent) {
        self.subscribers
            .retain(|(_, tx)| tx.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
