use crate::Round;
use tokio::sync::mpsc::Sender;

/// Enumerates round indices and feeds them to the worker pool.
///
/// Holds the only sender for the round channel. When `run` returns, the
/// sender drops and the channel closes, which is how workers observe
/// exhaustion; nothing else may keep a clone alive.
pub struct Dispatcher {
    tx: Sender<Round>,
    rounds: usize,
}

impl Dispatcher {
    pub fn new(rounds: usize, tx: Sender<Round>) -> Self {
        Self { tx, rounds }
    }

    /// Send rounds `0..n` in increasing order, blocking whenever the
    /// channel is full. Exactly n sends, then exactly one close.
    pub async fn run(self) {
        for round in 0..self.rounds {
            self.tx.send(round).await.expect("channel to be open");
        }
        log::debug!("dispatched {} rounds", self.rounds);
    }
}
