use crate::Round;
use crate::deal::results::Results;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::mpsc::Receiver;
use tokio::sync::mpsc::Sender;

/// One member of the deal pool.
///
/// The round channel is single-consumer, so the pool shares its receiver
/// behind an async mutex held only across one receive. Each worker owns a
/// private generator seeded at spawn; no randomness is shared across tasks.
pub struct Worker {
    shard: usize,
    rx: Arc<Mutex<Receiver<Round>>>,
    tx: Sender<Results>,
    rng: SmallRng,
    players: usize,
}

impl Worker {
    pub fn new(
        shard: usize,
        rx: Arc<Mutex<Receiver<Round>>>,
        tx: Sender<Results>,
        players: usize,
    ) -> Self {
        Self {
            shard,
            rx,
            tx,
            rng: SmallRng::from_rng(&mut rand::rng()),
            players,
        }
    }

    /// Deal rounds until the round channel is closed and drained, then
    /// return how many this worker dealt. The send blocks while the results
    /// channel is full, so collector pace throttles the whole pool. The
    /// results sender clone drops on exit; once every worker has exited the
    /// results channel closes and the collector can finish.
    pub async fn run(mut self) -> usize {
        let mut dealt = 0;
        loop {
            let round = self.rx.lock().await.recv().await;
            match round {
                None => break,
                Some(round) => {
                    log::trace!("worker {:>3} dealing round {}", self.shard, round);
                    let results = Results::deal(&mut self.rng, self.players);
                    self.tx.send(results).await.expect("channel to be open");
                    dealt += 1;
                }
            }
        }
        log::debug!("worker {:>3} dealt {} rounds", self.shard, dealt);
        dealt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn exits_when_rounds_exhausted() {
        let (round_tx, round_rx) = tokio::sync::mpsc::channel(4);
        let (results_tx, mut results_rx) = tokio::sync::mpsc::channel(4);
        let round_rx = Arc::new(Mutex::new(round_rx));
        let worker = tokio::spawn(Worker::new(0, round_rx, results_tx, 2).run());
        for round in 0..4 {
            round_tx.send(round).await.expect("channel to be open");
        }
        drop(round_tx);
        let mut collected = 0;
        while let Some(results) = results_rx.recv().await {
            assert!(results.players().len() == 2);
            collected += 1;
        }
        assert!(worker.await.expect("worker task completes") == 4);
        assert!(collected == 4);
    }

    #[tokio::test]
    async fn pool_shares_one_receiver() {
        let (round_tx, round_rx) = tokio::sync::mpsc::channel(8);
        let (results_tx, mut results_rx) = tokio::sync::mpsc::channel(8);
        let round_rx = Arc::new(Mutex::new(round_rx));
        let workers = (0..4)
            .map(|shard| Worker::new(shard, round_rx.clone(), results_tx.clone(), 3))
            .map(|worker| tokio::spawn(worker.run()))
            .collect::<Vec<_>>();
        drop(results_tx);
        let feeder = tokio::spawn(async move {
            for round in 0..32 {
                round_tx.send(round).await.expect("channel to be open");
            }
        });
        let mut collected = 0;
        while let Some(_) = results_rx.recv().await {
            collected += 1;
        }
        feeder.await.expect("feeder task completes");
        let dealt = futures::future::join_all(workers)
            .await
            .into_iter()
            .map(|dealt| dealt.expect("worker task completes"))
            .sum::<usize>();
        assert!(dealt == 32);
        assert!(collected == 32);
    }
}
