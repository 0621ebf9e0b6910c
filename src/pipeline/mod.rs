pub mod collector;
pub use collector::*;

pub mod config;
pub use config::*;

pub mod dispatcher;
pub use dispatcher::*;

pub mod progress;
pub use progress::*;

pub mod worker;
pub use worker::*;

use crate::Round;
use crate::deal::results::Results;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Run the full pipeline with the default counting sink and return how many
/// rounds the collector received.
pub async fn run(config: Config) -> usize {
    simulate(config, Tally::default()).await.rounds()
}

/// Dispatcher -> bounded channel -> worker pool -> bounded channel ->
/// collector. Both channels share one capacity, rounds / workers, fixed for
/// the run.
///
/// Shutdown is sender-drop driven and happens exactly once per channel: the
/// dispatcher owns the only round sender, and each worker drops its results
/// sender clone on exit, so the results channel closes precisely when the
/// last worker is done and the collector drains to completion.
pub async fn simulate<A>(config: Config, sink: A) -> A
where
    A: Absorb + Send + 'static,
{
    let capacity = config.capacity();
    log::debug!("starting pipeline: {}", config);
    let (round_tx, round_rx) = tokio::sync::mpsc::channel::<Round>(capacity);
    let (results_tx, results_rx) = tokio::sync::mpsc::channel::<Results>(capacity);
    let collector = tokio::spawn(Collector::new(results_rx, sink, config.rounds()).run());
    let round_rx = Arc::new(Mutex::new(round_rx));
    let workers = (0..config.workers())
        .map(|shard| Worker::new(shard, round_rx.clone(), results_tx.clone(), config.players()))
        .map(|worker| tokio::spawn(worker.run()))
        .collect::<Vec<_>>();
    drop(results_tx);
    let dispatcher = tokio::spawn(Dispatcher::new(config.rounds(), round_tx).run());
    dispatcher.await.expect("dispatcher task completes");
    futures::future::join_all(workers).await;
    collector.await.expect("collector task completes")
}
