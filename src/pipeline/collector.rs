use super::progress::Progress;
use crate::deal::results::Results;
use tokio::sync::mpsc::Receiver;

/// Incremental aggregation over collected results.
///
/// The pipeline only requires that every result sent by every worker is
/// absorbed exactly once; what a sink keeps is its own business. The
/// default [`Tally`] keeps nothing but the count.
pub trait Absorb {
    fn absorb(&mut self, results: Results);
}

/// Counting sink. Discards hand contents and keeps total throughput.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    rounds: usize,
}

impl Tally {
    pub fn rounds(&self) -> usize {
        self.rounds
    }
}

impl Absorb for Tally {
    fn absorb(&mut self, _: Results) {
        self.rounds += 1;
    }
}

/// Drains the results channel into a sink until every worker has exited
/// and the channel is closed, then returns the sink. This return is the
/// terminating operation of the whole pipeline.
pub struct Collector<A> {
    rx: Receiver<Results>,
    sink: A,
    progress: Progress,
}

impl<A: Absorb> Collector<A> {
    pub fn new(rx: Receiver<Results>, sink: A, total: usize) -> Self {
        Self {
            rx,
            sink,
            progress: Progress::new(total, crate::PROGRESS_CHECKPOINTS),
        }
    }

    pub async fn run(mut self) -> A {
        while let Some(results) = self.rx.recv().await {
            self.sink.absorb(results);
            self.progress.tick();
        }
        self.sink
    }
}
