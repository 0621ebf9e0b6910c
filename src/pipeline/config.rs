/// Errors that can occur while validating a run configuration.
///
/// All are detected synchronously before the pipeline starts; there is no
/// recovery, only rejection with a descriptive message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    InvalidWorkerCount(usize),
    InvalidRoundCount(usize),
    InvalidPlayerCount(usize),
    RoundCountLessThanWorkerCount { rounds: usize, workers: usize },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidWorkerCount(n) => {
                write!(f, "worker count must be 1 or larger, got {}", n)
            }
            Self::InvalidRoundCount(n) => {
                write!(f, "round count must be 1 or larger, got {}", n)
            }
            Self::InvalidPlayerCount(n) => {
                write!(f, "player count must be 2 or larger, got {}", n)
            }
            Self::RoundCountLessThanWorkerCount { rounds, workers } => {
                write!(
                    f,
                    "round count {} must be at least the worker count {}, so every worker has rounds to deal",
                    rounds, workers
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Immutable configuration for one pipeline run. Constructed once, up
/// front, through [`Config::new`]; the private fields make an invalid
/// configuration unrepresentable downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    workers: usize,
    rounds: usize,
    players: usize,
}

impl Config {
    pub fn new(workers: usize, rounds: usize, players: usize) -> Result<Self, ConfigError> {
        if workers < 1 {
            return Err(ConfigError::InvalidWorkerCount(workers));
        }
        if rounds < 1 {
            return Err(ConfigError::InvalidRoundCount(rounds));
        }
        if players < 2 {
            return Err(ConfigError::InvalidPlayerCount(players));
        }
        if rounds < workers {
            return Err(ConfigError::RoundCountLessThanWorkerCount { rounds, workers });
        }
        Ok(Self {
            workers,
            rounds,
            players,
        })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    pub fn players(&self) -> usize {
        self.players
    }

    /// Capacity of both pipeline channels: rounds / workers, truncating.
    /// Truncation only shrinks the buffer, never round coverage. Validation
    /// forbids zero workers and zero rounds, but a bounded channel needs at
    /// least one slot, so both are guarded here anyway.
    pub fn capacity(&self) -> usize {
        (self.rounds / self.workers.max(1)).max(1)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} workers, {} rounds, {} players, buffer {}",
            self.workers,
            self.rounds,
            self.players,
            self.capacity()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_workers() {
        assert!(Config::new(0, 10, 2) == Err(ConfigError::InvalidWorkerCount(0)));
    }

    #[test]
    fn rejects_zero_rounds() {
        assert!(Config::new(1, 0, 2) == Err(ConfigError::InvalidRoundCount(0)));
    }

    #[test]
    fn rejects_lone_player() {
        assert!(Config::new(1, 10, 1) == Err(ConfigError::InvalidPlayerCount(1)));
    }

    #[test]
    fn rejects_more_workers_than_rounds() {
        assert!(
            Config::new(10, 5, 2)
                == Err(ConfigError::RoundCountLessThanWorkerCount {
                    rounds: 5,
                    workers: 10
                })
        );
    }

    #[test]
    fn buffer_splits_rounds_across_workers() {
        assert!(Config::new(10, 10000, 6).expect("valid").capacity() == 1000);
    }

    #[test]
    fn buffer_truncates_uneven_division() {
        assert!(Config::new(3, 7, 2).expect("valid").capacity() == 2);
    }

    #[test]
    fn buffer_never_collapses_to_zero() {
        assert!(Config::new(8, 8, 2).expect("valid").capacity() == 1);
    }
}
