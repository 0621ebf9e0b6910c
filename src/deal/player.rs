use super::hole::Hole;
use crate::Arbitrary;
use rand::rngs::SmallRng;

/// A single player's results in one dealt round.
///
/// Folding is not simulated; every seat plays to showdown, so `folded` is
/// false on every dealt hand.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct PlayerResult {
    hole: Hole,
    folded: bool,
}

impl PlayerResult {
    /// Deal one player's hand from the given generator.
    pub fn deal(rng: &mut SmallRng) -> Self {
        Self {
            hole: Hole::deal(rng),
            folded: false,
        }
    }

    pub fn hole(&self) -> &Hole {
        &self.hole
    }
    pub fn folded(&self) -> bool {
        self.folded
    }
}

impl Arbitrary for PlayerResult {
    fn random() -> Self {
        Self {
            hole: Hole::random(),
            folded: false,
        }
    }
}
