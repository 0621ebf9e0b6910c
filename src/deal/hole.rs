use crate::Arbitrary;
use crate::cards::rank::Rank;
use rand::rngs::SmallRng;

/// One player's two hole cards.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Hole([Rank; 2]);

impl Hole {
    /// Deal two hole cards from the given generator.
    pub fn deal(rng: &mut SmallRng) -> Self {
        Self(std::array::from_fn(|_| Rank::draw(rng)))
    }

    pub fn ranks(&self) -> &[Rank; 2] {
        &self.0
    }
}

impl From<(Rank, Rank)> for Hole {
    fn from(cards: (Rank, Rank)) -> Self {
        Self([cards.0, cards.1])
    }
}

impl Arbitrary for Hole {
    fn random() -> Self {
        Self(std::array::from_fn(|_| Rank::random()))
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_pair() {
        let hole = Hole::from((Rank::Ace, Rank::Two));
        assert!(hole.ranks() == &[Rank::Ace, Rank::Two]);
    }
}
