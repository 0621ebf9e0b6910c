use crate::Arbitrary;
use crate::cards::rank::Rank;
use rand::rngs::SmallRng;

/// The five community cards of one round: flop, turn, and river, dealt all
/// at once. Immutable once constructed.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct FlopTurnRiver([Rank; 5]);

impl FlopTurnRiver {
    /// Deal a full board from the given generator.
    pub fn deal(rng: &mut SmallRng) -> Self {
        Self(std::array::from_fn(|_| Rank::draw(rng)))
    }

    pub fn flop(&self) -> &[Rank] {
        &self.0[..3]
    }
    pub fn turn(&self) -> Rank {
        self.0[3]
    }
    pub fn river(&self) -> Rank {
        self.0[4]
    }
    pub fn ranks(&self) -> &[Rank; 5] {
        &self.0
    }
}

impl Arbitrary for FlopTurnRiver {
    fn random() -> Self {
        Self(std::array::from_fn(|_| Rank::random()))
    }
}

impl std::fmt::Display for FlopTurnRiver {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [a, b, c, d, e] = self.0;
        write!(f, "{}{}{} {} {}", a, b, c, d, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn streets_partition_the_board() {
        let board = FlopTurnRiver::random();
        let ranks = board.ranks();
        assert!(board.flop() == &ranks[..3]);
        assert!(board.turn() == ranks[3]);
        assert!(board.river() == ranks[4]);
    }

    #[test]
    fn same_seed_same_board() {
        let ref mut a = SmallRng::seed_from_u64(42);
        let ref mut b = SmallRng::seed_from_u64(42);
        assert!(FlopTurnRiver::deal(a) == FlopTurnRiver::deal(b));
    }
}
