use crate::Arbitrary;
use rand::rngs::SmallRng;

/// Card rank. Suits are not modeled anywhere in this crate; a dealt card is
/// its rank and nothing else.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Rank {
    #[default]
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    /// Number of distinct ranks in the deck.
    pub const COUNT: u8 = 13;

    /// Draw one rank uniformly from the given generator.
    /// Draws are with replacement; no finite deck is modeled.
    pub fn draw(rng: &mut SmallRng) -> Self {
        use rand::Rng;
        Self::from(rng.random_range(0..Self::COUNT))
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            0 => Rank::Two,
            1 => Rank::Three,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            12 => Rank::Ace,
            _ => panic!("Invalid rank u8: {}", n),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

impl Arbitrary for Rank {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..Self::COUNT))
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "T",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn bijective_u8() {
        let rank = Rank::random();
        assert!(rank == Rank::from(u8::from(rank)));
    }

    #[test]
    fn draws_cover_every_rank() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut seen = [false; Rank::COUNT as usize];
        for _ in 0..4096 {
            seen[u8::from(Rank::draw(rng)) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
