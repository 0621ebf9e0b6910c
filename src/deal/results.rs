use super::board::FlopTurnRiver;
use super::player::PlayerResult;
use crate::Seat;
use rand::rngs::SmallRng;

/// Everything produced by one round of play: the community cards and one
/// result per seated player, in seat order. Constructed whole inside a
/// single worker invocation and never mutated afterward; ownership moves
/// from worker to collector through the results channel.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct Results {
    board: FlopTurnRiver,
    players: Vec<PlayerResult>,
}

impl Results {
    /// Deal one complete round for the given number of players.
    ///
    /// The board and every hole card are drawn independently and uniformly
    /// from the 13 ranks. No error conditions; the only side effect is
    /// consuming entropy from the generator the caller hands in.
    pub fn deal(rng: &mut SmallRng, players: usize) -> Self {
        Self {
            board: FlopTurnRiver::deal(rng),
            players: (0..players).map(|_| PlayerResult::deal(rng)).collect(),
        }
    }

    pub fn board(&self) -> &FlopTurnRiver {
        &self.board
    }
    pub fn players(&self) -> &[PlayerResult] {
        &self.players
    }
    pub fn player(&self, seat: Seat) -> &PlayerResult {
        &self.players[seat]
    }
}
