use thiserror::Error;

/// Domain-level rejections. These are returned, never panicked: the hand
/// stays intact and the host decides whether to re-prompt the same player.
/// Structural bugs (dealing past the deck, board reveals out of sequence,
/// building a table with fewer than two seats) panic instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid bet amount: {amount}, minimum: {minimum}")]
    InvalidBetAmount { amount: u32, minimum: u32 },
    #[error("cannot check facing a bet of {to_call}")]
    CannotCheck { to_call: u32 },
    #[error("no hand in progress")]
    NoHandInProgress,
    #[error("a hand is already in progress")]
    HandInProgress,
    #[error("no betting round in progress")]
    NoBettingRound,
    #[error("it's not player {actual}'s turn (expected player {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("need at least two players with chips to start a hand")]
    NotEnoughPlayers,
    #[error("hand evaluation needs at least 5 cards, got {0}")]
    TooFewCards(usize),
}
