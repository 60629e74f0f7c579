use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("a hand needs between 2 and 10 players")]
    InvalidPlayerCount,
    #[error("player index out of bounds")]
    PlayerIndexOutOfBounds,
    #[error("the round has already ended")]
    RoundEnded,
    #[error("no card at that position in the hand")]
    CardNotFound,
    #[error("that card cannot be played on the current discard top")]
    IllegalPlay,
    #[error("a wild card must be played with a chosen color")]
    MissingColorChoice,
    #[error("only wild cards take a chosen color")]
    InvalidColorChoice,
    #[error("the draw pile is empty")]
    EmptyDeck,
    #[error("the discard pile is empty")]
    EmptyPile,
    #[error("both the draw pile and the discard pile are exhausted")]
    NoCardsAvailable,
    #[error("target score must be greater than 0")]
    InvalidTargetScore,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
