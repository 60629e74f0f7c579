//! Rules engine for an UNO-style shedding card game.
//!
//! A [`Hand`] drives one round: it deals from a shuffled 108-card [`Deck`],
//! enforces play legality against the [`DiscardPile`] top, resolves the
//! special-card effects, runs the declare-last-card accusation mini-game and
//! scores the round once a player sheds their final card. A [`Game`] loops
//! hands into a match, accumulating scores until someone reaches the target.
//!
//! All randomness is injected as [`Shuffler`] / [`Randomizer`] functions, so
//! a seeded source replays a whole match deterministically:
//!
//! ```
//! use lastcard::{seeded_shuffler, Hand, HandParams};
//!
//! let hand = Hand::new(HandParams {
//!     players: vec!["Ana".to_string(), "Bo".to_string()],
//!     dealer: 0,
//!     shuffler: seeded_shuffler(7),
//!     cards_per_player: None,
//! })
//! .unwrap();
//!
//! assert_eq!(hand.player_hand(0).unwrap().len(), 7);
//! assert!(hand.player_in_turn().is_some());
//! ```

pub mod card;
mod constants;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod pile;
pub mod player;
pub mod random;

pub use card::{Card, CardColor, ColoredCard, PlayedCard};
pub use deck::Deck;
pub use error::{Error, Result};
pub use game::{Game, GameParams};
pub use hand::{is_playable, Hand, HandEndEvent, HandParams};
pub use pile::DiscardPile;
pub use player::Player;
pub use random::{
    seeded_randomizer, seeded_shuffler, standard_randomizer, standard_shuffler, Randomizer,
    Shuffler,
};
