use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::hand::{Hand, HandParams};
use crate::random::{standard_randomizer, standard_shuffler, Randomizer, Shuffler};

pub struct GameParams {
    pub players: Vec<String>,
    pub target_score: u32,
    pub randomizer: Randomizer,
    pub shuffler: Shuffler,
    pub cards_per_player: Option<usize>,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            players: vec!["A".to_string(), "B".to_string()],
            target_score: 500,
            randomizer: standard_randomizer(),
            shuffler: standard_shuffler(),
            cards_per_player: None,
        }
    }
}

/// Cumulative match state, shared with each hand's end observer so scores
/// settle the instant a winning card is played.
struct Standing {
    scores: Vec<u32>,
    target: u32,
    winner: Option<usize>,
}

/// A multi-round match: hands are dealt back to back, the winner of each
/// collects the losers' card points, and the first player to reach the
/// target score wins the match.
pub struct Game {
    players: Vec<String>,
    standing: Rc<RefCell<Standing>>,
    hand: Option<Hand>,
    randomizer: Randomizer,
    cards_per_player: Option<usize>,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("players", &self.players)
            .finish_non_exhaustive()
    }
}

impl Game {
    pub fn new(params: GameParams) -> Result<Self> {
        let GameParams {
            players,
            target_score,
            randomizer,
            shuffler,
            cards_per_player,
        } = params;

        if target_score == 0 {
            return Err(Error::InvalidTargetScore);
        }

        let standing = Rc::new(RefCell::new(Standing {
            scores: vec![0; players.len()],
            target: target_score,
            winner: None,
        }));
        let mut game = Game {
            players,
            standing,
            hand: None,
            randomizer,
            cards_per_player,
        };
        game.deal_hand(shuffler)?;
        Ok(game)
    }

    pub fn player(&self, index: usize) -> Result<&str> {
        self.players
            .get(index)
            .map(String::as_str)
            .ok_or(Error::PlayerIndexOutOfBounds)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn score(&self, index: usize) -> Result<u32> {
        if index >= self.players.len() {
            return Err(Error::PlayerIndexOutOfBounds);
        }
        Ok(self.standing.borrow().scores[index])
    }

    pub fn winner(&self) -> Option<usize> {
        self.standing.borrow().winner
    }

    pub fn target_score(&self) -> u32 {
        self.standing.borrow().target
    }

    /// The hand currently in play. An ended hand is swapped for a freshly
    /// dealt one here, reusing its shuffler; once the match is won there is
    /// no hand anymore.
    pub fn current_hand(&mut self) -> Option<&mut Hand> {
        let ended = matches!(&self.hand, Some(hand) if hand.has_ended());
        if ended {
            let shuffler = self.hand.take()?.into_shuffler();
            if self.standing.borrow().winner.is_none() {
                if let Err(error) = self.deal_hand(shuffler) {
                    debug!(%error, "failed to deal the next hand");
                }
            }
        }
        self.hand.as_mut()
    }

    fn deal_hand(&mut self, shuffler: Shuffler) -> Result<()> {
        let dealer = (self.randomizer)(self.players.len());
        let mut hand = Hand::new(HandParams {
            players: self.players.clone(),
            dealer,
            shuffler,
            cards_per_player: self.cards_per_player,
        })?;

        let standing = Rc::clone(&self.standing);
        hand.on_end(Box::new(move |event| {
            let mut standing = standing.borrow_mut();
            standing.scores[event.winner] += event.score;
            if standing.scores[event.winner] >= standing.target {
                standing.winner = Some(event.winner);
            }
        }));

        debug!(dealer, "dealt a new hand");
        self.hand = Some(hand);
        Ok(())
    }
}
