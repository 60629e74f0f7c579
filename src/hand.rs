use std::fmt;

use tracing::debug;

use crate::card::{Card, CardColor, ColoredCard, PlayedCard};
use crate::constants::{
    DRAW_PENALTY, MAX_PLAYERS, MIN_PLAYERS, STANDARD_HAND_SIZE, UNO_CATCH_PENALTY,
    WILD_DRAW_PENALTY,
};
use crate::deck::Deck;
use crate::error::{Error, Result};
use crate::pile::DiscardPile;
use crate::player::Player;
use crate::random::Shuffler;

/// Delivered to `on_end` observers at the moment the winning card hits the
/// pile. `score` is the point sum over every non-winning hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandEndEvent {
    pub winner: usize,
    pub score: u32,
}

pub type EndObserver = Box<dyn FnMut(&HandEndEvent)>;

pub struct HandParams {
    pub players: Vec<String>,
    pub dealer: usize,
    pub shuffler: Shuffler,
    pub cards_per_player: Option<usize>,
}

/// One round of play, from the deal to a player shedding their last card.
///
/// The hand owns every piece of round state: the player hands, both piles,
/// the turn pointer and direction, the declare-last-card bookkeeping and the
/// accusation window. It is mutated only through its own operations, and once
/// a player empties their hand every further mutation fails with
/// [`Error::RoundEnded`].
pub struct Hand {
    players: Vec<Player>,
    dealer: usize,
    draw_pile: Deck,
    discard_pile: DiscardPile,
    current: usize,
    direction: i8,
    /// The player whose last play left them at exactly one card, while a
    /// missed declaration can still be called out.
    accusable: Option<usize>,
    winner: Option<usize>,
    observers: Vec<EndObserver>,
    shuffler: Shuffler,
}

impl Hand {
    pub fn new(params: HandParams) -> Result<Self> {
        let HandParams {
            players,
            dealer,
            mut shuffler,
            cards_per_player,
        } = params;

        if players.len() < MIN_PLAYERS || players.len() > MAX_PLAYERS {
            return Err(Error::InvalidPlayerCount);
        }
        if dealer >= players.len() {
            return Err(Error::PlayerIndexOutOfBounds);
        }

        let mut draw_pile = Deck::standard();
        draw_pile.shuffle(&mut *shuffler);

        let mut players: Vec<Player> = players.into_iter().map(Player::new).collect();
        let player_count = players.len();
        let cards_each = cards_per_player.unwrap_or(STANDARD_HAND_SIZE);
        for _ in 0..cards_each {
            for offset in 0..player_count {
                let card = draw_pile.deal()?;
                players[(dealer + 1 + offset) % player_count].add_card(card);
            }
        }

        // A round never starts on a wild: a flipped wild goes back into the
        // stock, which is reshuffled before the next flip.
        let first_up = loop {
            match draw_pile.deal()? {
                Card::Colored(color, colored) => break PlayedCard::Colored(color, colored),
                wild => {
                    if !draw_pile.holds_colored() {
                        return Err(Error::EmptyDeck);
                    }
                    draw_pile.put_back(wild);
                    draw_pile.shuffle(&mut *shuffler);
                }
            }
        };

        let mut hand = Hand {
            current: (dealer + 1) % player_count,
            players,
            dealer,
            draw_pile,
            discard_pile: DiscardPile::starting_with(first_up),
            direction: 1,
            accusable: None,
            winner: None,
            observers: Vec::new(),
            shuffler,
        };
        hand.apply_first_up_effects()?;
        Ok(hand)
    }

    /// The flipped starter acts like an ordinary play of the same card,
    /// except it stays on the pile: Skip skips the first player, Reverse
    /// starts play to the dealer's right, Draw penalizes the first player
    /// before any turn is taken.
    fn apply_first_up_effects(&mut self) -> Result<()> {
        let top = *self.discard_pile.top()?;
        let PlayedCard::Colored(_, colored) = top else {
            return Ok(());
        };
        match colored {
            ColoredCard::Number(_) => {}
            ColoredCard::Skip => self.current = self.step(self.current, 1),
            ColoredCard::Reverse => {
                self.direction = -1;
                self.current = self.step(self.dealer, 1);
            }
            ColoredCard::Draw => {
                self.draw_to(self.current, DRAW_PENALTY)?;
                self.current = self.step(self.current, 1);
            }
        }
        Ok(())
    }

    pub fn player(&self, index: usize) -> Result<&str> {
        self.check_index(index)?;
        Ok(self.players[index].name())
    }

    pub fn player_hand(&self, index: usize) -> Result<&[Card]> {
        self.check_index(index)?;
        Ok(self.players[index].hand())
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn dealer(&self) -> usize {
        self.dealer
    }

    pub fn discard_pile(&self) -> &DiscardPile {
        &self.discard_pile
    }

    pub fn draw_pile(&self) -> &Deck {
        &self.draw_pile
    }

    /// The player whose turn it is, or `None` once the round has ended.
    pub fn player_in_turn(&self) -> Option<usize> {
        if self.winner.is_some() {
            return None;
        }
        Some(self.current)
    }

    pub fn has_ended(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// The round total per the scoring table, available once the hand ends.
    pub fn score(&self) -> Option<u32> {
        self.winner.map(|_| self.round_score())
    }

    pub fn on_end(&mut self, observer: EndObserver) {
        self.observers.push(observer);
    }

    /// Whether the addressed card in the current player's hand is legal on
    /// the discard top. False, never an error, for a bad index.
    pub fn can_play(&self, card_index: usize) -> bool {
        if self.winner.is_some() {
            return false;
        }
        let hand = self.players[self.current].hand();
        let Some(card) = hand.get(card_index) else {
            return false;
        };
        let Ok(top) = self.discard_pile.top() else {
            return false;
        };
        is_playable(hand, card, top)
    }

    pub fn can_play_any(&self) -> bool {
        (0..self.players[self.current].hand_size()).any(|index| self.can_play(index))
    }

    /// The current player takes one card from the stock. If the drawn card
    /// still leaves them without a legal play, the turn passes.
    pub fn draw(&mut self) -> Result<()> {
        self.ensure_live()?;
        self.accusable = None;
        let card = self.next_draw_card()?;
        self.players[self.current].add_card(card);
        if !self.can_play_any() {
            self.current = self.step(self.current, 1);
        }
        Ok(())
    }

    /// The current player plays the card at `card_index`. Wilds must come
    /// with a chosen color, which gets stamped onto the pile top.
    pub fn play(&mut self, card_index: usize, chosen_color: Option<CardColor>) -> Result<()> {
        self.ensure_live()?;
        let player = self.current;
        let card = *self.players[player]
            .hand()
            .get(card_index)
            .ok_or(Error::CardNotFound)?;
        if matches!(card, Card::Colored(_, _)) && chosen_color.is_some() {
            return Err(Error::InvalidColorChoice);
        }
        if !self.can_play(card_index) {
            return Err(Error::IllegalPlay);
        }
        let played = match (card, chosen_color) {
            (Card::Colored(color, colored), _) => PlayedCard::Colored(color, colored),
            (Card::Wild, Some(color)) => PlayedCard::Wild(color),
            (Card::WildDraw, Some(color)) => PlayedCard::WildDraw(color),
            (Card::Wild | Card::WildDraw, None) => return Err(Error::MissingColorChoice),
        };

        self.players[player].remove_card(card_index)?;
        self.accusable = None;
        // The played card must be on the pile before any forced draw, so a
        // stock rebuild never sweeps it up.
        self.discard_pile.push(played);

        let mut steps = 1;
        match played {
            PlayedCard::Colored(_, ColoredCard::Number(_)) | PlayedCard::Wild(_) => {}
            PlayedCard::Colored(_, ColoredCard::Skip) => steps = 2,
            PlayedCard::Colored(_, ColoredCard::Reverse) => {
                self.direction = -self.direction;
                if self.players.len() == 2 {
                    steps = 2;
                }
            }
            PlayedCard::Colored(_, ColoredCard::Draw) => {
                let target = self.step(player, 1);
                self.draw_to(target, DRAW_PENALTY)?;
                steps = 2;
            }
            PlayedCard::WildDraw(_) => {
                let target = self.step(player, 1);
                self.draw_to(target, WILD_DRAW_PENALTY)?;
                steps = 2;
            }
        }

        if self.players[player].hand_size() == 0 {
            self.winner = Some(player);
            let score = self.round_score();
            debug!(winner = player, score, "hand ended");
            let event = HandEndEvent {
                winner: player,
                score,
            };
            for observer in &mut self.observers {
                observer(&event);
            }
            return Ok(());
        }

        if self.players[player].hand_size() == 1 {
            self.accusable = Some(player);
        }
        self.current = self.step(player, steps);
        Ok(())
    }

    /// Declares "last card". Meaningful only while the player holds at most
    /// two cards; anything else is a silent no-op.
    pub fn say_uno(&mut self, player: usize) -> Result<()> {
        self.ensure_live()?;
        self.check_index(player)?;
        if self.players[player].hand_size() <= 2 {
            self.players[player].declare_last_card();
        }
        Ok(())
    }

    /// Accuses `accused` of reaching one card without declaring. Returns
    /// whether the accusation stuck; a caught player draws four penalty
    /// cards. The window shuts on the next draw or play by anyone.
    pub fn catch_uno_failure(&mut self, accuser: usize, accused: usize) -> Result<bool> {
        self.ensure_live()?;
        self.check_index(accuser)?;
        self.check_index(accused)?;
        let caught = self.accusable == Some(accused)
            && self.players[accused].hand_size() == 1
            && !self.players[accused].has_declared();
        if caught {
            debug!(accuser, accused, "uno failure caught");
            self.draw_to(accused, UNO_CATCH_PENALTY)?;
            self.accusable = None;
        }
        Ok(caught)
    }

    pub(crate) fn into_shuffler(self) -> Shuffler {
        self.shuffler
    }

    fn ensure_live(&self) -> Result<()> {
        if self.winner.is_some() {
            return Err(Error::RoundEnded);
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.players.len() {
            return Err(Error::PlayerIndexOutOfBounds);
        }
        Ok(())
    }

    fn step(&self, from: usize, steps: usize) -> usize {
        let player_count = self.players.len() as i32;
        let delta = i32::from(self.direction) * steps as i32;
        (from as i32 + delta).rem_euclid(player_count) as usize
    }

    fn draw_to(&mut self, player: usize, count: usize) -> Result<()> {
        for _ in 0..count {
            let card = self.next_draw_card()?;
            self.players[player].add_card(card);
        }
        Ok(())
    }

    /// Deals from the stock, rebuilding it from the buried discards when it
    /// runs dry. Fails with `NoCardsAvailable` only if both piles are spent.
    fn next_draw_card(&mut self) -> Result<Card> {
        if self.draw_pile.is_empty() {
            let buried = self.discard_pile.reclaim_buried();
            if buried.is_empty() {
                return Err(Error::NoCardsAvailable);
            }
            debug!(cards = buried.len(), "rebuilding draw pile from discards");
            self.draw_pile = Deck::from_cards(buried);
            self.draw_pile.shuffle(&mut *self.shuffler);
        }
        self.draw_pile.deal()
    }

    fn round_score(&self) -> u32 {
        self.players
            .iter()
            .map(|player| player.hand().iter().map(Card::point_value).sum::<u32>())
            .sum()
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hand")
            .field("players", &self.players)
            .field("current", &self.current)
            .field("direction", &self.direction)
            .field("draw_pile", &self.draw_pile)
            .field("discard_pile", &self.discard_pile)
            .field("accusable", &self.accusable)
            .field("winner", &self.winner)
            .finish_non_exhaustive()
    }
}

/// The legality rule: a card goes on the top when the colors match, the
/// numbers match, the special types match, or the card is a wild. A Wild Draw
/// is additionally gated on the hand holding no card of the active color.
pub fn is_playable(hand: &[Card], card: &Card, top: &PlayedCard) -> bool {
    match card {
        Card::Wild => true,
        Card::WildDraw => !hand
            .iter()
            .any(|held| matches!(held, Card::Colored(color, _) if *color == top.color())),
        Card::Colored(color, colored) => {
            if *color == top.color() {
                return true;
            }
            match (colored, top) {
                (
                    ColoredCard::Number(number),
                    PlayedCard::Colored(_, ColoredCard::Number(top_number)),
                ) => number == top_number,
                (ColoredCard::Skip, PlayedCard::Colored(_, ColoredCard::Skip)) => true,
                (ColoredCard::Reverse, PlayedCard::Colored(_, ColoredCard::Reverse)) => true,
                (ColoredCard::Draw, PlayedCard::Colored(_, ColoredCard::Draw)) => true,
                _ => false,
            }
        }
    }
}
