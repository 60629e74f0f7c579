use strum::IntoEnumIterator;

use crate::card::{Card, CardColor, ColoredCard};
use crate::constants::*;
use crate::error::{Error, Result};

/// The face-down draw pile. The front of the vector is the top of the deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// The canonical 108-card set in color-major insertion order: per color
    /// one 0, two each of 1 through 9, two each of Skip/Reverse/Draw, then
    /// four Wild and four Wild Draw.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        for color in CardColor::iter() {
            for number in NUMBER_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Number(*number)));
            }
            for _ in 0..SKIP_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Skip));
            }
            for _ in 0..REVERSE_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Reverse));
            }
            for _ in 0..DRAW_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Draw));
            }
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            cards.push(Card::Wild);
        }
        for _ in 0..WILD_DRAW_CARDS_IN_DECK {
            cards.push(Card::WildDraw);
        }

        Self(cards)
    }

    pub(crate) fn from_cards(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    /// Reorders the deck in place with an injected permutation. Randomness is
    /// never ambient, so rounds replay bit-for-bit from a seeded shuffler.
    pub fn shuffle(&mut self, shuffler: &mut dyn FnMut(&mut Vec<Card>)) {
        shuffler(&mut self.0);
    }

    /// Removes and returns the top card.
    pub fn deal(&mut self) -> Result<Card> {
        if self.0.is_empty() {
            return Err(Error::EmptyDeck);
        }
        Ok(self.0.remove(0))
    }

    /// A new deck holding only the matching cards, relative order preserved.
    pub fn filter(&self, predicate: impl Fn(&Card) -> bool) -> Deck {
        Deck(self.0.iter().filter(|card| predicate(card)).copied().collect())
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn put_back(&mut self, card: Card) {
        self.0.push(card);
    }

    pub(crate) fn holds_colored(&self) -> bool {
        self.0.iter().any(|card| matches!(card, Card::Colored(_, _)))
    }
}
