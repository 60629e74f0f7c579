use crate::card::{Card, PlayedCard};
use crate::error::{Error, Result};

/// The face-up pile of played cards. Only the top card is meaningful to the
/// rules; everything below it is spent and waits to refill the draw pile.
#[derive(Debug, Default)]
pub struct DiscardPile {
    top: Option<PlayedCard>,
    buried: Vec<Card>,
}

impl DiscardPile {
    pub(crate) fn starting_with(card: PlayedCard) -> Self {
        Self {
            top: Some(card),
            buried: Vec::new(),
        }
    }

    /// The most recently played card, the one legality is checked against.
    pub fn top(&self) -> Result<&PlayedCard> {
        self.top.as_ref().ok_or(Error::EmptyPile)
    }

    pub fn size(&self) -> usize {
        self.buried.len() + usize::from(self.top.is_some())
    }

    pub(crate) fn push(&mut self, card: PlayedCard) {
        if let Some(previous) = self.top.replace(card) {
            self.buried.push(previous.into_card());
        }
    }

    /// Drains every card below the top, collapsing the pile to one card.
    pub(crate) fn reclaim_buried(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.buried)
    }
}
