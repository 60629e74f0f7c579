use crate::card::Card;
use crate::error::{Error, Result};

#[derive(Debug)]
pub struct Player {
    name: String,
    pub(crate) hand: Vec<Card>,
    declared_last_card: bool,
}

impl Player {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            hand: Vec::new(),
            declared_last_card: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    pub fn has_declared(&self) -> bool {
        self.declared_last_card
    }

    /// Growing back above one card invalidates an earlier declaration.
    pub(crate) fn add_card(&mut self, card: Card) {
        self.hand.push(card);
        if self.hand.len() > 1 {
            self.declared_last_card = false;
        }
    }

    pub(crate) fn remove_card(&mut self, index: usize) -> Result<Card> {
        if index >= self.hand.len() {
            return Err(Error::CardNotFound);
        }
        Ok(self.hand.remove(index))
    }

    pub(crate) fn declare_last_card(&mut self) {
        self.declared_last_card = true;
    }
}
