use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq)]
pub enum CardColor {
    Red,
    Yellow,
    Green,
    Blue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColoredCard {
    Number(u8),
    Skip,
    Reverse,
    Draw,
}

/// A card as it sits in the deck or in a player's hand. Wilds are colorless
/// until the moment they are played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Card {
    Colored(CardColor, ColoredCard),
    Wild,
    WildDraw,
}

/// A card on top of the discard pile. Wilds carry the color chosen when they
/// were played, so the pile top always has an active color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayedCard {
    Colored(CardColor, ColoredCard),
    Wild(CardColor),
    WildDraw(CardColor),
}

impl Card {
    /// End-of-round value of a card left in a losing hand.
    pub fn point_value(&self) -> u32 {
        match self {
            Card::Colored(_, ColoredCard::Number(number)) => u32::from(*number),
            Card::Colored(_, _) => 20,
            Card::Wild | Card::WildDraw => 50,
        }
    }
}

impl PlayedCard {
    pub fn color(&self) -> CardColor {
        match self {
            PlayedCard::Colored(color, _) => *color,
            PlayedCard::Wild(color) => *color,
            PlayedCard::WildDraw(color) => *color,
        }
    }

    /// Drops the stamped color from a wild so the card can return to the
    /// draw pile during a rebuild.
    pub(crate) fn into_card(self) -> Card {
        match self {
            PlayedCard::Colored(color, colored) => Card::Colored(color, colored),
            PlayedCard::Wild(_) => Card::Wild,
            PlayedCard::WildDraw(_) => Card::WildDraw,
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Colored(color, card) => {
                write!(f, "{} {}", color, {
                    match card {
                        ColoredCard::Number(number) => number.to_string(),
                        ColoredCard::Skip => "Skip".to_string(),
                        ColoredCard::Reverse => "Reverse".to_string(),
                        ColoredCard::Draw => "Draw".to_string(),
                    }
                })
            }
            Card::Wild => write!(f, "Wild"),
            Card::WildDraw => write!(f, "Wild Draw"),
        }
    }
}
