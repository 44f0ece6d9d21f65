use crate::cards::{parse_cards, Card, CardIdError};
use std::fmt;
use std::str::FromStr;

pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly {HAND_SIZE} cards, got {0}")]
    CardCount(usize),
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
    #[error(transparent)]
    CardId(#[from] CardIdError),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A closed five-card poker hand: exactly [`HAND_SIZE`] distinct cards.
///
/// Construction validates the invariants the evaluator relies on, so a
/// `Hand` that exists is always well-formed. Uniqueness across multiple
/// hands is the dealer's responsibility, not checked here.
///
/// ```
/// use draw_poker::hand::Hand;
///
/// let hand: Hand = "Ks 5h 4d 3c 2s".parse().unwrap();
/// assert_eq!(hand.as_slice().len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn try_new(cards: [Card; HAND_SIZE]) -> Result<Self, HandError> {
        for i in 1..cards.len() {
            if cards[..i].contains(&cards[i]) {
                return Err(HandError::DuplicateCard(cards[i]));
            }
        }
        Ok(Self(cards))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            slice.try_into().map_err(|_| HandError::CardCount(slice.len()))?;
        Self::try_new(cards)
    }

    /// Build a hand from deck identifiers (0..52, `suit * 13 + rank`).
    pub fn from_ids(ids: &[u8]) -> Result<Self, HandError> {
        let mut cards = Vec::with_capacity(ids.len());
        for &id in ids {
            cards.push(Card::from_id(id)?);
        }
        Self::from_slice(&cards)
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.0
    }

    pub fn to_ids(&self) -> [u8; HAND_SIZE] {
        self.0.map(|c| c.id())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}
