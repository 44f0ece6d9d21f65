use crate::cards::{Card, Suit};
use crate::hand::HAND_SIZE;

/// Suit facts about a hand: flush detection plus the house-rule tie-break
/// suit (the highest-priority suit present anywhere in the hand).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_flush: bool,
    /// Highest-priority suit among the five cards. For a flush this is
    /// the flush suit itself.
    pub tiebreak: Suit,
}

impl SuitInfo {
    pub fn detect(cards: &[Card; HAND_SIZE]) -> Self {
        let first = cards[0].suit();
        let is_flush = cards.iter().all(|c| c.suit() == first);
        // Suit's Ord is the priority order, so max() is the tie-break.
        let tiebreak = cards.iter().map(|c| c.suit()).max().unwrap_or(first);
        Self { is_flush, tiebreak }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn flush_tiebreak_is_the_flush_suit() {
        let cards = [
            Card::new(Rank::Ace, Suit::Diamonds),
            Card::new(Rank::Jack, Suit::Diamonds),
            Card::new(Rank::Nine, Suit::Diamonds),
            Card::new(Rank::Five, Suit::Diamonds),
            Card::new(Rank::Two, Suit::Diamonds),
        ];
        let info = SuitInfo::detect(&cards);
        assert!(info.is_flush);
        assert_eq!(info.tiebreak, Suit::Diamonds);
    }

    #[test]
    fn mixed_hand_picks_highest_priority_suit() {
        let cards = [
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::King, Suit::Diamonds),
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::Jack, Suit::Clubs),
            Card::new(Rank::Nine, Suit::Diamonds),
        ];
        let info = SuitInfo::detect(&cards);
        assert!(!info.is_flush);
        assert_eq!(info.tiebreak, Suit::Hearts);
    }

    #[test]
    fn single_spade_dominates_the_tiebreak() {
        let cards = [
            Card::new(Rank::Two, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::Jack, Suit::Diamonds),
            Card::new(Rank::Nine, Suit::Clubs),
        ];
        let info = SuitInfo::detect(&cards);
        assert_eq!(info.tiebreak, Suit::Spades);
    }
}
