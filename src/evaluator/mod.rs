pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank, Suit};
use crate::hand::{Hand, HandError};
use core::cmp::Ordering;
use std::fmt;

/// Poker hand category from weakest to strongest.
///
/// Discriminants are the category strengths used in the packed score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compact, comparable hand strength. Higher is better.
///
/// Comparing two scores numerically is equivalent to comparing the hands
/// lexicographically by (category, primary key, tie-break suit, remaining
/// kickers). The suit field deliberately sits between the primary key and
/// the later kickers; see [`Score::from_parts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u64);

impl Score {
    const CAT_SHIFT: u32 = 48;
    const FIELD_STRIDE: u32 = 6;

    /// Return the packed comparable value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Pack (category, primary, suit priority, kickers…) into one value.
    /// Uses 6 bits per field, which is generous for ranks 2..=14 and suit
    /// priorities 0..=3.
    ///
    /// Layout (most significant -> least):
    /// [ category (8 bits) | primary (6) | suit (6) | k1 (6) | k2 (6) | k3 (6) | k4 (6) | 12 zero bits ]
    ///
    /// The suit priority is MORE significant than every kicker after the
    /// primary key. For multi-kicker categories (two pair, one pair,
    /// trips) this means the tie-break suit is compared before the later
    /// rank kickers. That precedence is a house rule this crate preserves
    /// bit-for-bit; it is not an ordinary poker comparison.
    pub(crate) fn from_parts(
        category: Category,
        primary: Rank,
        tiebreak_suit: Suit,
        kickers: &[Rank],
    ) -> Self {
        debug_assert!(kickers.len() <= 4);
        let mut v: u64 = (category as u64) << Self::CAT_SHIFT;
        v |= (primary as u64) << (Self::CAT_SHIFT - Self::FIELD_STRIDE);
        v |= (tiebreak_suit.priority() as u64) << (Self::CAT_SHIFT - 2 * Self::FIELD_STRIDE);
        for (i, r) in kickers.iter().enumerate() {
            let offset = Self::CAT_SHIFT - Self::FIELD_STRIDE * (i as u32 + 3);
            v |= (*r as u64) << offset;
        }
        Score(v)
    }
}

/// Detailed evaluation result. `score` drives ordering.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    /// Primary within-category key: straight-high, quad/trip/pair rank,
    /// or the top card for flushes and high-card hands.
    pub primary: Rank,
    /// Highest-priority suit present anywhere in the hand (house rule).
    pub tiebreak_suit: Suit,
    /// The hand's cards sorted by rank (then suit) descending.
    pub sorted_cards: [Card; 5],
    kickers: [Rank; 4],
    kicker_len: u8,
    score: Score,
}

impl Evaluation {
    /// Return the packed comparable score for ordering/caching.
    pub const fn score(&self) -> Score {
        self.score
    }

    /// Secondary keys after the primary, strongest first. Empty for
    /// straights and straight flushes.
    pub fn kickers(&self) -> &[Rank] {
        &self.kickers[..self.kicker_len as usize]
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl Eq for Evaluation {}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
}

/// Evaluate a validated five-card hand.
///
/// Pure and total: the same hand always produces the same score, and a
/// [`Hand`] can always be classified. Classification consults a fixed
/// priority-ordered list of category detectors over a shared analysis of
/// the hand.
///
/// ```
/// use draw_poker::evaluator::{evaluate, Category};
/// use draw_poker::hand::Hand;
///
/// let wheel: Hand = "Ah 2s 3d 4c 5h".parse().unwrap();
/// let eval = evaluate(&wheel);
/// assert_eq!(eval.category, Category::Straight);
/// assert_eq!(eval.primary, draw_poker::cards::Rank::Five);
/// ```
pub fn evaluate(hand: &Hand) -> Evaluation {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    // Build the analysis once (sorted cards, rank groups, flush/straight
    // info, tie-break suit) and let the first matching detector classify.
    let analysis = HandAnalysis::new(hand.cards());
    for detector in DETECTORS.iter() {
        if detector.matches(&analysis) {
            return analysis.finish(detector.key(&analysis));
        }
    }

    // Unreachable: the high-card detector always matches.
    unreachable!("high-card detector always matches")
}

/// Validate a card slice as a hand, then evaluate it.
/// Fails fast with [`EvalError::InvalidHand`] before any classification.
pub fn evaluate_cards(cards: &[Card]) -> Result<Evaluation, EvalError> {
    let hand = Hand::from_slice(cards)?;
    Ok(evaluate(&hand))
}

/// Evaluate a hand given as deck identifiers (0..52).
///
/// ```
/// use draw_poker::evaluator::{evaluate_ids, Category};
///
/// // Spade A, Heart A, Diamond A, Club A, Spade 2
/// let eval = evaluate_ids(&[12, 25, 38, 51, 0]).unwrap();
/// assert_eq!(eval.category, Category::FourOfAKind);
/// ```
pub fn evaluate_ids(ids: &[u8]) -> Result<Evaluation, EvalError> {
    let hand = Hand::from_ids(ids)?;
    Ok(evaluate(&hand))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn eval(s: &str) -> Evaluation {
        evaluate(&s.parse::<Hand>().expect("valid hand"))
    }

    #[test]
    fn score_orders_by_category_first() {
        let pair = eval("As Ah 9d 7c 2s");
        let straight = eval("2s 3h 4d 5c 6s");
        let flush = eval("Kh Th 8h 6h 3h");
        assert!(straight > pair);
        assert!(flush > straight);
    }

    #[test]
    fn king_high_spade_flush_beats_king_high_heart_flush() {
        let spades = eval("Ks Qs Js 7s 2s");
        let hearts = eval("Kh Qh Jh 7h 2h");
        assert_eq!(spades.category, Category::Flush);
        assert_eq!(hearts.category, Category::Flush);
        assert!(spades > hearts);
    }

    #[test]
    fn suit_field_is_more_significant_than_second_kicker() {
        // Two pair, identical pairs; hand A has the stronger suit, hand B
        // the stronger kicker. The house rule lets the suit decide.
        let a = eval("As Ah Kd Kc 2c");
        let b = eval("Ad Ac Kh Kd Qd");
        assert_eq!(a.category, Category::TwoPair);
        assert_eq!(b.category, Category::TwoPair);
        assert_eq!(a.tiebreak_suit, Suit::Spades);
        assert_eq!(b.tiebreak_suit, Suit::Hearts);
        // b's Queen kicker beats a's Two, but the suit is compared first.
        assert!(a > b);
    }

    #[test]
    fn equal_scores_mean_equal_category_keys_and_suit() {
        let a = eval("As Ah 9d 7c 2s");
        let b = eval("As Ah 9d 7c 2s");
        assert_eq!(a, b);
        assert_eq!(a.score().raw(), b.score().raw());
    }

    #[test]
    fn evaluation_exposes_primary_and_kickers() {
        let quads = eval("As Ah Ad Ac 2s");
        assert_eq!(quads.primary, Rank::Ace);
        assert_eq!(quads.kickers(), &[Rank::Two]);

        let straight = eval("2s 3h 4d 5c 6s");
        assert_eq!(straight.primary, Rank::Six);
        assert!(straight.kickers().is_empty());
    }

    #[test]
    fn invalid_input_is_rejected_before_classification() {
        assert!(matches!(
            evaluate_ids(&[0, 0, 1, 2, 3]),
            Err(EvalError::InvalidHand(_))
        ));
        assert!(matches!(evaluate_ids(&[0, 1, 2]), Err(EvalError::InvalidHand(_))));
        assert!(matches!(
            evaluate_cards(&[]),
            Err(EvalError::InvalidHand(HandError::CardCount(0)))
        ));
    }
}
