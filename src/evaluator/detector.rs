use super::hand_analysis::{CategoryKey, HandAnalysis};
use crate::evaluator::Category;

/// A single category test. Detectors are consulted in strength order;
/// the first match wins, so each `matches` only needs to recognize its
/// own pattern, not exclude stronger ones.
pub trait CategoryDetector: Sync {
    fn matches(&self, analysis: &HandAnalysis) -> bool;
    /// Within-category key. Only called when `matches` returned true.
    fn key(&self, analysis: &HandAnalysis) -> CategoryKey;
}

/// Detectors in decreasing category strength. The high-card detector is
/// last and matches everything, so lookup always terminates.
pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.suit_info.is_flush && a.straight_info.is_straight
    }

    fn key(&self, a: &HandAnalysis) -> CategoryKey {
        let high = a.straight_info.high.unwrap_or(a.ranks_desc[0]);
        CategoryKey::new(Category::StraightFlush, high, &[])
    }
}

pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.rank_groups.quad().is_some()
    }

    fn key(&self, a: &HandAnalysis) -> CategoryKey {
        let quad = a.rank_groups.quad().unwrap_or(a.ranks_desc[0]);
        CategoryKey::new(Category::FourOfAKind, quad, &a.rank_groups.singles())
    }
}

pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.rank_groups.is_full_house()
    }

    fn key(&self, a: &HandAnalysis) -> CategoryKey {
        let trips = a.rank_groups.trips().unwrap_or(a.ranks_desc[0]);
        CategoryKey::new(Category::FullHouse, trips, &a.rank_groups.pairs())
    }
}

pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.suit_info.is_flush
    }

    fn key(&self, a: &HandAnalysis) -> CategoryKey {
        CategoryKey::new(Category::Flush, a.ranks_desc[0], &a.ranks_desc[1..])
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.straight_info.is_straight
    }

    fn key(&self, a: &HandAnalysis) -> CategoryKey {
        let high = a.straight_info.high.unwrap_or(a.ranks_desc[0]);
        CategoryKey::new(Category::Straight, high, &[])
    }
}

pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.rank_groups.trips().is_some()
    }

    fn key(&self, a: &HandAnalysis) -> CategoryKey {
        let trips = a.rank_groups.trips().unwrap_or(a.ranks_desc[0]);
        CategoryKey::new(Category::ThreeOfAKind, trips, &a.rank_groups.singles())
    }
}

pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.rank_groups.pairs().len() == 2
    }

    fn key(&self, a: &HandAnalysis) -> CategoryKey {
        // pairs() is sorted high first.
        let pairs = a.rank_groups.pairs();
        let mut kickers = vec![pairs[1]];
        kickers.extend(a.rank_groups.singles());
        CategoryKey::new(Category::TwoPair, pairs[0], &kickers)
    }
}

pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn matches(&self, a: &HandAnalysis) -> bool {
        a.rank_groups.pairs().len() == 1
    }

    fn key(&self, a: &HandAnalysis) -> CategoryKey {
        let pair = a.rank_groups.pairs().first().copied().unwrap_or(a.ranks_desc[0]);
        CategoryKey::new(Category::OnePair, pair, &a.rank_groups.singles())
    }
}

pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn matches(&self, _a: &HandAnalysis) -> bool {
        true
    }

    fn key(&self, a: &HandAnalysis) -> CategoryKey {
        CategoryKey::new(Category::HighCard, a.ranks_desc[0], &a.ranks_desc[1..])
    }
}
