use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, Evaluation, Score};
use crate::hand::HAND_SIZE;

/// Structured within-category key produced by a detector: the category,
/// its primary rank, and the ordered secondary kickers.
#[derive(Debug, Clone, Copy)]
pub struct CategoryKey {
    pub category: Category,
    pub primary: Rank,
    kickers: [Rank; 4],
    kicker_len: u8,
}

impl CategoryKey {
    pub fn new(category: Category, primary: Rank, kickers: &[Rank]) -> Self {
        debug_assert!(kickers.len() <= 4);
        let mut ks = [Rank::Two; 4];
        let n = kickers.len().min(4);
        ks[..n].copy_from_slice(&kickers[..n]);
        Self { category, primary, kickers: ks, kicker_len: n as u8 }
    }

    pub fn kickers(&self) -> &[Rank] {
        &self.kickers[..self.kicker_len as usize]
    }
}

/// Pre-computed analysis of a five-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub sorted_cards: [Card; HAND_SIZE],
    pub ranks_desc: [Rank; HAND_SIZE],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; HAND_SIZE]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));
        let ranks_desc = sorted_cards.map(|c| c.rank());

        let rank_groups = RankGroups::new(&ranks_desc);
        let suit_info = SuitInfo::detect(&sorted_cards);
        let straight_info = StraightInfo::detect(&ranks_desc);

        Self { sorted_cards, ranks_desc, rank_groups, suit_info, straight_info }
    }

    /// Fold a detector's key together with the tie-break suit into the
    /// final packed evaluation.
    pub fn finish(&self, key: CategoryKey) -> Evaluation {
        let score = Score::from_parts(key.category, key.primary, self.suit_info.tiebreak, key.kickers());
        Evaluation {
            category: key.category,
            primary: key.primary,
            tiebreak_suit: self.suit_info.tiebreak,
            sorted_cards: self.sorted_cards,
            kickers: {
                let mut ks = [Rank::Two; 4];
                ks[..key.kickers().len()].copy_from_slice(key.kickers());
                ks
            },
            kicker_len: key.kickers().len() as u8,
            score,
        }
    }
}
