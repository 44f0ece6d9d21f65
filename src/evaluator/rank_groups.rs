use crate::cards::Rank;
use crate::hand::HAND_SIZE;

/// Ranks grouped by their frequency in a hand, sorted by
/// (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)], so the
/// count multiset [3, 1, 1] and the ordered keys fall out directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    pub fn new(ranks: &[Rank; HAND_SIZE]) -> Self {
        let mut counts = [0u8; 15]; // indexed by rank value 2..=14
        for r in ranks {
            counts[r.value() as usize] += 1;
        }
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .filter_map(|&r| {
                let c = counts[r.value() as usize];
                (c > 0).then_some((r, c))
            })
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        Self { groups }
    }

    /// Rank of a four-of-a-kind, if present.
    pub fn quad(&self) -> Option<Rank> {
        self.rank_with_count(4)
    }

    /// Rank of a three-of-a-kind, if present.
    pub fn trips(&self) -> Option<Rank> {
        self.rank_with_count(3)
    }

    /// All pair ranks, in descending order.
    pub fn pairs(&self) -> Vec<Rank> {
        self.groups.iter().filter(|(_, c)| *c == 2).map(|(r, _)| *r).collect()
    }

    /// All singleton (kicker) ranks, in descending order.
    pub fn singles(&self) -> Vec<Rank> {
        self.groups.iter().filter(|(_, c)| *c == 1).map(|(r, _)| *r).collect()
    }

    /// True for the [3, 2] count multiset.
    pub fn is_full_house(&self) -> bool {
        self.trips().is_some() && !self.pairs().is_empty()
    }

    fn rank_with_count(&self, count: u8) -> Option<Rank> {
        self.groups.iter().find(|(_, c)| *c == count).map(|(r, _)| *r)
    }
}
