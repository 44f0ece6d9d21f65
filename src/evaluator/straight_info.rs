use crate::cards::Rank;
use crate::hand::HAND_SIZE;

/// Whether a hand forms a straight, and its high card if so.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub high: Option<Rank>,
}

impl StraightInfo {
    /// Detect a straight in five ranks: five distinct consecutive ranks,
    /// or the wheel A-2-3-4-5 whose high card counts as Five.
    pub fn detect(ranks: &[Rank; HAND_SIZE]) -> Self {
        let mut sorted = *ranks;
        sorted.sort_by(|a, b| b.cmp(a));

        let consecutive = (0..HAND_SIZE - 1)
            .all(|i| sorted[i].value() == sorted[i + 1].value() + 1);
        if consecutive {
            return StraightInfo { is_straight: true, high: Some(sorted[0]) };
        }

        // Wheel: Ace plays low, Five is the high card.
        if sorted == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two] {
            return StraightInfo { is_straight: true, high: Some(Rank::Five) };
        }

        StraightInfo { is_straight: false, high: None }
    }
}
