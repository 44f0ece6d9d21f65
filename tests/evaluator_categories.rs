use draw_poker::cards::{Card, Rank, Suit};
use draw_poker::evaluator::{evaluate_cards, evaluate_ids, Category};

#[test]
fn category_straight_flush() {
    let sf = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Queen, Suit::Spades),
        Card::new(Rank::Jack, Suit::Spades),
        Card::new(Rank::Ten, Suit::Spades),
    ];
    let e = evaluate_cards(&sf).unwrap();
    assert!(matches!(e.category, Category::StraightFlush));
    assert_eq!(e.primary, Rank::Ace);
}

#[test]
fn category_four_of_a_kind() {
    let xs = [
        Card::new(Rank::Nine, Suit::Clubs),
        Card::new(Rank::Nine, Suit::Diamonds),
        Card::new(Rank::Nine, Suit::Hearts),
        Card::new(Rank::Nine, Suit::Spades),
        Card::new(Rank::Ace, Suit::Clubs),
    ];
    let e = evaluate_cards(&xs).unwrap();
    assert!(matches!(e.category, Category::FourOfAKind));
    assert_eq!(e.primary, Rank::Nine);
    assert_eq!(e.kickers(), &[Rank::Ace]);
}

#[test]
fn category_full_house() {
    let xs = [
        Card::new(Rank::Three, Suit::Clubs),
        Card::new(Rank::Three, Suit::Diamonds),
        Card::new(Rank::Three, Suit::Hearts),
        Card::new(Rank::Jack, Suit::Spades),
        Card::new(Rank::Jack, Suit::Clubs),
    ];
    let e = evaluate_cards(&xs).unwrap();
    assert!(matches!(e.category, Category::FullHouse));
    assert_eq!(e.primary, Rank::Three);
    assert_eq!(e.kickers(), &[Rank::Jack]);
}

#[test]
fn category_flush() {
    let xs = [
        Card::new(Rank::King, Suit::Hearts),
        Card::new(Rank::Ten, Suit::Hearts),
        Card::new(Rank::Eight, Suit::Hearts),
        Card::new(Rank::Six, Suit::Hearts),
        Card::new(Rank::Three, Suit::Hearts),
    ];
    let e = evaluate_cards(&xs).unwrap();
    assert!(matches!(e.category, Category::Flush));
    assert_eq!(e.primary, Rank::King);
    assert_eq!(e.kickers(), &[Rank::Ten, Rank::Eight, Rank::Six, Rank::Three]);
}

#[test]
fn category_straight_with_wheel() {
    let xs = [
        Card::new(Rank::Ace, Suit::Clubs),
        Card::new(Rank::Five, Suit::Diamonds),
        Card::new(Rank::Four, Suit::Hearts),
        Card::new(Rank::Three, Suit::Spades),
        Card::new(Rank::Two, Suit::Clubs),
    ];
    let e = evaluate_cards(&xs).unwrap();
    assert!(matches!(e.category, Category::Straight));
    assert_eq!(e.primary, Rank::Five);
    assert!(e.kickers().is_empty());
}

#[test]
fn category_three_of_a_kind() {
    let xs = [
        Card::new(Rank::Seven, Suit::Clubs),
        Card::new(Rank::Seven, Suit::Diamonds),
        Card::new(Rank::Seven, Suit::Hearts),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Two, Suit::Clubs),
    ];
    let e = evaluate_cards(&xs).unwrap();
    assert!(matches!(e.category, Category::ThreeOfAKind));
    assert_eq!(e.primary, Rank::Seven);
    assert_eq!(e.kickers(), &[Rank::King, Rank::Two]);
}

#[test]
fn category_two_pair() {
    let xs = [
        Card::new(Rank::Queen, Suit::Clubs),
        Card::new(Rank::Queen, Suit::Diamonds),
        Card::new(Rank::Five, Suit::Hearts),
        Card::new(Rank::Five, Suit::Spades),
        Card::new(Rank::Nine, Suit::Clubs),
    ];
    let e = evaluate_cards(&xs).unwrap();
    assert!(matches!(e.category, Category::TwoPair));
    assert_eq!(e.primary, Rank::Queen);
    assert_eq!(e.kickers(), &[Rank::Five, Rank::Nine]);
}

#[test]
fn category_one_pair() {
    let xs = [
        Card::new(Rank::Ten, Suit::Clubs),
        Card::new(Rank::Ten, Suit::Diamonds),
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::Six, Suit::Spades),
        Card::new(Rank::Two, Suit::Clubs),
    ];
    let e = evaluate_cards(&xs).unwrap();
    assert!(matches!(e.category, Category::OnePair));
    assert_eq!(e.primary, Rank::Ten);
    assert_eq!(e.kickers(), &[Rank::Ace, Rank::Six, Rank::Two]);
}

#[test]
fn category_high_card() {
    let xs = [
        Card::new(Rank::King, Suit::Clubs),
        Card::new(Rank::Five, Suit::Diamonds),
        Card::new(Rank::Four, Suit::Hearts),
        Card::new(Rank::Three, Suit::Spades),
        Card::new(Rank::Two, Suit::Clubs),
    ];
    let e = evaluate_cards(&xs).unwrap();
    assert!(matches!(e.category, Category::HighCard));
    assert_eq!(e.primary, Rank::King);
    assert_eq!(e.kickers(), &[Rank::Five, Rank::Four, Rank::Three, Rank::Two]);
}

// Scenarios phrased directly in deck identifiers (suit * 13 + rank).

#[test]
fn id_spade_straight_flush_beats_heart_straight_flush() {
    // Spades 2..6 vs Hearts 2..6: same six-high straight flush, the
    // spade hand wins on the suit tie-break.
    let spades = evaluate_ids(&[0, 1, 2, 3, 4]).unwrap();
    let hearts = evaluate_ids(&[13, 14, 15, 16, 17]).unwrap();
    assert!(matches!(spades.category, Category::StraightFlush));
    assert!(matches!(hearts.category, Category::StraightFlush));
    assert_eq!(spades.primary, Rank::Six);
    assert_eq!(hearts.primary, Rank::Six);
    assert!(spades > hearts);
}

#[test]
fn id_quad_aces_with_deuce_kicker() {
    // All four aces (ids 12, 25, 38, 51) plus the two of spades (id 0).
    let e = evaluate_ids(&[12, 25, 38, 51, 0]).unwrap();
    assert!(matches!(e.category, Category::FourOfAKind));
    assert_eq!(e.primary, Rank::Ace);
    assert_eq!(e.kickers(), &[Rank::Two]);
    assert_eq!(e.tiebreak_suit, Suit::Spades);
}

#[test]
fn id_twos_full_of_threes() {
    // 2s, 2h, 2d, 3s, 3h
    let e = evaluate_ids(&[0, 13, 26, 1, 14]).unwrap();
    assert!(matches!(e.category, Category::FullHouse));
    assert_eq!(e.primary, Rank::Two);
    assert_eq!(e.kickers(), &[Rank::Three]);
}

#[test]
fn id_wheel_straight_flush_is_the_lowest_straight_flush() {
    // As, 2s, 3s, 4s, 5s
    let wheel = evaluate_ids(&[12, 0, 1, 2, 3]).unwrap();
    assert!(matches!(wheel.category, Category::StraightFlush));
    assert_eq!(wheel.primary, Rank::Five);
    // Six-high straight flush in clubs still beats the spade wheel.
    let six_high_clubs = evaluate_ids(&[39, 40, 41, 42, 43]).unwrap();
    assert!(six_high_clubs > wheel);
    // And the flush wheel beats the same wheel with a heart mixed in.
    let plain_wheel = evaluate_ids(&[12, 0, 14, 2, 3]).unwrap();
    assert!(matches!(plain_wheel.category, Category::Straight));
    assert!(wheel > plain_wheel);
}

#[test]
fn id_king_high_hand_is_high_card() {
    // 2s, 3h, 4d, 5c, Ks: no flush, no straight (2..5 plus a king).
    let e = evaluate_ids(&[0, 14, 28, 42, 11]).unwrap();
    assert!(matches!(e.category, Category::HighCard));
    assert_eq!(e.primary, Rank::King);
    assert_eq!(e.kickers(), &[Rank::Five, Rank::Four, Rank::Three, Rank::Two]);
}
