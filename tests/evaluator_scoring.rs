use draw_poker::cards::Suit;
use draw_poker::evaluator::{evaluate, Category, Evaluation};
use draw_poker::hand::Hand;

fn eval(s: &str) -> Evaluation {
    evaluate(&s.parse::<Hand>().expect("valid hand"))
}

#[test]
fn category_always_dominates_within_category_keys() {
    // The weakest hand of a category beats the strongest of the one below.
    let weakest_pair = eval("2s 2h 5d 4c 3d");
    let strongest_high_card = eval("Ah Kc Qd Jh 9c");
    assert!(weakest_pair > strongest_high_card);

    let weakest_straight = eval("Ah 2s 3d 4c 5h");
    let strongest_trips = eval("Ac Ad Ah Ks Qc");
    assert!(weakest_straight > strongest_trips);

    let weakest_flush = eval("7c 5c 4c 3c 2c");
    let strongest_straight = eval("As Kh Qd Jc Ts");
    assert!(weakest_flush > strongest_straight);
}

#[test]
fn primary_rank_decides_before_the_suit() {
    // A nine-high club flush beats an eight-high spade flush even though
    // spades outrank clubs: the primary key is compared first.
    let nine_high_clubs = eval("9c 7c 5c 4c 2c");
    let eight_high_spades = eval("8s 7s 5s 4s 2s");
    assert_eq!(nine_high_clubs.category, Category::Flush);
    assert_eq!(eight_high_spades.category, Category::Flush);
    assert!(nine_high_clubs > eight_high_spades);
}

#[test]
fn suit_decides_between_equal_primary_keys() {
    let pair_hearts = eval("8h 8d 6c 5c 3c");
    let pair_clubs = eval("8s 8c 6d 5d 3d");
    assert_eq!(pair_hearts.tiebreak_suit, Suit::Hearts);
    assert_eq!(pair_clubs.tiebreak_suit, Suit::Spades);
    // Equal pair of eights: the 8s in the second hand supplies a spade,
    // so it wins even with identical kicker ranks.
    assert!(pair_clubs > pair_hearts);
}

#[test]
fn suit_outweighs_later_kickers() {
    // Both hands pair kings. The first has top suit Spades and a weak
    // kicker run; the second has better kickers but only Hearts. The
    // suit slot sits above the kickers, so the first hand wins.
    let spade_weak_kickers = eval("Ks Kh 4d 3c 2c");
    let heart_strong_kickers = eval("Kd Kc Ah Qh Jh");
    assert_eq!(spade_weak_kickers.category, Category::OnePair);
    assert_eq!(heart_strong_kickers.category, Category::OnePair);
    assert!(spade_weak_kickers > heart_strong_kickers);
}

#[test]
fn scores_are_equal_only_for_fully_equal_keys() {
    // Disjoint nine-high straights, both with a spade on top.
    let a = eval("9s 8h 7d 6c 5c");
    let b = eval("9d 8d 7h 6h 5s");
    assert_eq!(a, b);
    assert_eq!(a.score().raw(), b.score().raw());

    // Same straight but without a spade anywhere ranks below.
    let c = eval("9h 8c 7c 6d 5d");
    assert!(c < a);
}

#[test]
fn raw_scores_match_the_documented_packing() {
    // Quad aces, deuce kicker, spade present:
    // category 8, primary 14 (Ace), suit 3 (Spades), kicker1 2.
    let e = eval("As Ah Ad Ac 2s");
    let expected: u64 = (8u64 << 48) | (14u64 << 42) | (3u64 << 36) | (2u64 << 30);
    assert_eq!(e.score().raw(), expected);
}

#[test]
fn score_ordering_agrees_with_evaluation_ordering() {
    let hands = [
        "Ks 5h 4d 3c 2s",
        "Ts Tc Ah 6s 2d",
        "Qc Qd 5h 5s 9c",
        "7c 7d 7h Ks 2c",
        "Ah 2s 3d 4c 5h",
        "Kh Th 8h 6h 3h",
        "3c 3d 3h Js Jc",
        "9c 9d 9h 9s Ac",
        "As Ks Qs Js Ts",
    ];
    let evals: Vec<Evaluation> = hands.iter().map(|s| eval(s)).collect();
    for w in evals.windows(2) {
        assert!(w[1] > w[0]);
        assert!(w[1].score().raw() > w[0].score().raw());
    }
}
