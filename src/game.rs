use crate::cards::Card;
use crate::deck::Deck;
use crate::evaluator::{evaluate_cards, Category, Evaluation};
use rand::Rng;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 8;

/// Cards dealt face down at the start of a round.
pub const DEAL_CARDS: usize = 2;
/// Face-up extras dealt during the draw phase.
pub const DRAW_EXTRAS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayerStatus {
    Active,
    Busted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    Draw,
    Betting,
    Showdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundLogVerb {
    Swap,
    Keep,
    Bet,
    Win,
    Split,
}

impl RoundLogVerb {
    pub fn label(self) -> &'static str {
        match self {
            RoundLogVerb::Swap => "Swap",
            RoundLogVerb::Keep => "Keep",
            RoundLogVerb::Bet => "Bet",
            RoundLogVerb::Win => "Win",
            RoundLogVerb::Split => "Split",
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("cannot act during showdown")]
    Showdown,
    #[error("action does not belong to the current phase")]
    WrongPhase,
    #[error("player is not active")]
    PlayerNotActive,
    #[error("swap slot out of range: {0} (valid 0..{DRAW_EXTRAS})")]
    SwapIndexOutOfRange(usize),
    #[error("amount too large: max {max}, got {got}")]
    AmountTooLarge { max: u64, got: u64 },
    #[error("deck is exhausted")]
    DeckExhausted,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShowdownError {
    #[error("hand evaluation failed: {0}")]
    EvaluationFailed(String),
    #[error("invalid game state: {0}")]
    InvalidState(String),
}

/// One line of the round history overlay. For swaps the amount is the
/// 1-based slot that was exchanged; for bets and wins it is chips.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundLogEntry {
    pub seat: usize,
    pub verb: RoundLogVerb,
    pub amount: Option<u64>,
    pub phase: Phase,
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) stack: u64,
    pub(crate) bet: u64,
    pub(crate) status: PlayerStatus,
    pub(crate) cards: Vec<Card>,
    pub(crate) last_action: Option<String>,
}

impl Player {
    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's current stack
    pub fn stack(&self) -> u64 {
        self.stack
    }

    /// Returns the player's bet for the current round
    pub fn bet(&self) -> u64 {
        self.bet
    }

    /// Returns the player's status
    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    /// Returns the player's cards: two dealt cards followed by up to
    /// three drawn extras.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the face-up extras (empty until the player's draw turn).
    pub fn extras(&self) -> &[Card] {
        if self.cards.len() > DEAL_CARDS {
            &self.cards[DEAL_CARDS..]
        } else {
            &[]
        }
    }

    /// Returns the player's last action as a string
    pub fn last_action(&self) -> Option<&str> {
        self.last_action.as_deref()
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub struct Game {
    pub(crate) starting_stack: u64,

    pub(crate) deck: Deck,
    pub(crate) players: Vec<Player>,
    pub(crate) pot: u64,
    pub(crate) dealer: usize,
    pub(crate) current: usize,
    pub(crate) phase: Phase,
    pub(crate) round_starter: usize,

    /// Winners of the last completed round (seat indices in table order)
    pub(crate) winners: Vec<usize>,
    /// Showdown categories for each player in the last round (None if absent)
    pub(crate) showdown_categories: Vec<Option<Category>>,
    round_log: Vec<RoundLogEntry>,
}

impl Game {
    pub fn new(num_players: usize, starting_stack: u64) -> Self {
        let n = num_players.clamp(MIN_PLAYERS, MAX_PLAYERS);
        let players = (1..=n)
            .map(|i| Player {
                name: format!("P{i}"),
                stack: starting_stack,
                bet: 0,
                status: PlayerStatus::Active,
                cards: Vec::new(),
                last_action: None,
            })
            .collect();
        Self {
            starting_stack,
            deck: Deck::standard(),
            players,
            pot: 0,
            dealer: 0,
            current: 0,
            phase: Phase::Showdown,
            round_starter: 0,
            winners: Vec::new(),
            showdown_categories: vec![None; n],
            round_log: Vec::new(),
        }
    }

    /// Returns the starting stack amount
    pub fn starting_stack(&self) -> u64 {
        self.starting_stack
    }

    /// Returns a reference to the players
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the current pot size
    pub fn pot(&self) -> u64 {
        self.pot
    }

    /// Returns the dealer position
    pub fn dealer(&self) -> usize {
        self.dealer
    }

    /// Returns the current player index
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns the current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the winners of the last completed round
    pub fn winners(&self) -> &[usize] {
        &self.winners
    }

    /// Returns the showdown categories for each player
    pub fn showdown_categories(&self) -> &[Option<Category>] {
        &self.showdown_categories
    }

    pub fn history_recent(&self, n: usize) -> Vec<RoundLogEntry> {
        if n == 0 {
            return Vec::new();
        }
        let len = self.round_log.len();
        let start = len.saturating_sub(n);
        self.round_log[start..].to_vec()
    }

    pub fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<RoundLogEntry> {
        if n == 0 {
            return Vec::new();
        }
        let len = self.round_log.len();
        if len == 0 {
            return Vec::new();
        }
        let max_offset = len.saturating_sub(n);
        let offset = offset.min(max_offset);
        let end = len.saturating_sub(offset);
        let start = end.saturating_sub(n);
        self.round_log[start..end].to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.round_log.len()
    }

    /// Start a fresh round: rotate the dealer, reshuffle, deal two cards
    /// to each seated player and open the draw phase with the seat left
    /// of the dealer, who immediately receives the three extras.
    pub fn new_round(&mut self) {
        self.advance_dealer();
        self.reset_round_state();
        self.reset_players_for_new_round();
        self.align_dealer_to_eligible();
        self.winners.clear();
        self.showdown_categories = vec![None; self.players.len()];

        if self.count_eligible() < MIN_PLAYERS {
            // Game over: not enough funded players to play a round.
            self.phase = Phase::Showdown;
            return;
        }

        self.deal_initial_cards();
        self.phase = Phase::Draw;
        self.current = self.next_eligible_from(self.dealer);
        self.round_starter = self.current;
        self.deal_extras_to_current();
    }

    fn advance_dealer(&mut self) {
        if !self.players.is_empty() {
            self.dealer = (self.dealer + 1) % self.players.len();
        }
    }

    fn reset_round_state(&mut self) {
        self.deck = Deck::standard();
        let seed: u64 = rand::rng().random();
        self.deck.shuffle_seeded(seed);
        self.pot = 0;
        self.round_log.clear();
        self.current = self.dealer;
        self.round_starter = self.dealer;
    }

    fn reset_players_for_new_round(&mut self) {
        for p in &mut self.players {
            p.bet = 0;
            p.cards.clear();
            p.last_action = None;
            if p.stack == 0 {
                p.status = PlayerStatus::Busted;
            } else {
                p.status = PlayerStatus::Active;
            }
        }
    }

    fn align_dealer_to_eligible(&mut self) {
        if self.players.is_empty() {
            return;
        }
        let n = self.players.len();
        let mut dealer = self.dealer;
        for _ in 0..n {
            if self.is_eligible(dealer) {
                break;
            }
            dealer = (dealer + 1) % n;
        }
        self.dealer = dealer;
    }

    fn deal_initial_cards(&mut self) {
        for p in &mut self.players {
            if matches!(p.status, PlayerStatus::Active) {
                for _ in 0..DEAL_CARDS {
                    if let Some(c) = self.deck.draw() {
                        p.cards.push(c);
                    }
                }
            }
        }
    }

    fn deal_extras_to_current(&mut self) {
        let p = &mut self.players[self.current];
        while p.cards.len() < DEAL_CARDS + DRAW_EXTRAS {
            match self.deck.draw() {
                Some(c) => p.cards.push(c),
                None => break,
            }
        }
    }

    fn is_eligible(&self, idx: usize) -> bool {
        matches!(self.players[idx].status, PlayerStatus::Active)
    }

    fn count_eligible(&self) -> usize {
        self.players.iter().filter(|p| matches!(p.status, PlayerStatus::Active)).count()
    }

    fn next_eligible_from(&self, start: usize) -> usize {
        if self.players.is_empty() {
            return 0;
        }
        let n = self.players.len();
        let mut i = (start + 1) % n;
        for _ in 0..n {
            if self.is_eligible(i) {
                return i;
            }
            i = (i + 1) % n;
        }
        // No eligible players left; keep the cursor where it is to avoid an infinite loop.
        start % n
    }

    fn ensure_can_act(&self, phase: Phase) -> Result<(), ActionError> {
        if matches!(self.phase, Phase::Showdown) {
            return Err(ActionError::Showdown);
        }
        if self.phase != phase {
            return Err(ActionError::WrongPhase);
        }
        if !self.is_eligible(self.current) {
            return Err(ActionError::PlayerNotActive);
        }
        Ok(())
    }

    /// Swap one of the three face-up extras (slot 0..3) for a fresh card.
    pub fn action_swap(&mut self, slot: usize) -> Result<(), ActionError> {
        self.ensure_can_act(Phase::Draw)?;
        if slot >= DRAW_EXTRAS {
            return Err(ActionError::SwapIndexOutOfRange(slot));
        }
        let replacement = self.deck.draw().ok_or(ActionError::DeckExhausted)?;
        let idx = self.current;
        self.players[idx].cards[DEAL_CARDS + slot] = replacement;
        self.players[idx].last_action = Some(format!("Swap {}", slot + 1));
        self.record_log(idx, RoundLogVerb::Swap, Some(slot as u64 + 1));
        self.advance_draw();
        Ok(())
    }

    /// Keep all three extras as dealt.
    pub fn action_keep(&mut self) -> Result<(), ActionError> {
        self.ensure_can_act(Phase::Draw)?;
        let idx = self.current;
        self.players[idx].last_action = Some("Keep".into());
        self.record_log(idx, RoundLogVerb::Keep, None);
        self.advance_draw();
        Ok(())
    }

    fn advance_draw(&mut self) {
        let next = self.next_eligible_from(self.current);
        if next == self.round_starter {
            // Everyone has drawn; open the betting phase at the same seat.
            self.phase = Phase::Betting;
            self.current = self.round_starter;
        } else {
            self.current = next;
            self.deal_extras_to_current();
        }
    }

    /// Commit the current player's single bet for the round, any amount
    /// up to their full stack (0 is a legal check).
    pub fn action_bet(&mut self, amount: u64) -> Result<(), ActionError> {
        self.ensure_can_act(Phase::Betting)?;
        let idx = self.current;
        let max = self.players[idx].stack;
        if amount > max {
            return Err(ActionError::AmountTooLarge { max, got: amount });
        }
        {
            let p = &mut self.players[idx];
            p.stack -= amount;
            p.bet = amount;
            p.last_action = Some(format!("Bet {amount}"));
        }
        self.pot += amount;
        self.record_log(idx, RoundLogVerb::Bet, Some(amount));

        let next = self.next_eligible_from(idx);
        if next == self.round_starter {
            self.phase = Phase::Showdown;
            let _ = self.finish_showdown();
        } else {
            self.current = next;
        }
        Ok(())
    }

    /// Showdown: evaluate every active hand, award the pot to the top
    /// score, splitting ties equally with odd chips going out in seat
    /// order from the dealer's left.
    pub fn finish_showdown(&mut self) -> Result<(), ShowdownError> {
        let n = self.players.len();
        let contenders: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| matches!(p.status, PlayerStatus::Active))
            .map(|(i, _)| i)
            .collect();
        if contenders.is_empty() {
            return Err(ShowdownError::InvalidState("no active players at showdown".into()));
        }

        let mut evals: Vec<Option<Evaluation>> = vec![None; n];
        for &i in &contenders {
            let ev = evaluate_cards(self.players[i].cards())
                .map_err(|e| ShowdownError::EvaluationFailed(format!("player {i}: {e}")))?;
            self.showdown_categories[i] = Some(ev.category);
            evals[i] = Some(ev);
        }

        let mut best = None;
        let mut winners: Vec<usize> = Vec::new();
        for &i in &contenders {
            let ev = evals[i].ok_or_else(|| {
                ShowdownError::InvalidState(format!("missing evaluation for player {i}"))
            })?;
            match best {
                Some(b) if ev > b => {
                    best = Some(ev);
                    winners.clear();
                    winners.push(i);
                }
                Some(b) if ev == b => winners.push(i),
                Some(_) => {}
                None => {
                    best = Some(ev);
                    winners.push(i);
                }
            }
        }

        // Seat order from the dealer's left decides odd chips.
        let start = (self.dealer + 1) % n;
        winners.sort_by_key(|&i| (i + n - start) % n);

        let amount = self.pot;
        let per = amount / winners.len() as u64;
        let mut rem = (amount % winners.len() as u64) as usize;
        let split = winners.len() > 1;
        for &i in &winners {
            let mut amt = per;
            if rem > 0 {
                amt += 1;
                rem -= 1;
            }
            self.players[i].stack += amt;
            self.players[i].last_action =
                Some(if split { format!("Split {amt}") } else { format!("Win {amt}") });
            let verb = if split { RoundLogVerb::Split } else { RoundLogVerb::Win };
            self.record_log(i, verb, Some(amt));
        }

        self.pot = 0;
        self.phase = Phase::Showdown;
        self.winners = winners;
        Ok(())
    }

    fn record_log(&mut self, seat: usize, verb: RoundLogVerb, amount: Option<u64>) {
        let entry = RoundLogEntry { seat, verb, amount, phase: self.phase };
        self.round_log.push(entry);
    }
}
