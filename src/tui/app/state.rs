use crate::game::{ActionError, Game, Phase};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    NewRound,
    SwapExtra(usize),
    KeepExtras,
    AmountOpen,
    AmountDigit(u8),
    AmountBackspace,
    AmountIncStep,
    AmountDecStep,
    AmountSubmit,
    AmountCancel,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub started: Instant,
    // Core game engine instance
    pub game: Game,
    // UI focus seat index; follows the acting player in hotseat play
    pub focus: usize,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_num_players: usize,
    pub cfg_starting_stack: u64,
    pub cfg_bet_step: u64,
    pub bet_step: u64,
    pub round_started: bool,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    amount_entry: Option<String>,
    amount_entry_error: Option<String>,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        let game = Game::new(4, 1000);
        Self {
            scene: Scene::Menu,
            started: Instant::now(),
            game,
            focus: 0,
            menu_index: 0,
            cfg_num_players: 4,
            cfg_starting_stack: 1000,
            cfg_bet_step: 10,
            bet_step: 10,
            round_started: false,
            help_open: false,
            history_open: false,
            history_offset: 0,
            amount_entry: None,
            amount_entry_error: None,
            action_error: None,
            action_error_at: None,
        }
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    fn can_act(&self) -> bool {
        if self.scene != Scene::Table || !self.round_started {
            return false;
        }
        !matches!(self.game.phase(), Phase::Showdown)
    }

    /// Run a game action; on success focus jumps to the next acting
    /// seat, on failure the error is shown in the status bar.
    fn apply_game_action(
        &mut self,
        act: impl FnOnce(&mut Game) -> Result<(), ActionError>,
    ) -> bool {
        if !self.can_act() {
            return false;
        }
        match act(&mut self.game) {
            Ok(()) => {
                self.clear_action_error();
                self.focus = self.game.current();
                true
            }
            Err(err) => {
                self.action_error = Some(err.to_string());
                self.action_error_at = Some(Instant::now());
                false
            }
        }
    }

    pub fn amount_entry_active(&self) -> bool {
        self.amount_entry.is_some()
    }

    pub fn amount_entry_text(&self) -> Option<&str> {
        self.amount_entry.as_deref()
    }

    pub fn amount_entry_error(&self) -> Option<&str> {
        self.amount_entry_error.as_deref()
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_history(&mut self) {
        self.history_open = false;
    }

    fn open_amount_entry(&mut self) -> bool {
        if !self.can_act() || !matches!(self.game.phase(), Phase::Betting) {
            return false;
        }
        let stack = self
            .game
            .players()
            .get(self.game.current())
            .map(|p| p.stack())
            .unwrap_or(0);
        let buf = self.bet_step.min(stack).to_string();
        self.amount_entry = Some(buf);
        self.amount_entry_error = None;
        true
    }

    fn amount_entry_backspace(&mut self) {
        if let Some(buf) = self.amount_entry.as_mut() {
            buf.pop();
        }
        self.amount_entry_error = None;
    }

    fn amount_entry_push_digit(&mut self, digit: u8) {
        if let Some(buf) = self.amount_entry.as_mut() {
            if buf.len() >= 12 {
                return;
            }
            buf.push(char::from(b'0' + digit));
        }
        self.amount_entry_error = None;
    }

    fn amount_entry_adjust_step(&mut self, delta: i64) {
        if let Some(buf) = self.amount_entry.as_mut() {
            let cur = buf.parse::<i64>().unwrap_or(0);
            let step = self.bet_step.max(1) as i64;
            let next = (cur + delta * step).max(0);
            *buf = next.to_string();
        }
        self.amount_entry_error = None;
    }

    fn amount_entry_submit(&mut self) -> bool {
        let Some(buf) = self.amount_entry.as_ref() else {
            return false;
        };
        let amount = match buf.parse::<u64>() {
            Ok(v) => v,
            Err(_) => {
                self.amount_entry_error = Some("Invalid amount".to_string());
                return false;
            }
        };
        let max = self
            .game
            .players()
            .get(self.game.current())
            .map(|p| p.stack())
            .unwrap_or(0);
        if amount > max {
            self.amount_entry_error = Some(format!("Max bet is {max}"));
            return false;
        }
        if self.apply_game_action(|g| g.action_bet(amount)) {
            self.amount_entry = None;
            self.amount_entry_error = None;
            return true;
        }
        self.amount_entry_error = Some("Action not allowed".to_string());
        false
    }

    fn amount_entry_cancel(&mut self) {
        self.amount_entry = None;
        self.amount_entry_error = None;
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.history_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Table {
                    self.help_open = false;
                    if !self.history_open {
                        self.history_offset = 0;
                    }
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.scene == Scene::Table && self.history_open {
                    let max_offset =
                        self.game.history_len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.scene == Scene::Table && self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::NewRound => {
                if self.scene == Scene::Table {
                    self.new_round();
                }
                false
            }
            InputAction::SwapExtra(slot) => self.apply_game_action(|g| g.action_swap(slot)),
            InputAction::KeepExtras => self.apply_game_action(|g| g.action_keep()),
            InputAction::AmountOpen => self.open_amount_entry(),
            InputAction::AmountDigit(d) => {
                self.amount_entry_push_digit(d);
                false
            }
            InputAction::AmountBackspace => {
                self.amount_entry_backspace();
                false
            }
            InputAction::AmountIncStep => {
                self.amount_entry_adjust_step(1);
                false
            }
            InputAction::AmountDecStep => {
                self.amount_entry_adjust_step(-1);
                false
            }
            InputAction::AmountSubmit => self.amount_entry_submit(),
            InputAction::AmountCancel => {
                self.amount_entry_cancel();
                false
            }
        }
    }

    pub fn new_round(&mut self) {
        if self.round_started && !matches!(self.game.phase(), Phase::Showdown) {
            return;
        }
        self.game.new_round();
        self.round_started = true;
        self.history_offset = 0;
        self.focus = self.game.current();
        self.clear_action_error();
    }

    /// Periodic housekeeping driven by the controller tick.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_actions_ignored_before_deal() {
        let mut app = AppState::default();
        app.apply_menu();
        assert!(!app.round_started);
        assert!(!app.handle_input(InputAction::KeepExtras));
        assert!(!app.handle_input(InputAction::SwapExtra(0)));
        assert!(!app.handle_input(InputAction::AmountOpen));
    }

    #[test]
    fn focus_follows_the_acting_seat() {
        let mut app = AppState::default();
        app.apply_menu();
        app.new_round();
        assert_eq!(app.focus, app.game.current());
        assert!(app.handle_input(InputAction::KeepExtras));
        assert_eq!(app.focus, app.game.current());
    }

    #[test]
    fn failed_action_sets_a_status_error() {
        let mut app = AppState::default();
        app.apply_menu();
        app.new_round();
        assert!(!app.handle_input(InputAction::SwapExtra(9)));
        assert!(app.action_error().is_some());
        assert!(app.handle_input(InputAction::KeepExtras));
        assert!(app.action_error().is_none());
    }
}
