use crate::game::{Game, MAX_PLAYERS, MIN_PLAYERS};

use super::AppState;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Players,
    StartingStack,
    BetStep,
}

const MENU_ITEMS: [MenuItem; 3] = [MenuItem::Players, MenuItem::StartingStack, MenuItem::BetStep];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Players => format!("Players: {}", app.cfg_num_players),
            MenuItem::StartingStack => format!("Starting Stack: ${}", app.cfg_starting_stack),
            MenuItem::BetStep => format!("Bet Step: {}", app.cfg_bet_step),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Players => {
                if app.cfg_num_players < MAX_PLAYERS {
                    app.cfg_num_players += 1;
                }
            }
            MenuItem::StartingStack => {
                app.cfg_starting_stack = app.cfg_starting_stack.saturating_add(100);
            }
            MenuItem::BetStep => {
                app.cfg_bet_step = app.cfg_bet_step.saturating_add(5);
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Players => {
                if app.cfg_num_players > MIN_PLAYERS {
                    app.cfg_num_players -= 1;
                }
            }
            MenuItem::StartingStack => {
                app.cfg_starting_stack = app.cfg_starting_stack.saturating_sub(100).max(100);
            }
            MenuItem::BetStep => {
                app.cfg_bet_step = app.cfg_bet_step.saturating_sub(5).max(1);
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.scene = match self.scene {
            super::Scene::Menu => super::Scene::Table,
            _ => {
                self.open_menu();
                super::Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.menu_index = 0;
        self.cfg_num_players = self.game.players().len();
        self.cfg_starting_stack = self.game.starting_stack();
        self.cfg_bet_step = self.bet_step;
        self.scene = super::Scene::Menu;
    }

    pub fn apply_menu(&mut self) {
        // Ensure invariants
        self.cfg_num_players = self.cfg_num_players.clamp(MIN_PLAYERS, MAX_PLAYERS);
        if self.cfg_bet_step == 0 {
            self.cfg_bet_step = 1;
        }

        self.bet_step = self.cfg_bet_step;
        self.game = Game::new(self.cfg_num_players, self.cfg_starting_stack);
        self.focus = 0;
        self.round_started = false;
        self.scene = super::Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = super::Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
