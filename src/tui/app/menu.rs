use crate::table::{Table, TableConfig};

use super::{AppState, Scene};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Players,
    Replacements,
}

const MENU_ITEMS: [MenuItem; 2] = [MenuItem::Players, MenuItem::Replacements];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Players => format!("Players: {}", app.cfg_players),
            MenuItem::Replacements => {
                format!("Replacements per round: {}", app.cfg_max_replacements)
            }
        }
    }

    // Changes that would not fit in one deck are ignored.
    fn inc(self, app: &mut AppState) {
        let mut cfg = app.proposed_config();
        match self {
            MenuItem::Players => cfg.players += 1,
            MenuItem::Replacements => cfg.max_replacements += 1,
        }
        if cfg.validate().is_ok() {
            app.cfg_players = cfg.players;
            app.cfg_max_replacements = cfg.max_replacements;
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Players => {
                if app.cfg_players > 2 {
                    app.cfg_players -= 1;
                }
            }
            MenuItem::Replacements => {
                app.cfg_max_replacements = app.cfg_max_replacements.saturating_sub(1);
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    fn proposed_config(&self) -> TableConfig {
        TableConfig {
            players: self.cfg_players,
            max_replacements: self.cfg_max_replacements,
            ..*self.table.config()
        }
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.scene = match self.scene {
            Scene::Menu => Scene::Table,
            _ => {
                self.open_menu();
                Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.menu_index = 0;
        self.cfg_players = self.table.num_players();
        self.cfg_max_replacements = self.table.config().max_replacements;
        self.scene = Scene::Menu;
    }

    /// Start a fresh session with the edited settings. Balances reset.
    pub fn apply_menu(&mut self) {
        match Table::new(self.proposed_config()) {
            Ok(table) => {
                log::info!(
                    "new session: {} players, {} replacements",
                    self.cfg_players,
                    self.cfg_max_replacements
                );
                self.table = table;
                self.scene = Scene::Table;
            }
            Err(err) => log::warn!("menu settings rejected: {err}"),
        }
    }

    pub fn cancel_menu(&mut self) {
        self.scene = Scene::Table;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_refuses_configs_that_overdraw_the_deck() {
        let mut app = AppState::default();
        for _ in 0..20 {
            app.menu_inc();
        }
        // 4 (5 + 2) = 28 fits, 8 (5 + 2) = 56 does not
        assert_eq!(app.cfg_players, 7);
        assert!(app.proposed_config().validate().is_ok());
    }

    #[test]
    fn players_never_drop_below_two() {
        let mut app = AppState::default();
        for _ in 0..10 {
            app.menu_dec();
        }
        assert_eq!(app.cfg_players, 2);
    }

    #[test]
    fn apply_builds_a_new_table() {
        let mut app = AppState::default();
        app.menu_next();
        app.menu_dec();
        app.apply_menu();
        assert_eq!(app.scene, Scene::Table);
        assert_eq!(app.table.config().max_replacements, 1);
        assert_eq!(app.table.num_players(), 4);
    }
}
