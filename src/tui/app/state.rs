use crate::table::{ActionError, ConfigError, Phase, Table, TableConfig};
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
    /// Replace the card at this 0-based position of the acting player's hand.
    Replace(usize),
    Stand,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub table: Table,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_players: usize,
    pub cfg_max_replacements: usize,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_table(Table::default())
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    /// Start in the menu with `config` as the proposed table.
    pub fn with_config(config: TableConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_table(Table::new(config)?))
    }

    fn from_table(table: Table) -> Self {
        let config = *table.config();
        Self {
            scene: Scene::Menu,
            table,
            menu_index: 0,
            cfg_players: config.players,
            cfg_max_replacements: config.max_replacements,
            help_open: false,
            history_open: false,
            history_offset: 0,
            action_error: None,
            action_error_at: None,
        }
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    fn set_action_error(&mut self, err: ActionError) {
        log::debug!("rejected action: {err}");
        self.action_error = Some(err.to_string());
        self.action_error_at = Some(Instant::now());
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    /// Drop an error message once it has been on screen long enough.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
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

    /// Whether the cards of `seat` may be shown. During the draw only the
    /// acting player looks at their hand; everything is open at showdown.
    pub fn reveals(&self, seat: usize) -> bool {
        match self.table.phase() {
            Phase::Drawing => seat == self.table.current(),
            Phase::Showdown | Phase::GameOver => true,
            _ => false,
        }
    }

    fn apply_result<T>(&mut self, result: Result<T, ActionError>) -> bool {
        match result {
            Ok(_) => {
                self.clear_action_error();
                true
            }
            Err(err) => {
                self.set_action_error(err);
                false
            }
        }
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
                        self.table.history_len().saturating_sub(Self::HISTORY_PAGE_SIZE);
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
                if self.scene != Scene::Table {
                    return false;
                }
                self.history_offset = 0;
                let result = self.table.new_round();
                self.apply_result(result)
            }
            InputAction::Replace(position) => {
                if self.scene != Scene::Table {
                    return false;
                }
                let seat = self.table.current();
                let result = self.table.replace(seat, position);
                self.apply_result(result)
            }
            InputAction::Stand => {
                if self.scene != Scene::Table {
                    return false;
                }
                let seat = self.table.current();
                let result = self.table.stand(seat);
                self.apply_result(result)
            }
        }
    }
}
