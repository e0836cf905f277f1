//! Application state management for Monkeydex
//!
//! This module contains the main application state, handling keyboard input
//! and state transitions between views. Keys only queue work; the event loop
//! runs queued work through `process_pending` so the core calls can be
//! awaited outside the key handler.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::info;

use crate::cache::RecordCache;
use crate::data::Record;
use crate::stats::{summarize, Statistics};

/// Entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    ListAll,
    Search,
    Random,
    Statistics,
    ServerCheck,
    Exit,
}

/// Main menu layout; the digit shortcut of each item is its position + 1
pub const MENU_ITEMS: [MenuItem; 6] = [
    MenuItem::ListAll,
    MenuItem::Search,
    MenuItem::Random,
    MenuItem::Statistics,
    MenuItem::ServerCheck,
    MenuItem::Exit,
];

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::ListAll => "List all monkeys",
            MenuItem::Search => "Search by name",
            MenuItem::Random => "Random monkey",
            MenuItem::Statistics => "Access statistics",
            MenuItem::ServerCheck => "Check server connection",
            MenuItem::Exit => "Exit",
        }
    }
}

/// Application state enum representing the current view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Initial loading state while fetching data
    Loading,
    /// Main menu
    Menu,
    /// All records sorted by name
    RecordList,
    /// Name prompt
    Search,
    /// Detail view for one record, keyed by its stored name
    RecordDetail(String),
    /// Catalog statistics and access ranking
    Statistics,
    /// Result of the last server check
    ServerStatus,
}

/// Work queued by a key press, run by [`App::process_pending`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    LoadList,
    Lookup(String),
    Random,
    LoadStatistics,
    CheckServer,
}

/// Main application struct managing state and data
pub struct App {
    /// Current application state/view
    pub state: AppState,
    /// View to return to when leaving a detail view
    pub previous_state: AppState,
    /// Highlighted menu entry
    pub menu_index: usize,
    /// Highlighted row in the list view
    pub list_index: usize,
    /// Records shown in the list view, sorted by name
    pub records: Vec<Record>,
    /// Record shown in the detail view
    pub selected: Option<Record>,
    /// Statistics for the list and statistics views
    pub statistics: Option<Statistics>,
    /// Text typed into the search prompt
    pub search_input: String,
    /// Result of the last server check
    pub server_available: Option<bool>,
    /// One-line status message shown in the footer
    pub message: Option<String>,
    /// Work waiting for the event loop
    pub pending: Option<PendingAction>,
    /// Set while pending work is being awaited
    pub busy: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    cache: RecordCache,
}

impl App {
    /// Creates a new App around a record cache
    pub fn new(cache: RecordCache) -> Self {
        Self {
            state: AppState::Loading,
            previous_state: AppState::Menu,
            menu_index: 0,
            list_index: 0,
            records: Vec::new(),
            selected: None,
            statistics: None,
            search_input: String::new(),
            server_available: None,
            message: None,
            pending: None,
            busy: false,
            show_help: false,
            should_quit: false,
            cache,
        }
    }

    /// The record cache backing this session
    pub fn cache(&self) -> &RecordCache {
        &self.cache
    }

    /// Warms the cache and probes the server concurrently, then shows the menu
    pub async fn load_initial_data(&mut self) {
        let (records, available) =
            futures::join!(self.cache.get_all(), self.cache.is_server_available());

        info!(count = records.len(), available, "initial load finished");
        self.server_available = Some(available);
        if !available {
            self.message = Some("Server unreachable, showing built-in data".to_string());
        }
        self.state = AppState::Menu;
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Runs the queued action, if any
    pub async fn process_pending(&mut self) {
        let Some(action) = self.pending.take() else {
            return;
        };

        match action {
            PendingAction::LoadList => {
                let records = self.cache.get_all().await;
                let mut sorted = records.to_vec();
                sorted.sort_by_key(|r| r.name.to_lowercase());
                self.statistics = Some(summarize(&sorted));
                self.records = sorted;
                self.list_index = self.list_index.min(self.records.len().saturating_sub(1));
                self.state = AppState::RecordList;
            }
            PendingAction::Lookup(name) => match self.cache.get_by_name(&name).await {
                Some(record) => self.show_detail(record),
                None => {
                    self.message = Some(format!("No monkey named '{}'", name));
                }
            },
            PendingAction::Random => match self.cache.get_random().await {
                Ok(record) => {
                    self.message = Some(format!("Randomly picked '{}'", record.name));
                    self.show_detail(record);
                }
                Err(e) => {
                    self.message = Some(e.to_string());
                }
            },
            PendingAction::LoadStatistics => {
                self.statistics = Some(self.cache.statistics().await);
                self.state = AppState::Statistics;
            }
            PendingAction::CheckServer => {
                self.server_available = Some(self.cache.is_server_available().await);
                self.state = AppState::ServerStatus;
            }
        }
    }

    fn show_detail(&mut self, record: Record) {
        if !matches!(self.state, AppState::RecordDetail(_)) {
            self.previous_state = self.state.clone();
        }
        self.state = AppState::RecordDetail(record.name.clone());
        self.selected = Some(record);
    }

    /// Returns the record highlighted in the list view
    pub fn highlighted_record(&self) -> Option<&Record> {
        self.records.get(self.list_index)
    }

    /// Runs a menu entry
    pub fn activate(&mut self, item: MenuItem) {
        self.message = None;
        match item {
            MenuItem::ListAll => self.pending = Some(PendingAction::LoadList),
            MenuItem::Search => {
                self.search_input.clear();
                self.state = AppState::Search;
            }
            MenuItem::Random => self.pending = Some(PendingAction::Random),
            MenuItem::Statistics => self.pending = Some(PendingAction::LoadStatistics),
            MenuItem::ServerCheck => self.pending = Some(PendingAction::CheckServer),
            MenuItem::Exit => self.should_quit = true,
        }
    }

    /// Handles keyboard input based on current state
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Help overlay intercepts all keys when shown
        if self.show_help {
            if matches!(
                key_event.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return;
        }

        match self.state {
            AppState::Loading => {
                if key_event.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
            AppState::Menu => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.menu_index = self.menu_index.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.menu_index + 1 < MENU_ITEMS.len() {
                        self.menu_index += 1;
                    }
                }
                KeyCode::Enter => {
                    self.activate(MENU_ITEMS[self.menu_index]);
                }
                KeyCode::Char(c @ '1'..='6') => {
                    let index = c as usize - '1' as usize;
                    self.menu_index = index;
                    self.activate(MENU_ITEMS[index]);
                }
                KeyCode::Char('c') => {
                    self.cache.clear();
                    self.message = Some("Record cache cleared".to_string());
                }
                KeyCode::Char('x') => {
                    self.cache.tracker().clear();
                    self.message = Some("Access statistics cleared".to_string());
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
            AppState::RecordList => match key_event.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Esc => {
                    self.state = AppState::Menu;
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.list_index = self.list_index.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.list_index + 1 < self.records.len() {
                        self.list_index += 1;
                    }
                }
                KeyCode::Enter => {
                    if let Some(record) = self.highlighted_record() {
                        self.pending = Some(PendingAction::Lookup(record.name.clone()));
                    }
                }
                KeyCode::Char('r') => {
                    self.pending = Some(PendingAction::LoadList);
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
            AppState::Search => match key_event.code {
                KeyCode::Esc => {
                    self.state = AppState::Menu;
                }
                KeyCode::Enter => {
                    let query = self.search_input.trim().to_string();
                    if query.is_empty() {
                        self.message = Some("Type a name to search for".to_string());
                    } else {
                        self.message = None;
                        self.pending = Some(PendingAction::Lookup(query));
                    }
                }
                KeyCode::Backspace => {
                    self.search_input.pop();
                }
                KeyCode::Char(c) => {
                    self.search_input.push(c);
                }
                _ => {}
            },
            AppState::RecordDetail(_) => match key_event.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Esc => {
                    self.state = self.previous_state.clone();
                }
                KeyCode::Char('r') => {
                    self.pending = Some(PendingAction::Random);
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
            AppState::Statistics => match key_event.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Esc => {
                    self.state = AppState::Menu;
                }
                KeyCode::Char('x') => {
                    self.cache.tracker().clear();
                    self.message = Some("Access statistics cleared".to_string());
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
            AppState::ServerStatus => match key_event.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Esc | KeyCode::Enter => {
                    self.state = AppState::Menu;
                }
                _ => {}
            },
        }
    }
}
