use std::collections::VecDeque;

use crate::aggregate::{self, OpponentSummary};
use crate::history::MatchRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Opponents,
    Tournament,
}

pub fn screen_label(screen: Screen) -> &'static str {
    match screen {
        Screen::Opponents => "Opponent History",
        Screen::Tournament => "Tournament Campaign",
    }
}

/// Per-session UI state over the immutable dataset.
///
/// The summary table and the selector contents are derived once at startup;
/// per-opponent and per-tournament views are recomputed on selection change.
#[derive(Debug, Clone)]
pub struct AppState {
    pub records: Vec<MatchRecord>,
    pub summaries: Vec<OpponentSummary>,
    pub opponents: Vec<String>,
    pub tournaments: Vec<String>,
    pub screen: Screen,
    pub summary_scroll: usize,
    pub opponent_cursor: usize,
    pub opponent_selected: Option<String>,
    pub opponent_search: String,
    pub search_active: bool,
    pub tournament_cursor: usize,
    pub tournament_selected: Option<String>,
    pub detail_scroll: u16,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
}

impl AppState {
    pub fn new(records: &[MatchRecord]) -> Self {
        let records = records.to_vec();
        let summaries = aggregate::opponent_summaries(&records);
        let opponents = aggregate::opponent_names(&records);
        let tournaments = aggregate::tournament_names(&records);
        Self {
            records,
            summaries,
            opponents,
            tournaments,
            screen: Screen::Opponents,
            summary_scroll: 0,
            opponent_cursor: 0,
            opponent_selected: None,
            opponent_search: String::new(),
            search_active: false,
            tournament_cursor: 0,
            tournament_selected: None,
            detail_scroll: 0,
            logs: VecDeque::with_capacity(64),
            help_overlay: false,
        }
    }

    pub fn toggle_screen(&mut self) {
        self.screen = match self.screen {
            Screen::Opponents => Screen::Tournament,
            Screen::Tournament => Screen::Opponents,
        };
        self.search_active = false;
    }

    /// Opponent selector contents with the search filter applied.
    pub fn filtered_opponents(&self) -> Vec<&str> {
        let needle = self.opponent_search.trim().to_lowercase();
        self.opponents
            .iter()
            .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
            .map(|name| name.as_str())
            .collect()
    }

    pub fn selected_opponent(&self) -> Option<&str> {
        self.opponent_selected.as_deref()
    }

    pub fn selected_tournament(&self) -> Option<&str> {
        self.tournament_selected.as_deref()
    }

    pub fn select_next(&mut self) {
        let total = self.selector_len();
        let cursor = self.selector_cursor_mut();
        if total == 0 {
            *cursor = 0;
            return;
        }
        *cursor = (*cursor + 1) % total;
    }

    pub fn select_prev(&mut self) {
        let total = self.selector_len();
        let cursor = self.selector_cursor_mut();
        if total == 0 {
            *cursor = 0;
            return;
        }
        if *cursor == 0 {
            *cursor = total - 1;
        } else {
            *cursor -= 1;
        }
    }

    /// Pin the item under the cursor; the detail views key off it.
    pub fn confirm_selection(&mut self) {
        match self.screen {
            Screen::Opponents => {
                let picked = self
                    .filtered_opponents()
                    .get(self.opponent_cursor)
                    .map(|name| name.to_string());
                if let Some(name) = picked {
                    self.push_log(format!("[INFO] Opponent: {name}"));
                    self.opponent_selected = Some(name);
                    self.detail_scroll = 0;
                }
            }
            Screen::Tournament => {
                let picked = self.tournaments.get(self.tournament_cursor).cloned();
                if let Some(name) = picked {
                    self.push_log(format!("[INFO] Tournament: {name}"));
                    self.tournament_selected = Some(name);
                }
            }
        }
    }

    pub fn clear_selection(&mut self) {
        match self.screen {
            Screen::Opponents => {
                self.opponent_selected = None;
                self.detail_scroll = 0;
            }
            Screen::Tournament => self.tournament_selected = None,
        }
    }

    pub fn push_search_char(&mut self, ch: char) {
        self.opponent_search.push(ch);
        self.opponent_cursor = 0;
    }

    pub fn pop_search_char(&mut self) {
        self.opponent_search.pop();
        self.opponent_cursor = 0;
    }

    pub fn clear_search(&mut self) {
        self.opponent_search.clear();
        self.opponent_cursor = 0;
    }

    pub fn scroll_summary_down(&mut self) {
        if self.summary_scroll + 1 < self.summaries.len() {
            self.summary_scroll += 1;
        }
    }

    pub fn scroll_summary_up(&mut self) {
        self.summary_scroll = self.summary_scroll.saturating_sub(1);
    }

    pub fn scroll_detail_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        const MAX_LOGS: usize = 50;
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    pub fn last_log(&self) -> Option<&str> {
        self.logs.back().map(|s| s.as_str())
    }

    fn selector_len(&self) -> usize {
        match self.screen {
            Screen::Opponents => self.filtered_opponents().len(),
            Screen::Tournament => self.tournaments.len(),
        }
    }

    fn selector_cursor_mut(&mut self) -> &mut usize {
        match self.screen {
            Screen::Opponents => &mut self.opponent_cursor,
            Screen::Tournament => &mut self.tournament_cursor,
        }
    }
}
