use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use crate::display::{DisplayRow, format_rows};
use crate::filter::filter_records;
use crate::load::LoadedData;
use crate::records::{Column, GwdRecord, column_label};
use crate::sort::{SortDirection, resolve_column, sort_records};

const LOG_CAPACITY: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonChoice {
    Both,
    RegularOnly,
    PlayoffsOnly,
}

/// Tabs shown when the season choice is Both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Combined,
    Regular,
    Playoffs,
}

/// All view-controller state. The pipeline stages stay pure; this owns
/// the parameters and threads them through on every interaction.
#[derive(Debug, Clone)]
pub struct AppState {
    pub data: Option<Arc<LoadedData>>,
    pub season_choice: SeasonChoice,
    pub tab: Tab,
    pub sort_column: Column,
    pub sort_direction: SortDirection,
    pub selected_players: HashSet<String>,
    pub min_attempts: u32,
    pub selected: usize,
    pub picker_open: bool,
    pub picker_selected: usize,
    pub picker_search: String,
    pub help_overlay: bool,
    pub logs: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            data: None,
            season_choice: SeasonChoice::Both,
            tab: Tab::Combined,
            sort_column: Column::DEFAULT_SORT,
            sort_direction: SortDirection::Descending,
            selected_players: HashSet::new(),
            min_attempts: 0,
            selected: 0,
            picker_open: false,
            picker_selected: 0,
            picker_search: String::new(),
            help_overlay: false,
            logs: VecDeque::with_capacity(LOG_CAPACITY),
        }
    }

    pub fn set_data(&mut self, data: Arc<LoadedData>) {
        self.push_log(format!(
            "[INFO] Loaded {} regular season + {} playoff records, {} quarterbacks",
            data.merged.regular.len(),
            data.merged.playoffs.len(),
            data.merged.players.len()
        ));
        for warning in &data.warnings {
            self.push_log(format!("[WARN] data quality: {warning}"));
        }
        self.data = Some(data);
        self.clamp_min_attempts();
        self.clamp_selection();
        self.clamp_picker_selection();
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        if self.logs.len() == LOG_CAPACITY {
            self.logs.pop_front();
        }
        self.logs.push_back(msg.into());
    }

    // ---- view selection ---------------------------------------------

    pub fn cycle_season_choice(&mut self) {
        self.season_choice = match self.season_choice {
            SeasonChoice::Both => SeasonChoice::RegularOnly,
            SeasonChoice::RegularOnly => SeasonChoice::PlayoffsOnly,
            SeasonChoice::PlayoffsOnly => SeasonChoice::Both,
        };
        self.selected = 0;
    }

    pub fn cycle_tab(&mut self) {
        if self.season_choice != SeasonChoice::Both {
            return;
        }
        self.tab = match self.tab {
            Tab::Combined => Tab::Regular,
            Tab::Regular => Tab::Playoffs,
            Tab::Playoffs => Tab::Combined,
        };
        self.selected = 0;
    }

    fn active_dataset(&self) -> &[GwdRecord] {
        let Some(data) = &self.data else {
            return &[];
        };
        match (self.season_choice, self.tab) {
            (SeasonChoice::RegularOnly, _) => &data.merged.regular,
            (SeasonChoice::PlayoffsOnly, _) => &data.merged.playoffs,
            (SeasonChoice::Both, Tab::Combined) => &data.merged.combined,
            (SeasonChoice::Both, Tab::Regular) => &data.merged.regular,
            (SeasonChoice::Both, Tab::Playoffs) => &data.merged.playoffs,
        }
    }

    pub fn active_columns(&self) -> &'static [Column] {
        match (self.season_choice, self.tab) {
            (SeasonChoice::Both, Tab::Combined) => Column::combined(),
            _ => Column::single_season(),
        }
    }

    // ---- sort parameters ----------------------------------------------

    /// Requested sort column resolved against the active view's columns.
    pub fn current_sort_column(&self) -> Column {
        resolve_column(self.sort_column, self.active_columns())
    }

    pub fn cycle_sort_column(&mut self) {
        let columns = self.active_columns();
        let current = self.current_sort_column();
        let idx = columns.iter().position(|c| *c == current).unwrap_or(0);
        self.sort_column = columns[(idx + 1) % columns.len()];
        self.push_log(format!(
            "[INFO] Sorting by {}",
            column_label(self.sort_column)
        ));
    }

    pub fn toggle_sort_direction(&mut self) {
        self.sort_direction = match self.sort_direction {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        };
    }

    // ---- filter parameters ----------------------------------------------

    pub fn max_attempts(&self) -> u32 {
        self.data
            .as_ref()
            .map(|d| d.merged.max_attempts())
            .unwrap_or(0)
    }

    pub fn adjust_min_attempts(&mut self, delta: i64) {
        let max = self.max_attempts() as i64;
        let next = (self.min_attempts as i64 + delta).clamp(0, max);
        self.min_attempts = next as u32;
        self.clamp_selection();
    }

    fn clamp_min_attempts(&mut self) {
        self.min_attempts = self.min_attempts.min(self.max_attempts());
    }

    // ---- player picker ----------------------------------------------------

    pub fn players(&self) -> &[String] {
        self.data
            .as_ref()
            .map(|d| d.merged.players.as_slice())
            .unwrap_or(&[])
    }

    /// Player index narrowed by the picker's incremental search.
    pub fn picker_players(&self) -> Vec<&String> {
        let needle = self.picker_search.to_lowercase();
        self.players()
            .iter()
            .filter(|p| needle.is_empty() || p.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn toggle_picker(&mut self) {
        self.picker_open = !self.picker_open;
        if self.picker_open {
            self.picker_selected = 0;
            self.picker_search.clear();
        }
    }

    pub fn picker_select_next(&mut self) {
        let len = self.picker_players().len();
        if len > 0 {
            self.picker_selected = (self.picker_selected + 1) % len;
        }
    }

    pub fn picker_select_prev(&mut self) {
        let len = self.picker_players().len();
        if len > 0 {
            self.picker_selected = (self.picker_selected + len - 1) % len;
        }
    }

    pub fn picker_push_search(&mut self, c: char) {
        self.picker_search.push(c);
        self.clamp_picker_selection();
    }

    pub fn picker_pop_search(&mut self) {
        self.picker_search.pop();
        self.clamp_picker_selection();
    }

    fn clamp_picker_selection(&mut self) {
        let len = self.picker_players().len();
        if len == 0 {
            self.picker_selected = 0;
        } else if self.picker_selected >= len {
            self.picker_selected = len - 1;
        }
    }

    pub fn toggle_selected_player(&mut self) {
        let Some(name) = self
            .picker_players()
            .get(self.picker_selected)
            .map(|p| (*p).clone())
        else {
            return;
        };
        if !self.selected_players.remove(&name) {
            self.selected_players.insert(name);
        }
        self.selected = 0;
    }

    pub fn clear_selected_players(&mut self) {
        self.selected_players.clear();
        self.selected = 0;
    }

    // ---- table rows --------------------------------------------------------

    /// One full pipeline run against the cached snapshot: filter, then
    /// sort on raw values, then format. An empty result is the "no data
    /// with current filters" state, not an error.
    pub fn visible_rows(&self) -> Vec<DisplayRow> {
        let filtered = filter_records(
            self.active_dataset(),
            &self.selected_players,
            self.min_attempts,
        );
        let sorted = sort_records(&filtered, self.current_sort_column(), self.sort_direction);
        format_rows(&sorted)
    }

    pub fn select_next(&mut self) {
        let len = self.visible_rows().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn clamp_selection(&mut self) {
        let len = self.visible_rows().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}
