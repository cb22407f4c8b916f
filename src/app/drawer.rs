// app/drawer.rs

//! Navigation drawer: past conversations grouped by day, plus the
//! "New Chat" and "Settings" entries.

use chrono::{Duration, Local, NaiveDate};
use ratatui::widgets::ListState;

/// A past conversation listed in the drawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub title: String,
    pub date: NaiveDate,
}

/// Selectable rows of the drawer, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerItem {
    History(usize),
    NewChat,
    Settings,
}

/// Returns the heading under which entries of `date` are grouped.
pub fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    match today.signed_duration_since(date).num_days() {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        _ => date.format("%b %d").to_string(),
    }
}

/// Placeholder history until conversations are stored somewhere.
pub fn sample_history(today: NaiveDate) -> Vec<HistoryEntry> {
    let yesterday = today - Duration::days(1);
    vec![
        HistoryEntry {
            title: "Hello, World!".to_string(),
            date: today,
        },
        HistoryEntry {
            title: "Hello, Another World!".to_string(),
            date: today,
        },
        HistoryEntry {
            title: "Best library for mobile app development".to_string(),
            date: yesterday,
        },
    ]
}

pub struct Drawer {
    is_open: bool,
    entries: Vec<HistoryEntry>,
    list_state: ListState,
}

impl Drawer {
    pub fn new(entries: Vec<HistoryEntry>) -> Self {
        Self {
            is_open: false,
            entries,
            list_state: ListState::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
        if self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// All selectable rows: history entries first, then the footer actions.
    pub fn items(&self) -> Vec<DrawerItem> {
        (0..self.entries.len())
            .map(DrawerItem::History)
            .chain([DrawerItem::NewChat, DrawerItem::Settings])
            .collect()
    }

    pub fn selected(&self) -> Option<DrawerItem> {
        self.list_state
            .selected()
            .and_then(|index| self.items().get(index).copied())
    }

    /// Selects the next row, wrapping around.
    pub fn select_next(&mut self) {
        let len = self.items().len();
        let next = match self.list_state.selected() {
            Some(selected) if selected + 1 < len => selected + 1,
            _ => 0,
        };
        self.list_state.select(Some(next));
    }

    /// Selects the previous row, wrapping around.
    pub fn select_previous(&mut self) {
        let len = self.items().len();
        let previous = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(selected) => selected - 1,
        };
        self.list_state.select(Some(previous));
    }

    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }
}

impl Default for Drawer {
    fn default() -> Self {
        Self::new(sample_history(Local::now().date_naive()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_date_label() {
        assert_eq!(date_label(day(10), day(10)), "Today");
        assert_eq!(date_label(day(9), day(10)), "Yesterday");
        assert_eq!(date_label(day(2), day(10)), "Mar 02");
    }

    #[test]
    fn test_sample_history_groups() {
        let history = sample_history(day(10));
        let labels: Vec<_> = history.iter().map(|e| date_label(e.date, day(10))).collect();
        assert_eq!(labels, vec!["Today", "Today", "Yesterday"]);
    }

    #[test]
    fn test_items_end_with_footer_actions() {
        let drawer = Drawer::new(sample_history(day(10)));
        assert_eq!(
            drawer.items(),
            vec![
                DrawerItem::History(0),
                DrawerItem::History(1),
                DrawerItem::History(2),
                DrawerItem::NewChat,
                DrawerItem::Settings,
            ]
        );
    }

    #[test]
    fn test_selection_wraps() {
        let mut drawer = Drawer::new(Vec::new());
        drawer.open();
        assert_eq!(drawer.selected(), Some(DrawerItem::NewChat));
        drawer.select_next();
        assert_eq!(drawer.selected(), Some(DrawerItem::Settings));
        drawer.select_next();
        assert_eq!(drawer.selected(), Some(DrawerItem::NewChat));
        drawer.select_previous();
        assert_eq!(drawer.selected(), Some(DrawerItem::Settings));
    }

    #[test]
    fn test_open_close() {
        let mut drawer = Drawer::new(Vec::new());
        assert!(!drawer.is_open());
        drawer.open();
        assert!(drawer.is_open());
        drawer.close();
        assert!(!drawer.is_open());
    }
}
