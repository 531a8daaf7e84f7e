//! Palette state machine: Closed, or Open with a query, the visible items
//! and a selection.

use tracing::debug;

use crate::catalog::{catalog, filter, CommandId, CommandItem};

/// Keys the palette reacts to while open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKey {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    Backspace,
    Char(char),
}

/// State of an open palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteState {
    query: String,
    visible: Vec<&'static CommandItem>,
    selected: Option<usize>,
}

impl PaletteState {
    fn new(items: &'static [CommandItem]) -> Self {
        let visible = filter(items, "");
        let selected = (!visible.is_empty()).then_some(0);
        Self {
            query: String::new(),
            visible,
            selected,
        }
    }

    /// Current filter text
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Items matching the query, in catalog order
    pub fn visible_items(&self) -> &[&'static CommandItem] {
        &self.visible
    }

    /// Index of the highlighted item; `None` when nothing is visible
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The highlighted item
    pub fn selected_item(&self) -> Option<&'static CommandItem> {
        self.selected.and_then(|i| self.visible.get(i).copied())
    }
}

/// Slash-command palette.
///
/// Every transition is a plain method call; nothing here listens to input on
/// its own. Events received while closed are ignored.
#[derive(Debug, Clone)]
pub struct Palette {
    items: &'static [CommandItem],
    state: Option<PaletteState>,
}

impl Palette {
    /// Creates a closed palette over the standard catalog
    pub fn new() -> Self {
        Self::with_catalog(catalog())
    }

    /// Creates a closed palette over another static catalog
    pub fn with_catalog(items: &'static [CommandItem]) -> Self {
        Self { items, state: None }
    }

    /// Whether the palette is open
    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    /// State of the open palette
    pub fn state(&self) -> Option<&PaletteState> {
        self.state.as_ref()
    }

    /// Opens the palette with the full catalog and an empty query.
    ///
    /// Opening an already open palette resets it.
    pub fn open(&mut self) {
        debug!(items = self.items.len(), "palette opened");
        self.state = Some(PaletteState::new(self.items));
    }

    /// Replaces the query, refilters and moves the selection to the top
    pub fn on_query_change(&mut self, query: &str) {
        let items = self.items;
        if let Some(state) = self.state.as_mut() {
            state.query = query.to_string();
            state.visible = filter(items, query);
            state.selected = (!state.visible.is_empty()).then_some(0);
        }
    }

    /// Moves the selection down, stopping at the last item
    pub fn on_move_down(&mut self) {
        if let Some(state) = self.state.as_mut() {
            if let Some(selected) = state.selected {
                state.selected = Some((selected + 1).min(state.visible.len() - 1));
            }
        }
    }

    /// Moves the selection up, stopping at the first item
    pub fn on_move_up(&mut self) {
        if let Some(state) = self.state.as_mut() {
            if let Some(selected) = state.selected {
                state.selected = Some(selected.saturating_sub(1));
            }
        }
    }

    /// Pointer hover over the item at `index`
    pub fn on_hover(&mut self, index: usize) {
        if let Some(state) = self.state.as_mut() {
            if index < state.visible.len() {
                state.selected = Some(index);
            }
        }
    }

    /// Commits the highlighted item and closes the palette.
    ///
    /// Returns `None`, and stays open, when nothing is visible.
    pub fn on_commit(&mut self) -> Option<CommandId> {
        let selected = self.state.as_ref()?.selected?;
        self.commit_at(selected)
    }

    /// Pointer selection of the item at `index`; commits it and closes the palette
    pub fn on_select(&mut self, index: usize) -> Option<CommandId> {
        self.commit_at(index)
    }

    /// Closes the palette without a selection
    pub fn on_dismiss(&mut self) {
        if self.state.take().is_some() {
            debug!("palette dismissed");
        }
    }

    /// Routes a key press to the matching transition
    pub fn on_key(&mut self, key: PaletteKey) -> Option<CommandId> {
        match key {
            PaletteKey::ArrowUp => self.on_move_up(),
            PaletteKey::ArrowDown => self.on_move_down(),
            PaletteKey::Enter => return self.on_commit(),
            PaletteKey::Escape => self.on_dismiss(),
            PaletteKey::Backspace => {
                if let Some(mut query) = self.state.as_ref().map(|s| s.query.clone()) {
                    query.pop();
                    self.on_query_change(&query);
                }
            }
            PaletteKey::Char(c) => {
                if let Some(mut query) = self.state.as_ref().map(|s| s.query.clone()) {
                    query.push(c);
                    self.on_query_change(&query);
                }
            }
        }
        None
    }

    fn commit_at(&mut self, index: usize) -> Option<CommandId> {
        let item = self.state.as_ref()?.visible.get(index).copied()?;
        self.state = None;
        debug!(command = %item.id, "palette committed");
        Some(item.id)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_palette() -> Palette {
        let mut palette = Palette::new();
        palette.open();
        palette
    }

    #[test]
    fn test_open_shows_full_catalog() {
        let palette = open_palette();
        let state = palette.state().unwrap();
        assert_eq!(state.query(), "");
        assert_eq!(state.visible_items().len(), catalog().len());
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn test_move_down_stops_at_end() {
        let mut palette = open_palette();
        let n = catalog().len();
        for _ in 0..n + 5 {
            palette.on_move_down();
        }
        assert_eq!(palette.state().unwrap().selected_index(), Some(n - 1));
    }

    #[test]
    fn test_move_up_stops_at_start() {
        let mut palette = open_palette();
        palette.on_move_down();
        palette.on_move_up();
        palette.on_move_up();
        assert_eq!(palette.state().unwrap().selected_index(), Some(0));
    }

    #[test]
    fn test_query_head() {
        let mut palette = open_palette();
        palette.on_move_down();
        palette.on_query_change("head");
        let state = palette.state().unwrap();
        let ids: Vec<CommandId> = state.visible_items().iter().map(|i| i.id).collect();
        assert_eq!(
            ids,
            vec![CommandId::Heading1, CommandId::Heading2, CommandId::Heading3]
        );
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn test_empty_query_restores_catalog() {
        let mut palette = open_palette();
        palette.on_query_change("quote");
        assert_eq!(palette.state().unwrap().visible_items().len(), 1);
        palette.on_query_change("");
        assert_eq!(
            palette.state().unwrap().visible_items().len(),
            catalog().len()
        );
    }

    #[test]
    fn test_no_match_commit_is_noop() {
        let mut palette = open_palette();
        palette.on_query_change("zzz");
        let state = palette.state().unwrap();
        assert!(state.visible_items().is_empty());
        assert_eq!(state.selected_index(), None);

        palette.on_move_down();
        palette.on_move_up();
        assert_eq!(palette.on_commit(), None);
        assert!(palette.is_open());
    }

    #[test]
    fn test_commit_emits_and_closes() {
        let mut palette = open_palette();
        palette.on_move_down();
        palette.on_move_down();
        assert_eq!(palette.on_commit(), Some(CommandId::Heading3));
        assert!(!palette.is_open());
        assert_eq!(palette.on_commit(), None);
    }

    #[test]
    fn test_hover_then_commit() {
        let mut palette = open_palette();
        palette.on_hover(8);
        assert_eq!(palette.state().unwrap().selected_index(), Some(8));
        palette.on_hover(99);
        assert_eq!(palette.state().unwrap().selected_index(), Some(8));
        assert_eq!(palette.on_commit(), Some(CommandId::Quote));
    }

    #[test]
    fn test_pointer_select() {
        let mut palette = open_palette();
        palette.on_query_change("list");
        assert_eq!(palette.on_select(7), None);
        assert!(palette.is_open());
        assert_eq!(palette.on_select(1), Some(CommandId::NumberedList));
        assert!(!palette.is_open());
    }

    #[test]
    fn test_dismiss_closes_without_selection() {
        let mut palette = open_palette();
        palette.on_dismiss();
        assert!(!palette.is_open());
        assert_eq!(palette.on_select(0), None);
    }

    #[test]
    fn test_closed_palette_ignores_events() {
        let mut palette = Palette::new();
        palette.on_query_change("head");
        palette.on_move_down();
        palette.on_hover(2);
        assert!(palette.state().is_none());
        assert_eq!(palette.on_key(PaletteKey::Enter), None);
    }

    #[test]
    fn test_keys_drive_transitions() {
        let mut palette = open_palette();
        for c in "code".chars() {
            palette.on_key(PaletteKey::Char(c));
        }
        assert_eq!(palette.state().unwrap().query(), "code");
        palette.on_key(PaletteKey::Backspace);
        assert_eq!(palette.state().unwrap().query(), "cod");

        palette.on_key(PaletteKey::ArrowDown);
        palette.on_key(PaletteKey::ArrowUp);
        assert_eq!(palette.on_key(PaletteKey::Enter), Some(CommandId::Code));

        palette.open();
        palette.on_key(PaletteKey::Escape);
        assert!(!palette.is_open());
    }

    #[test]
    fn test_reopen_resets_state() {
        let mut palette = open_palette();
        palette.on_query_change("quote");
        palette.open();
        let state = palette.state().unwrap();
        assert_eq!(state.query(), "");
        assert_eq!(state.selected_index(), Some(0));
    }
}
