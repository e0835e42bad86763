use std::collections::BTreeSet;

use crate::keys::Action;
use crate::types::Item;
use crate::viewport::scroll_offset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    Terminating,
}

/// What the interaction loop should do after an action was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Quit,
    /// Ordinals of the selected items, in list order.
    Confirm(Vec<u32>),
}

/// All picker state. Mutated only through [`Session::handle`].
#[derive(Debug, Clone)]
pub struct Session {
    pub title: String,
    items: Vec<Item>,
    cursor: usize,
    selected: BTreeSet<usize>,
    viewport_offset: usize,
    width: u16,
    height: u16,
    sized: bool,
    phase: Phase,
}

impl Session {
    pub fn new(items: Vec<Item>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items,
            cursor: 0,
            selected: BTreeSet::new(),
            viewport_offset: 0,
            width: 0,
            height: 0,
            sized: false,
            phase: Phase::Active,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn viewport_offset(&self) -> usize {
        self.viewport_offset
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Apply one action. No I/O happens here; a [`Transition::Confirm`] asks
    /// the caller to persist the ordinals.
    pub fn handle(&mut self, action: Action) -> Transition {
        if self.phase == Phase::Terminating {
            return Transition::Stay;
        }
        let len = self.items.len();
        match action {
            Action::Quit => {
                self.phase = Phase::Terminating;
                return Transition::Quit;
            }
            Action::Up => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.recompute_viewport();
                }
            }
            Action::Down => {
                if self.cursor + 1 < len {
                    self.cursor += 1;
                    self.recompute_viewport();
                }
            }
            Action::Toggle if len > 0 => {
                if !self.selected.remove(&self.cursor) {
                    self.selected.insert(self.cursor);
                }
            }
            Action::Confirm if !self.selected.is_empty() => {
                self.phase = Phase::Terminating;
                return Transition::Confirm(self.selected_ordinals());
            }
            Action::SelectAll => self.selected = (0..len).collect(),
            Action::ClearAll => self.selected.clear(),
            Action::Resize { width, height } => {
                self.width = width;
                self.height = height;
                if !self.sized {
                    self.sized = true;
                    self.cursor = 0;
                    self.viewport_offset = 0;
                }
                self.recompute_viewport();
            }
            Action::Toggle | Action::Confirm | Action::None => {}
        }
        Transition::Stay
    }

    pub fn selected_ordinals(&self) -> Vec<u32> {
        self.selected.iter().map(|&i| self.items[i].ordinal).collect()
    }

    fn recompute_viewport(&mut self) {
        self.viewport_offset =
            scroll_offset(self.items.len(), self.cursor, self.viewport_offset, self.height);
    }
}
