use crate::core::SessionOptions;
use crate::ui::session::SortTab;

/// Manages multiple sorting sessions as tabs
#[derive(Debug)]
pub struct TabManager {
    /// All open tabs
    tabs: Vec<SortTab>,
    /// Index of the currently active tab
    active_tab: usize,
    /// Maximum number of tabs allowed
    max_tabs: usize,
    /// Options handed to each new session
    options: SessionOptions,
}

impl TabManager {
    pub fn new(max_tabs: usize, options: SessionOptions) -> Self {
        Self {
            tabs: Vec::new(),
            active_tab: 0,
            max_tabs: max_tabs.max(1),
            options,
        }
    }

    /// Open a new empty tab and focus it
    pub fn new_tab(&mut self) -> Option<usize> {
        if !self.can_add_tab() {
            return None;
        }

        let tab = SortTab::new(self.options);
        tracing::debug!(session = %tab.id(), "Opened tab");
        self.tabs.push(tab);
        self.active_tab = self.tabs.len() - 1;
        Some(self.active_tab)
    }

    /// Close a tab by index
    pub fn close_tab(&mut self, index: usize) -> bool {
        if index >= self.tabs.len() {
            return false;
        }

        let tab = self.tabs.remove(index);
        tracing::debug!(session = %tab.id(), "Closed tab");

        if self.active_tab >= self.tabs.len() {
            self.active_tab = self.tabs.len().saturating_sub(1);
        } else if self.active_tab > index {
            self.active_tab -= 1;
        }

        true
    }

    /// Switch to a specific tab
    pub fn switch_to(&mut self, index: usize) -> bool {
        if index < self.tabs.len() {
            self.active_tab = index;
            true
        } else {
            false
        }
    }

    pub fn next_tab(&mut self) {
        if !self.tabs.is_empty() {
            self.active_tab = (self.active_tab + 1) % self.tabs.len();
        }
    }

    pub fn prev_tab(&mut self) {
        if !self.tabs.is_empty() {
            self.active_tab = if self.active_tab == 0 {
                self.tabs.len() - 1
            } else {
                self.active_tab - 1
            };
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_tab
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_tab(&self) -> Option<&SortTab> {
        self.tabs.get(self.active_tab)
    }

    pub fn active_tab_mut(&mut self) -> Option<&mut SortTab> {
        self.tabs.get_mut(self.active_tab)
    }

    pub fn tab(&self, index: usize) -> Option<&SortTab> {
        self.tabs.get(index)
    }

    pub fn tabs_mut(&mut self) -> &mut [SortTab] {
        &mut self.tabs
    }

    /// Get tab names for display
    pub fn tab_names(&self) -> Vec<String> {
        self.tabs.iter().map(SortTab::tab_name).collect()
    }

    pub fn can_add_tab(&self) -> bool {
        self.tabs.len() < self.max_tabs
    }
}
