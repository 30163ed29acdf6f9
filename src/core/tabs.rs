//! Registry of open tabs

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::document::{DocumentTab, SaveOutcome, TabId};
use super::session::SessionEntry;

/// Ordered set of open tabs with one active tab
#[derive(Default)]
pub struct TabRegistry {
    tabs: Vec<DocumentTab>,
    active: usize,
    next_id: u64,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild tabs from a session; an empty session yields one blank tab
    pub fn from_session(entries: Vec<SessionEntry>) -> Self {
        let mut registry = Self::new();
        for entry in entries {
            let id = registry.allocate_id();
            registry.push(DocumentTab::restored(id, entry));
        }
        registry.ensure_tab();
        registry
    }

    /// Full snapshot of every open tab, in tab order
    pub fn to_session(&self) -> Vec<SessionEntry> {
        self.tabs.iter().map(DocumentTab::to_session_entry).collect()
    }

    fn allocate_id(&mut self) -> TabId {
        let id = TabId(self.next_id);
        self.next_id += 1;
        id
    }

    fn push(&mut self, tab: DocumentTab) -> TabId {
        let id = tab.id();
        self.tabs.push(tab);
        self.active = self.tabs.len() - 1;
        tracing::debug!("Created tab {:?} at index {}", id, self.active);
        id
    }

    /// Create a tab and make it active
    pub fn create_tab(&mut self, content: String, path: Option<PathBuf>) -> TabId {
        let id = self.allocate_id();
        self.push(DocumentTab::new(id, content, path))
    }

    /// Read `path` into a new active tab
    pub fn open_file(&mut self, path: &Path) -> Result<TabId> {
        let id = self.allocate_id();
        let tab = DocumentTab::load(id, path)?;
        tracing::info!("Opened file: {}", path.display());
        Ok(self.push(tab))
    }

    /// Create a blank tab if none are open
    pub fn ensure_tab(&mut self) {
        if self.tabs.is_empty() {
            self.create_tab(String::new(), None);
        }
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocumentTab> {
        self.tabs.iter()
    }

    pub fn get(&self, id: TabId) -> Option<&DocumentTab> {
        self.tabs.iter().find(|t| t.id() == id)
    }

    pub fn get_mut(&mut self, id: TabId) -> Option<&mut DocumentTab> {
        self.tabs.iter_mut().find(|t| t.id() == id)
    }

    /// Handle of the active tab
    pub fn current_tab(&self) -> Option<TabId> {
        self.current().map(DocumentTab::id)
    }

    pub fn current(&self) -> Option<&DocumentTab> {
        self.tabs.get(self.active)
    }

    pub fn current_mut(&mut self) -> Option<&mut DocumentTab> {
        self.tabs.get_mut(self.active)
    }

    /// Make `id` the active tab. Returns `false` for unknown handles.
    pub fn select(&mut self, id: TabId) -> bool {
        match self.tabs.iter().position(|t| t.id() == id) {
            Some(index) => {
                self.active = index;
                true
            }
            None => {
                tracing::warn!("Unknown tab {:?}", id);
                false
            }
        }
    }

    pub fn content(&self, id: TabId) -> Option<&str> {
        self.get(id).map(DocumentTab::content)
    }

    /// Replace a tab's buffer. Returns `false` for unknown handles.
    pub fn set_content(&mut self, id: TabId, content: String) -> bool {
        match self.get_mut(id) {
            Some(tab) => {
                tab.set_content(content);
                true
            }
            None => false,
        }
    }

    pub fn save(&mut self, id: TabId) -> Result<SaveOutcome> {
        self.get_mut(id)
            .with_context(|| format!("No tab {:?}", id))?
            .save()
    }

    pub fn save_as(&mut self, id: TabId, path: PathBuf) -> Result<()> {
        self.get_mut(id)
            .with_context(|| format!("No tab {:?}", id))?
            .save_as(path)
    }
}
