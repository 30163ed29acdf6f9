//! Open documents: one text buffer per tab

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use egui::util::undoer::Undoer;

use super::session::SessionEntry;

/// Title shown for tabs that are not bound to a file
pub const UNTITLED: &str = "Untitled";

/// Opaque handle identifying a tab for its whole lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(pub(crate) u64);

/// Outcome of a plain save
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Buffer was written to the bound path
    Saved(PathBuf),
    /// Tab has no file yet; the caller must pick one and use `save_as`
    NeedsPath,
}

/// Add the default `.txt` extension to a chosen save path that has none
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension("txt")
    }
}

/// An open document tab
pub struct DocumentTab {
    id: TabId,
    /// Bound file, `None` while untitled
    path: Option<PathBuf>,
    /// Buffer content
    pub content: String,
    /// Whether the buffer differs from what was last loaded or saved
    pub modified: bool,
    /// Content last loaded or saved; `None` when the file could not be read
    saved: Option<String>,
    history: Undoer<String>,
}

impl DocumentTab {
    /// Create a tab holding `content`, optionally bound to `path`
    pub fn new(id: TabId, content: String, path: Option<PathBuf>) -> Self {
        let mut history = Undoer::default();
        history.add_undo(&content);
        Self {
            id,
            path,
            saved: Some(content.clone()),
            content,
            modified: false,
            history,
        }
    }

    /// Open a tab from a file on disk
    pub fn load(id: TabId, path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(Self::new(id, content, Some(path.to_path_buf())))
    }

    /// Rebuild a tab from a session entry.
    ///
    /// The tab counts as modified when its content no longer matches the
    /// bound file (or, for untitled tabs, when it is not empty).
    pub fn restored(id: TabId, entry: SessionEntry) -> Self {
        let saved = match &entry.file_path {
            Some(path) => fs::read_to_string(path).ok(),
            None => Some(String::new()),
        };
        let mut tab = Self::new(id, entry.content, entry.file_path);
        tab.saved = saved;
        tab.refresh_modified();
        tab
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Base name of the bound file, or "Untitled"
    pub fn title(&self) -> String {
        self.path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    /// Title with a trailing `*` while there are unsaved changes
    pub fn display_title(&self) -> String {
        if self.modified {
            format!("{}*", self.title())
        } else {
            self.title()
        }
    }

    /// Replace the whole buffer as a single undoable step
    pub fn set_content(&mut self, content: String) {
        if self.content == content {
            return;
        }
        self.history.add_undo(&self.content);
        self.content = content;
        self.history.add_undo(&self.content);
        self.refresh_modified();
    }

    /// Recompute the modified flag after the text area changed the buffer
    pub fn mark_edited(&mut self) {
        self.refresh_modified();
    }

    fn refresh_modified(&mut self) {
        self.modified = self.saved.as_deref() != Some(self.content.as_str());
    }

    /// Feed the current buffer to the undo history.
    ///
    /// Called every frame while the text area is shown; bursts of typing are
    /// grouped into one undo step once the buffer has been stable for a moment.
    pub fn feed_history(&mut self, time: f64) {
        self.history.feed_state(time, &self.content);
    }

    /// Step back in the undo history. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.content).cloned() {
            Some(previous) => {
                self.content = previous;
                self.refresh_modified();
                true
            }
            None => {
                tracing::debug!("Nothing to undo in {}", self.title());
                false
            }
        }
    }

    /// Step forward in the undo history. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.content).cloned() {
            Some(next) => {
                self.content = next;
                self.refresh_modified();
                true
            }
            None => {
                tracing::debug!("Nothing to redo in {}", self.title());
                false
            }
        }
    }

    /// Write the buffer to the bound file, if any
    pub fn save(&mut self) -> Result<SaveOutcome> {
        let Some(path) = self.path.clone() else {
            return Ok(SaveOutcome::NeedsPath);
        };
        self.write_to(&path)?;
        Ok(SaveOutcome::Saved(path))
    }

    /// Write the buffer to `path` and rebind the tab to it
    pub fn save_as(&mut self, path: PathBuf) -> Result<()> {
        self.write_to(&path)?;
        self.path = Some(path);
        Ok(())
    }

    fn write_to(&mut self, path: &Path) -> Result<()> {
        fs::write(path, &self.content)
            .with_context(|| format!("Failed to save file: {}", path.display()))?;
        self.saved = Some(self.content.clone());
        self.modified = false;
        tracing::info!("Saved document: {}", path.display());
        Ok(())
    }

    /// Capture this tab for the session file
    pub fn to_session_entry(&self) -> SessionEntry {
        SessionEntry {
            file_path: self.path.clone(),
            content: self.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(content: &str) -> DocumentTab {
        DocumentTab::new(TabId(1), content.to_string(), None)
    }

    #[test]
    fn test_untitled_title() {
        let doc = tab("");
        assert_eq!(doc.title(), "Untitled");
        assert_eq!(doc.display_title(), "Untitled");
    }

    #[test]
    fn test_set_content_marks_modified() {
        let mut doc = tab("a");
        doc.set_content("a".to_string());
        assert!(!doc.modified);
        doc.set_content("b".to_string());
        assert!(doc.modified);
        assert_eq!(doc.display_title(), "Untitled*");
    }

    #[test]
    fn test_undo_redo_set_content() {
        let mut doc = tab("");
        doc.set_content("hello".to_string());

        assert!(doc.undo());
        assert_eq!(doc.content(), "");
        assert!(doc.redo());
        assert_eq!(doc.content(), "hello");
    }

    #[test]
    fn test_undo_without_history_is_noop() {
        let mut doc = tab("start");
        assert!(!doc.undo());
        assert!(!doc.redo());
        assert_eq!(doc.content(), "start");
    }

    #[test]
    fn test_undo_to_saved_text_clears_marker() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.txt");
        let mut doc = DocumentTab::new(TabId(1), String::new(), None);
        doc.set_content("draft".to_string());
        doc.save_as(path).unwrap();

        doc.set_content("draft plus more".to_string());
        assert_eq!(doc.display_title(), "saved.txt*");

        assert!(doc.undo());
        assert_eq!(doc.content(), "draft");
        assert_eq!(doc.display_title(), "saved.txt");

        assert!(doc.redo());
        assert!(doc.modified);
    }

    #[test]
    fn test_edit_back_to_original_is_unmodified() {
        let mut doc = tab("abc");
        doc.content.push('d');
        doc.mark_edited();
        assert!(doc.modified);
        doc.content.pop();
        doc.mark_edited();
        assert!(!doc.modified);
    }

    #[test]
    fn test_default_extension() {
        assert_eq!(
            with_default_extension(PathBuf::from("/tmp/notes")),
            PathBuf::from("/tmp/notes.txt")
        );
        assert_eq!(
            with_default_extension(PathBuf::from("/tmp/main.rs")),
            PathBuf::from("/tmp/main.rs")
        );
    }

    #[test]
    fn test_save_without_path_needs_path() {
        let mut doc = tab("text");
        assert_eq!(doc.save().unwrap(), SaveOutcome::NeedsPath);
    }

    #[test]
    fn test_save_as_rebinds_path() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");

        let mut doc = DocumentTab::new(TabId(1), "one".to_string(), Some(first.clone()));
        doc.save_as(second.clone()).unwrap();
        assert_eq!(doc.path(), Some(second.as_path()));
        assert_eq!(doc.title(), "second.txt");

        doc.set_content("two".to_string());
        assert_eq!(doc.save().unwrap(), SaveOutcome::Saved(second.clone()));
        assert_eq!(fs::read_to_string(&second).unwrap(), "two");
        assert!(!first.exists());
        assert!(!doc.modified);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(DocumentTab::load(TabId(1), &dir.path().join("nope.txt")).is_err());
    }

    #[test]
    fn test_restored_tab_modified_only_when_diverged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "same").unwrap();

        let clean = DocumentTab::restored(
            TabId(1),
            SessionEntry {
                file_path: Some(path.clone()),
                content: "same".to_string(),
            },
        );
        assert!(!clean.modified);

        let dirty = DocumentTab::restored(
            TabId(2),
            SessionEntry {
                file_path: Some(path),
                content: "edited".to_string(),
            },
        );
        assert!(dirty.modified);
    }
}
