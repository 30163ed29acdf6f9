//! Folder tree for the sidebar, loaded one directory at a time

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// A direct child of a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// List the direct children of `path`: directories first, then files,
/// case-insensitively by name.
///
/// Unreadable directories and entries are logged and skipped, so a failure
/// yields a short or empty listing rather than an error.
pub fn list_children(path: &Path) -> Vec<TreeEntry> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(path).min_depth(1).max_depth(1) {
        match entry {
            Ok(entry) => {
                let entry_path = entry.path().to_path_buf();
                entries.push(TreeEntry {
                    name: entry.file_name().to_string_lossy().to_string(),
                    is_dir: entry_path.is_dir(),
                    path: entry_path,
                });
            }
            Err(e) => tracing::error!("Error reading folder {}: {}", path.display(), e),
        }
    }

    entries.sort_by(|a, b| match (a.is_dir, b.is_dir) {
        (true, false) => std::cmp::Ordering::Less,
        (false, true) => std::cmp::Ordering::Greater,
        _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    });
    entries
}

/// Represents a file or directory in the tree
#[derive(Debug, Clone)]
pub struct FileNode {
    pub name: String,
    /// Full path, fixed when the node is created
    pub path: PathBuf,
    pub is_dir: bool,
    pub children: Vec<FileNode>,
    /// Set once the directory has been listed at least once
    pub children_loaded: bool,
    pub expanded: bool,
}

impl From<TreeEntry> for FileNode {
    fn from(entry: TreeEntry) -> Self {
        Self {
            name: entry.name,
            path: entry.path,
            is_dir: entry.is_dir,
            children: Vec::new(),
            children_loaded: false,
            expanded: false,
        }
    }
}

impl FileNode {
    /// Re-read this directory from disk and show its children
    fn expand(&mut self) {
        if !self.is_dir {
            return;
        }
        self.children = list_children(&self.path)
            .into_iter()
            .map(FileNode::from)
            .collect();
        self.children_loaded = true;
        self.expanded = true;
        tracing::debug!(
            "Expanded {} ({} entries)",
            self.path.display(),
            self.children.len()
        );
    }

    /// Collect the paths of expanded directories below this node
    fn expanded_paths(&self, paths: &mut HashSet<PathBuf>) {
        for child in &self.children {
            if child.expanded {
                paths.insert(child.path.clone());
            }
            child.expanded_paths(paths);
        }
    }

    /// Reload this directory and every descendant listed in `expanded`
    fn reload(&mut self, expanded: &HashSet<PathBuf>) {
        self.expand();
        for child in &mut self.children {
            if expanded.contains(&child.path) {
                child.reload(expanded);
            }
        }
    }

    fn find_mut(&mut self, path: &Path) -> Option<&mut FileNode> {
        if self.path == path {
            return Some(self);
        }
        if !path.starts_with(&self.path) {
            return None;
        }
        self.children.iter_mut().find_map(|child| child.find_mut(path))
    }

    fn find(&self, path: &Path) -> Option<&FileNode> {
        if self.path == path {
            return Some(self);
        }
        if !path.starts_with(&self.path) {
            return None;
        }
        self.children.iter().find_map(|child| child.find(path))
    }
}

/// Tree of the folder opened in the sidebar
#[derive(Debug, Clone, Default)]
pub struct FileTree {
    pub root: Option<FileNode>,
}

impl FileTree {
    /// Open `path` as the root, labelled with its full path and listed immediately
    pub fn open_folder(path: &Path) -> Self {
        let mut root = FileNode::from(TreeEntry {
            name: path.display().to_string(),
            path: path.to_path_buf(),
            is_dir: true,
        });
        root.expand();
        Self { root: Some(root) }
    }

    pub fn find_node(&self, path: &Path) -> Option<&FileNode> {
        self.root.as_ref().and_then(|root| root.find(path))
    }

    /// Expand the directory at `path`, always re-reading it from disk.
    /// Returns `false` if no directory node has that path.
    pub fn expand(&mut self, path: &Path) -> bool {
        match self.root.as_mut().and_then(|root| root.find_mut(path)) {
            Some(node) if node.is_dir => {
                node.expand();
                true
            }
            _ => false,
        }
    }

    /// Hide the children of `path`
    pub fn collapse(&mut self, path: &Path) {
        if let Some(node) = self.root.as_mut().and_then(|root| root.find_mut(path)) {
            node.expanded = false;
        }
    }

    /// Collapse an expanded directory, or expand (and reload) a collapsed one
    pub fn toggle(&mut self, path: &Path) {
        let expanded = self.find_node(path).map(|node| node.expanded);
        match expanded {
            Some(true) => self.collapse(path),
            Some(false) => {
                self.expand(path);
            }
            None => {}
        }
    }

    /// Reload the root listing, keeping open subfolders open
    pub fn refresh(&mut self) {
        if let Some(root) = self.root.as_mut() {
            let mut expanded = HashSet::new();
            root.expanded_paths(&mut expanded);
            root.reload(&expanded);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn names(entries: &[TreeEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_list_children_sorted_dirs_first() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("A.txt"), "").unwrap();
        fs::create_dir(dir.path().join("zdir")).unwrap();

        let entries = list_children(dir.path());
        assert_eq!(names(&entries), vec!["zdir", "A.txt", "b.txt"]);
        assert!(entries[0].is_dir);
        assert_eq!(entries[1].path, dir.path().join("A.txt"));
    }

    #[test]
    fn test_list_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_children(&dir.path().join("missing")).is_empty());
    }

    #[test]
    fn test_subdirectories_load_lazily() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("inner.txt"), "").unwrap();

        let mut tree = FileTree::open_folder(dir.path());
        let node = tree.find_node(&sub).unwrap();
        assert!(!node.children_loaded);
        assert!(node.children.is_empty());

        assert!(tree.expand(&sub));
        let node = tree.find_node(&sub).unwrap();
        assert!(node.children_loaded);
        assert_eq!(node.children[0].path, sub.join("inner.txt"));
    }

    #[test]
    fn test_expand_reflects_external_changes() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();

        let mut tree = FileTree::open_folder(dir.path());
        tree.expand(&sub);
        assert!(tree.find_node(&sub).unwrap().children.is_empty());

        fs::write(sub.join("new.txt"), "").unwrap();
        tree.expand(&sub);
        let children = &tree.find_node(&sub).unwrap().children;
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name, "new.txt");
    }

    #[test]
    fn test_refresh_keeps_open_subfolders() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        let deep = sub.join("deep");
        let closed = dir.path().join("closed");
        fs::create_dir_all(&deep).unwrap();
        fs::create_dir(&closed).unwrap();

        let mut tree = FileTree::open_folder(dir.path());
        tree.expand(&sub);
        tree.expand(&deep);

        fs::write(dir.path().join("added.txt"), "").unwrap();
        fs::write(deep.join("inner.txt"), "").unwrap();
        tree.refresh();

        assert!(tree.find_node(&dir.path().join("added.txt")).is_some());
        assert!(tree.find_node(&sub).unwrap().expanded);
        let deep_node = tree.find_node(&deep).unwrap();
        assert!(deep_node.expanded);
        assert_eq!(deep_node.children[0].name, "inner.txt");
        assert!(!tree.find_node(&closed).unwrap().expanded);
    }

    #[test]
    fn test_same_named_directories_keep_distinct_paths() {
        let dir = tempfile::tempdir().unwrap();
        let left = dir.path().join("left").join("src");
        let right = dir.path().join("right").join("src");
        fs::create_dir_all(&left).unwrap();
        fs::create_dir_all(&right).unwrap();
        fs::write(right.join("only_right.txt"), "").unwrap();

        let mut tree = FileTree::open_folder(dir.path());
        tree.expand(&dir.path().join("left"));
        tree.expand(&dir.path().join("right"));
        tree.expand(&right);

        assert!(tree.find_node(&left).unwrap().children.is_empty());
        assert_eq!(tree.find_node(&right).unwrap().children.len(), 1);
    }

    #[test]
    fn test_toggle_and_files() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        let file = dir.path().join("file.txt");
        fs::create_dir(&sub).unwrap();
        fs::write(&file, "").unwrap();

        let mut tree = FileTree::open_folder(dir.path());
        assert_eq!(tree.root.as_ref().unwrap().name, dir.path().display().to_string());
        assert!(!tree.expand(&file));

        tree.toggle(&sub);
        assert!(tree.find_node(&sub).unwrap().expanded);
        tree.toggle(&sub);
        assert!(!tree.find_node(&sub).unwrap().expanded);
    }
}
