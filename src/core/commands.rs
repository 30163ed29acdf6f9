//! User-invoked commands, their menu placement and keyboard shortcuts

use egui::{Key, KeyboardShortcut, Modifiers};

/// Everything the menus can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    NewTab,
    OpenFile,
    OpenFolder,
    Save,
    SaveAs,
    Exit,
    Undo,
    Redo,
    FindReplace,
    ZoomIn,
    ZoomOut,
}

/// Menu bar layout: (menu title, entries)
pub const MENUS: &[(&str, &[Command])] = &[
    (
        "File",
        &[
            Command::NewTab,
            Command::OpenFile,
            Command::OpenFolder,
            Command::Save,
            Command::SaveAs,
            Command::Exit,
        ],
    ),
    ("Edit", &[Command::Undo, Command::Redo]),
    ("Search", &[Command::FindReplace]),
    ("View", &[Command::ZoomIn, Command::ZoomOut]),
];

impl Command {
    pub fn label(self) -> &'static str {
        match self {
            Command::NewTab => "New Tab",
            Command::OpenFile => "Open File",
            Command::OpenFolder => "Open Folder",
            Command::Save => "Save",
            Command::SaveAs => "Save As",
            Command::Exit => "Exit",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::FindReplace => "Find & Replace",
            Command::ZoomIn => "Zoom In",
            Command::ZoomOut => "Zoom Out",
        }
    }

    /// Whether a separator goes above this entry in its menu
    pub fn separated(self) -> bool {
        matches!(self, Command::Exit)
    }

    /// Primary shortcut, shown next to the menu entry
    pub fn shortcut(self) -> Option<KeyboardShortcut> {
        shortcut_table()
            .into_iter()
            .find(|(_, command)| *command == self)
            .map(|(shortcut, _)| shortcut)
    }
}

/// All shortcuts in match order.
///
/// egui matches a plain Ctrl shortcut even when Shift is also held, so the
/// Shift variants come before the plain ones using the same key.
pub fn shortcut_table() -> Vec<(KeyboardShortcut, Command)> {
    let cmd = Modifiers::COMMAND;
    let cmd_shift = Modifiers::COMMAND | Modifiers::SHIFT;

    vec![
        (KeyboardShortcut::new(cmd_shift, Key::S), Command::SaveAs),
        (KeyboardShortcut::new(cmd_shift, Key::O), Command::OpenFolder),
        (KeyboardShortcut::new(cmd_shift, Key::Z), Command::Redo),
        (KeyboardShortcut::new(cmd, Key::T), Command::NewTab),
        (KeyboardShortcut::new(cmd, Key::O), Command::OpenFile),
        (KeyboardShortcut::new(cmd, Key::S), Command::Save),
        (KeyboardShortcut::new(cmd, Key::Q), Command::Exit),
        (KeyboardShortcut::new(cmd, Key::Z), Command::Undo),
        (KeyboardShortcut::new(cmd, Key::Y), Command::Redo),
        (KeyboardShortcut::new(cmd, Key::F), Command::FindReplace),
        (KeyboardShortcut::new(cmd, Key::H), Command::FindReplace),
        (KeyboardShortcut::new(cmd, Key::Equals), Command::ZoomIn),
        (KeyboardShortcut::new(cmd, Key::Plus), Command::ZoomIn),
        (KeyboardShortcut::new(cmd, Key::Minus), Command::ZoomOut),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_layout() {
        let titles: Vec<&str> = MENUS.iter().map(|(title, _)| *title).collect();
        assert_eq!(titles, vec!["File", "Edit", "Search", "View"]);

        let file: Vec<&str> = MENUS[0].1.iter().map(|c| c.label()).collect();
        assert_eq!(
            file,
            vec!["New Tab", "Open File", "Open Folder", "Save", "Save As", "Exit"]
        );
    }

    #[test]
    fn test_shift_variants_come_first() {
        let table = shortcut_table();
        for (i, (shortcut, _)) in table.iter().enumerate() {
            if shortcut.modifiers.shift {
                continue;
            }
            let shadowed = table[i + 1..].iter().any(|(later, _)| {
                later.modifiers.shift && later.logical_key == shortcut.logical_key
            });
            assert!(!shadowed, "{:?} would shadow a Shift shortcut", shortcut);
        }
    }

    #[test]
    fn test_primary_shortcuts() {
        assert_eq!(
            Command::Save.shortcut(),
            Some(KeyboardShortcut::new(Modifiers::COMMAND, Key::S))
        );
        assert_eq!(
            Command::Redo.shortcut(),
            Some(KeyboardShortcut::new(
                Modifiers::COMMAND | Modifiers::SHIFT,
                Key::Z
            ))
        );
    }
}
