//! Main application state and UI coordination

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use eframe::egui;

use crate::core::commands::{shortcut_table, Command, MENUS};
use crate::core::config::AppConfig;
use crate::core::document::{with_default_extension, SaveOutcome, UNTITLED};
use crate::core::file_system::FileTree;
use crate::core::search::replace_all;
use crate::core::session::{AutoSaveTimer, SessionStore};
use crate::core::tabs::TabRegistry;
use crate::core::zoom::ZoomLevel;
use crate::ui::{
    editor::EditorPanel,
    file_tree::FileTreePanel,
    find_replace::FindReplaceDialog,
    status_bar::{StatusBar, StatusMessage},
};

/// Main application state
pub struct StackPadApp {
    /// Application configuration
    pub config: AppConfig,
    /// Open tabs
    pub tabs: TabRegistry,
    /// Sidebar folder tree
    pub file_tree: FileTree,
    /// Font size shared by every tab
    pub zoom: ZoomLevel,
    /// Session file access
    pub session: SessionStore,
    auto_save: AutoSaveTimer,
    /// Find & Replace window
    pub find_replace: FindReplaceDialog,
    /// Last notice shown in the status bar
    pub status: Option<StatusMessage>,
}

impl StackPadApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_config(AppConfig::load_or_default())
    }

    /// Build the application from `config`, restoring the last session
    pub fn with_config(config: AppConfig) -> Self {
        let session = SessionStore::new(config.session.file.clone());
        tracing::info!("Session file: {}", session.path().display());
        let tabs = TabRegistry::from_session(session.restore_or_empty());

        let file_tree = match config.last_folder {
            Some(ref path) if path.is_dir() => FileTree::open_folder(path),
            _ => FileTree::default(),
        };

        let auto_save = AutoSaveTimer::new(
            Duration::from_secs(config.session.auto_save_interval),
            Instant::now(),
        );

        Self {
            zoom: ZoomLevel::new(config.editor.font_size),
            config,
            tabs,
            file_tree,
            session,
            auto_save,
            find_replace: FindReplaceDialog::default(),
            status: None,
        }
    }

    /// Run a menu or shortcut command
    pub fn execute(&mut self, ctx: &egui::Context, command: Command) {
        tracing::debug!("Command: {:?}", command);
        match command {
            Command::NewTab => {
                self.tabs.create_tab(String::new(), None);
            }
            Command::OpenFile => {
                if let Some(path) = rfd::FileDialog::new().pick_file() {
                    self.open_file(&path);
                }
            }
            Command::OpenFolder => {
                if let Some(path) = rfd::FileDialog::new().pick_folder() {
                    self.open_folder(path);
                }
            }
            Command::Save => self.save_current(),
            Command::SaveAs => self.save_current_as(),
            Command::Exit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            Command::Undo => {
                if let Some(tab) = self.tabs.current_mut() {
                    tab.undo();
                }
            }
            Command::Redo => {
                if let Some(tab) = self.tabs.current_mut() {
                    tab.redo();
                }
            }
            Command::FindReplace => self.find_replace.open(),
            Command::ZoomIn => self.zoom.zoom_in(),
            Command::ZoomOut => self.zoom.zoom_out(),
        }
    }

    /// Open a file in a new tab
    pub fn open_file(&mut self, path: &Path) {
        if let Err(e) = self.tabs.open_file(path) {
            self.report_error("Failed to open file", e);
        }
    }

    /// Show `path` in the sidebar and remember it for the next start
    pub fn open_folder(&mut self, path: PathBuf) {
        self.file_tree = FileTree::open_folder(&path);
        self.config.last_folder = Some(path);
        if let Err(e) = self.config.save() {
            tracing::warn!("Could not remember folder: {:#}", e);
        }
    }

    /// Save the active tab, asking for a path if it has none
    pub fn save_current(&mut self) {
        let Some(id) = self.tabs.current_tab() else {
            return;
        };
        match self.tabs.save(id) {
            Ok(SaveOutcome::Saved(path)) => self.notify(format!("Saved to {}", path.display())),
            Ok(SaveOutcome::NeedsPath) => self.save_current_as(),
            Err(e) => self.report_error("Failed to save", e),
        }
    }

    /// Ask for a path and save the active tab there
    pub fn save_current_as(&mut self) {
        let file_name = self
            .tabs
            .current()
            .map(|tab| tab.title())
            .filter(|title| title != UNTITLED)
            .unwrap_or_else(|| format!("{}.txt", UNTITLED));

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("All files", &["*"])
            .add_filter("Text", &["txt"])
            .set_file_name(file_name)
            .save_file()
        {
            self.save_current_to(with_default_extension(path));
        }
    }

    /// Save the active tab to `path` and rebind it
    pub fn save_current_to(&mut self, path: PathBuf) {
        let Some(id) = self.tabs.current_tab() else {
            return;
        };
        match self.tabs.save_as(id, path.clone()) {
            Ok(()) => self.notify(format!("Saved to {}", path.display())),
            Err(e) => self.report_error("Failed to save", e),
        }
    }

    /// Replace every occurrence of `search` in the active tab
    pub fn replace_in_current(&mut self, search: &str, replace: &str) -> usize {
        let Some(id) = self.tabs.current_tab() else {
            return 0;
        };
        let Some(content) = self.tabs.content(id) else {
            return 0;
        };
        let result = replace_all(content, search, replace);
        self.tabs.set_content(id, result.text);
        self.notify(format!("Replaced {} occurrence(s)", result.count));
        result.count
    }

    /// Write every open tab to the session file
    pub fn snapshot_session(&mut self) {
        if let Err(e) = self.session.snapshot(&self.tabs.to_session()) {
            tracing::error!("Auto-save error: {}", e);
            self.status = Some(StatusMessage::error(format!("Auto-save failed: {}", e)));
        }
    }

    fn notify(&mut self, text: String) {
        self.status = Some(StatusMessage::info(text));
    }

    fn report_error(&mut self, what: &str, error: anyhow::Error) {
        tracing::error!("{}: {:#}", what, error);
        self.status = Some(StatusMessage::error(format!("{}: {:#}", what, error)));
    }

    /// Consume pressed shortcuts before any widget sees them
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let triggered: Vec<Command> = ctx.input_mut(|i| {
            shortcut_table()
                .into_iter()
                .filter_map(|(shortcut, command)| i.consume_shortcut(&shortcut).then_some(command))
                .collect()
        });
        for command in triggered {
            self.execute(ctx, command);
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                for (title, commands) in MENUS {
                    ui.menu_button(*title, |ui| {
                        for &command in *commands {
                            if command.separated() {
                                ui.separator();
                            }
                            let mut button = egui::Button::new(command.label());
                            if let Some(shortcut) = command.shortcut() {
                                button = button.shortcut_text(ctx.format_shortcut(&shortcut));
                            }
                            if ui.add(button).clicked() {
                                ui.close();
                                self.execute(ctx, command);
                            }
                        }
                    });
                }
            });
        });
    }
}

impl eframe::App for StackPadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        let now = Instant::now();
        if self.auto_save.poll(now) {
            self.snapshot_session();
        }
        if let Some(remaining) = self.auto_save.remaining(now) {
            ctx.request_repaint_after(remaining);
        }

        if ctx.input(|i| i.viewport().close_requested()) {
            self.snapshot_session();
        }

        self.render_menu_bar(ctx);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            StatusBar::show(ui, self);
        });

        egui::SidePanel::left("sidebar")
            .resizable(true)
            .default_width(200.0)
            .min_width(120.0)
            .show(ctx, |ui| {
                FileTreePanel::show(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            EditorPanel::show(ui, self);
        });

        if let Some(request) = self.find_replace.show(ctx) {
            self.replace_in_current(&request.search, &request.replace);
        }
    }
}
