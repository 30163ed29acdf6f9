//! Sidebar panel showing the opened folder

use eframe::egui;

use crate::app::StackPadApp;
use crate::core::file_system::FileNode;

/// File tree panel
pub struct FileTreePanel;

impl FileTreePanel {
    /// Show the file tree panel
    pub fn show(ui: &mut egui::Ui, app: &mut StackPadApp) {
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.heading("Explorer");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if app.file_tree.root.is_some()
                        && ui.button("\u{21BB}").on_hover_text("Refresh").clicked()
                    {
                        app.file_tree.refresh();
                    }
                });
            });

            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("file_tree_scroll")
                .show(ui, |ui| {
                    // Render from a copy so clicks can mutate the tree
                    if let Some(root) = app.file_tree.root.clone() {
                        Self::show_node(ui, &root, app);
                    } else {
                        ui.label("No folder open");
                        ui.add_space(10.0);
                        if ui.button("Open Folder...").clicked() {
                            if let Some(path) = rfd::FileDialog::new().pick_folder() {
                                app.open_folder(path);
                            }
                        }
                    }
                });
        });
    }

    fn show_node(ui: &mut egui::Ui, node: &FileNode, app: &mut StackPadApp) {
        if node.is_dir {
            Self::show_directory(ui, node, app);
        } else {
            Self::show_file(ui, node, app);
        }
    }

    fn show_directory(ui: &mut egui::Ui, node: &FileNode, app: &mut StackPadApp) {
        let icon = if node.expanded { "\u{25BE} \u{1F4C2}" } else { "\u{25B8} \u{1F4C1}" };
        if ui
            .selectable_label(false, format!("{} {}", icon, node.name))
            .on_hover_text(node.path.display().to_string())
            .clicked()
        {
            app.file_tree.toggle(&node.path);
        }

        if node.expanded {
            ui.indent(&node.path, |ui| {
                if node.children_loaded && node.children.is_empty() {
                    ui.weak("(empty)");
                }
                for child in &node.children {
                    Self::show_node(ui, child, app);
                }
            });
        }
    }

    fn show_file(ui: &mut egui::Ui, node: &FileNode, app: &mut StackPadApp) {
        let is_open = app
            .tabs
            .current()
            .and_then(|tab| tab.path())
            .is_some_and(|path| path == node.path);

        ui.horizontal(|ui| {
            ui.add_space(16.0);
            let response = ui
                .selectable_label(is_open, format!("\u{1F4C4} {}", node.name))
                .on_hover_text("Double-click to open");
            if response.double_clicked() {
                app.open_file(&node.path);
            }
        });
    }
}
