//! Find & Replace window

use eframe::egui;

/// Search and replacement text submitted from the window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceRequest {
    pub search: String,
    pub replace: String,
}

/// Dialog for replacing text in the active tab
#[derive(Debug, Default)]
pub struct FindReplaceDialog {
    pub visible: bool,
    pub search: String,
    pub replace: String,
}

impl FindReplaceDialog {
    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Show the window; returns a request when "Replace All" is clicked
    pub fn show(&mut self, ctx: &egui::Context) -> Option<ReplaceRequest> {
        let mut result = None;

        if self.visible {
            let mut open = true;
            egui::Window::new("Find & Replace")
                .open(&mut open)
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    egui::Grid::new("find_replace_grid")
                        .num_columns(2)
                        .show(ui, |ui| {
                            ui.label("Find:");
                            ui.add(egui::TextEdit::singleline(&mut self.search).desired_width(200.0));
                            ui.end_row();

                            ui.label("Replace:");
                            ui.add(egui::TextEdit::singleline(&mut self.replace).desired_width(200.0));
                            ui.end_row();
                        });

                    ui.horizontal(|ui| {
                        if ui
                            .add_enabled(!self.search.is_empty(), egui::Button::new("Replace All"))
                            .clicked()
                        {
                            result = Some(ReplaceRequest {
                                search: self.search.clone(),
                                replace: self.replace.clone(),
                            });
                        }
                        if ui.button("Close").clicked() {
                            self.visible = false;
                        }
                    });
                });
            if !open {
                self.visible = false;
            }
        }

        result
    }
}
