//! Bottom status line

use eframe::egui;

use crate::app::StackPadApp;

/// A notice shown until the next one replaces it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

pub struct StatusBar;

impl StatusBar {
    pub fn show(ui: &mut egui::Ui, app: &StackPadApp) {
        ui.horizontal(|ui| {
            if let Some(ref status) = app.status {
                if status.is_error {
                    ui.colored_label(ui.visuals().error_fg_color, &status.text);
                } else {
                    ui.label(&status.text);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("{} pt", app.zoom.size()));
                ui.separator();
                ui.label(format!("{} tab(s)", app.tabs.len()));
                if let Some(path) = app.tabs.current().and_then(|tab| tab.path()) {
                    ui.separator();
                    ui.label(path.display().to_string());
                }
            });
        });
    }
}
