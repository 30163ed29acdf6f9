//! Tab strip and text area for the active tab

use eframe::egui;

use crate::app::StackPadApp;

/// Editor panel
pub struct EditorPanel;

impl EditorPanel {
    /// Show the editor panel
    pub fn show(ui: &mut egui::Ui, app: &mut StackPadApp) {
        ui.vertical(|ui| {
            Self::show_tabs(ui, app);
            ui.separator();

            let font = egui::FontId::monospace(app.zoom.points());
            let time = ui.input(|i| i.time);

            egui::ScrollArea::vertical()
                .id_salt("editor_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let Some(tab) = app.tabs.current_mut() else {
                        return;
                    };

                    let id = tab.id();
                    let response = egui::TextEdit::multiline(&mut tab.content)
                        .id_salt(("tab", id))
                        .font(font)
                        .desired_width(f32::INFINITY)
                        .desired_rows(30)
                        .lock_focus(true)
                        .show(ui);

                    if response.response.changed() {
                        tab.mark_edited();
                    }
                    tab.feed_history(time);
                });
        });
    }

    /// Show one selectable label per open tab
    fn show_tabs(ui: &mut egui::Ui, app: &mut StackPadApp) {
        let current = app.tabs.current_tab();
        let mut selected = None;

        egui::ScrollArea::horizontal()
            .id_salt("tab_strip")
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    for tab in app.tabs.iter() {
                        let label = ui
                            .selectable_label(current == Some(tab.id()), tab.display_title());
                        let label = match tab.path() {
                            Some(path) => label.on_hover_text(path.display().to_string()),
                            None => label,
                        };
                        if label.clicked() {
                            selected = Some(tab.id());
                        }
                    }
                });
            });

        if let Some(id) = selected {
            app.tabs.select(id);
        }
    }
}
