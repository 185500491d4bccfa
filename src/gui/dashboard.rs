use eframe::egui::{
    self,
    RichText,
    Ui,
};
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::{
    core::PrepSession,
    gui::theme::Theme,
};

/// Table of the user's saved prep sessions. Returns the id of a session the
/// user asked to open.
pub fn session_table(ui: &mut Ui, sessions: &[PrepSession], theme: &Theme) -> Option<String> {
    let mut open_id = None;

    ui.heading(theme.heading(ui.ctx(), "Interview Prep Sessions"));
    ui.add_space(6.0);

    if sessions.is_empty() {
        ui.label(RichText::new("No sessions yet. Create one in the web app to get started.").weak());
        return None;
    }

    let text_height =
        egui::TextStyle::Body.resolve(ui.style()).size.max(ui.spacing().interact_size.y);

    egui::ScrollArea::vertical().show(ui, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(160.0))
            .column(Column::remainder())
            .column(Column::auto().at_least(80.0))
            .column(Column::auto().at_least(120.0))
            .column(Column::auto().at_least(60.0))
            .header(25.0, |mut header| {
                header.col(|ui| {
                    ui.label(theme.heading(ui.ctx(), "Role"));
                });
                header.col(|ui| {
                    ui.label(theme.heading(ui.ctx(), "Topics"));
                });
                header.col(|ui| {
                    ui.label(theme.heading(ui.ctx(), "Questions"));
                });
                header.col(|ui| {
                    ui.label(theme.heading(ui.ctx(), "Last Updated"));
                });
                header.col(|_ui| {});
            })
            .body(|mut body| {
                body.rows(text_height + 8.0, sessions.len(), |mut row| {
                    let session = &sessions[row.index()];

                    row.col(|ui| {
                        ui.strong(&session.role);
                    });
                    row.col(|ui| {
                        let topics = &session.topics_to_focus;
                        let label = ui.label(topics);
                        if let Some(description) = &session.description {
                            label.on_hover_text(description);
                        }
                    });
                    row.col(|ui| {
                        ui.label(session.questions.len().to_string());
                    });
                    row.col(|ui| {
                        ui.label(session.format_last_updated());
                    });
                    row.col(|ui| {
                        if ui.button("Open").clicked() {
                            open_id = Some(session.id.clone());
                        }
                    });
                });
            });
    });

    open_id
}
