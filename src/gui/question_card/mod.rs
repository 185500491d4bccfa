mod note_editor;

use eframe::egui::{
    self,
    Id,
    RichText,
    Ui,
};
pub use note_editor::NoteEditor;

use crate::{
    api::ApiClient,
    core::Question,
    gui::{
        expandable::Expandable,
        theme::Theme,
    },
};

/// Intent the card reports to its owner. The card never mutates pin state or
/// answer content itself; the owner performs the mutation and the card
/// re-renders from the updated question on the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    TogglePin,
    LearnMore,
}

/// One self-contained question/answer/note unit. Owns only its local UI
/// state (expansion and the note editor); the question itself is supplied by
/// the owner every frame.
pub struct QuestionCard {
    expansion: Expandable,
    note: NoteEditor,
}

impl QuestionCard {
    pub fn new(question: &Question) -> Self {
        Self {
            expansion: Expandable::new(),
            note: NoteEditor::new(question.id.clone(), question.note.clone()),
        }
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        question: &Question,
        api: &ApiClient,
        theme: &Theme,
    ) -> Option<CardAction> {
        let mut action = None;

        egui::Frame::group(ui.style())
            .fill(theme.panel(ui.ctx()))
            .corner_radius(6)
            .inner_margin(egui::Margin::symmetric(12, 10))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(theme.heading(ui.ctx(), "Q"));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        let chevron = if self.expansion.is_expanded() { "⏶" } else { "⏷" };
                        if ui.button(chevron).on_hover_text("Expand or collapse").clicked() {
                            self.expansion.toggle();
                        }

                        let learn_more =
                            RichText::new("✨ Learn More").color(theme.cyan(ui.ctx()));
                        if ui.button(learn_more).clicked() {
                            self.expansion.expand();
                            action = Some(CardAction::LearnMore);
                        }

                        let pin_label = if question.is_pinned { "Unpin" } else { "Pin" };
                        let pin_text = RichText::new(pin_label).color(theme.indigo(ui.ctx()));
                        if ui.button(pin_text).clicked() {
                            action = Some(CardAction::TogglePin);
                        }

                        // Remaining width goes to the question text, which
                        // doubles as an expand toggle.
                        ui.with_layout(egui::Layout::left_to_right(egui::Align::Min), |ui| {
                            let title = ui.add(
                                egui::Label::new(RichText::new(&question.question).strong())
                                    .sense(egui::Sense::click())
                                    .wrap(),
                            );
                            if title.clicked() {
                                self.expansion.toggle();
                            }
                        });
                    });
                });

                self.expansion.show(ui, Id::new(("question_card", &question.id)), |ui| {
                    ui.add_space(8.0);
                    egui::Frame::new()
                        .fill(ui.visuals().faint_bg_color)
                        .corner_radius(6)
                        .inner_margin(egui::Margin::symmetric(10, 8))
                        .show(ui, |ui| {
                            if question.answer.is_empty() {
                                ui.label(
                                    RichText::new("No answer yet. Try Learn More.")
                                        .italics()
                                        .color(theme.muted(ui.ctx())),
                                );
                            } else {
                                ui.label(&question.answer);
                            }

                            self.note.show(ui, api, theme);
                        });
                });
            });

        action
    }
}
