use std::sync::mpsc::{
    self,
    Receiver,
};

use eframe::egui::{
    self,
    RichText,
    Ui,
};

use crate::{
    api::ApiClient,
    gui::theme::Theme,
};

/// Edit/save/view cycle for the personal note attached to one question.
///
/// Exactly one of the read-only view or the editor is shown at a time, and
/// the read-only view additionally requires a note that has been saved at
/// least once (or was supplied at creation). A failed save keeps the draft
/// so the user can retry.
///
/// The save result arrives over a channel owned by this editor; if the card
/// is dropped mid-save, the receiver goes with it and the late result is
/// discarded without touching dead state.
pub struct NoteEditor {
    question_id: String,
    draft: String,
    is_saving: bool,
    is_saved: bool,
    is_editing: bool,
    save_failed: bool,
    save_receiver: Option<Receiver<Result<(), String>>>,
}

impl NoteEditor {
    pub fn new(question_id: impl Into<String>, existing_note: Option<String>) -> Self {
        let draft = existing_note.unwrap_or_default();
        let has_note = !draft.is_empty();

        Self {
            question_id: question_id.into(),
            draft,
            is_saving: false,
            is_saved: has_note,
            is_editing: !has_note,
            save_failed: false,
            save_receiver: None,
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub fn is_viewing(&self) -> bool {
        self.is_saved && !self.is_editing
    }

    /// Save guard: a non-empty trimmed draft and no save already in flight.
    pub fn can_save(&self) -> bool {
        !self.is_saving && !self.draft.trim().is_empty()
    }

    pub fn begin_edit(&mut self) {
        self.is_editing = true;
    }

    fn begin_save(&mut self, api: &ApiClient, ctx: &egui::Context) {
        if !self.can_save() {
            return;
        }

        self.is_saving = true;
        self.save_failed = false;

        let (sender, receiver) = mpsc::channel();
        self.save_receiver = Some(receiver);

        let api = api.clone();
        let question_id = self.question_id.clone();
        let note = self.draft.clone();
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create save runtime");
            let result = rt.block_on(async {
                api.save_note(&question_id, &note).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    fn poll(&mut self) {
        let Some(receiver) = &self.save_receiver else {
            return;
        };

        if let Ok(result) = receiver.try_recv() {
            self.save_receiver = None;
            self.apply_save_result(result);
        }
    }

    fn apply_save_result(&mut self, result: Result<(), String>) {
        self.is_saving = false;

        match result {
            Ok(()) => {
                self.is_saved = true;
                self.is_editing = false;
                self.save_failed = false;
            }
            Err(e) => {
                // Draft stays untouched for a manual retry.
                log::warn!("Failed to save note for question {}: {}", self.question_id, e);
                self.save_failed = true;
            }
        }
    }

    pub fn show(&mut self, ui: &mut Ui, api: &ApiClient, theme: &Theme) {
        self.poll();

        ui.add_space(6.0);
        ui.label(RichText::new("Your Note:").strong());

        if self.is_viewing() {
            ui.horizontal_wrapped(|ui| {
                ui.label(&self.draft);
                if ui.link(RichText::new("Edit").color(theme.amber(ui.ctx()))).clicked() {
                    self.begin_edit();
                }
            });
        } else {
            ui.add(
                egui::TextEdit::multiline(&mut self.draft)
                    .desired_rows(2)
                    .desired_width(f32::INFINITY)
                    .hint_text("Write a note about this question..."),
            );

            ui.horizontal(|ui| {
                let label = if self.is_saving { "Saving..." } else { "Save Note" };
                if ui.add_enabled(self.can_save(), egui::Button::new(label)).clicked() {
                    self.begin_save(api, ui.ctx());
                }

                if self.save_failed {
                    ui.label(
                        RichText::new("Couldn't save, try again").color(theme.red(ui.ctx())).small(),
                    );
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_existing_note_starts_editing_with_save_disabled() {
        let editor = NoteEditor::new("q1", None);

        assert!(!editor.is_viewing());
        assert!(editor.draft().is_empty());
        assert!(!editor.can_save());
    }

    #[test]
    fn existing_note_starts_in_view_mode() {
        let editor = NoteEditor::new("q1", Some("Review later".to_string()));

        assert!(editor.is_viewing());
        assert_eq!(editor.draft(), "Review later");
    }

    #[test]
    fn edit_keeps_the_previous_text() {
        let mut editor = NoteEditor::new("q1", Some("Review later".to_string()));
        editor.begin_edit();

        assert!(!editor.is_viewing());
        assert_eq!(editor.draft(), "Review later");
    }

    #[test]
    fn whitespace_only_draft_cannot_be_saved() {
        let mut editor = NoteEditor::new("q1", None);
        editor.draft = "   \n".to_string();

        assert!(!editor.can_save());
    }

    #[test]
    fn save_in_flight_blocks_a_second_save() {
        let mut editor = NoteEditor::new("q1", None);
        editor.draft = "Practice recursion".to_string();
        assert!(editor.can_save());

        editor.is_saving = true;
        assert!(!editor.can_save());
    }

    #[test]
    fn successful_save_transitions_to_viewing_the_submitted_text() {
        let mut editor = NoteEditor::new("q1", None);
        editor.draft = "Practice recursion".to_string();
        editor.is_saving = true;

        editor.apply_save_result(Ok(()));

        assert!(editor.is_viewing());
        assert!(!editor.is_saving());
        assert_eq!(editor.draft(), "Practice recursion");
        assert!(!editor.save_failed);
    }

    #[test]
    fn failed_save_keeps_editing_and_the_draft() {
        let mut editor = NoteEditor::new("q1", None);
        editor.draft = "Practice recursion".to_string();
        editor.is_saving = true;

        editor.apply_save_result(Err("503 from upstream".to_string()));

        assert!(!editor.is_viewing());
        assert!(!editor.is_saving());
        assert_eq!(editor.draft(), "Practice recursion");
        assert!(editor.save_failed);
        assert!(editor.can_save());
    }

    #[test]
    fn viewing_and_editing_are_mutually_exclusive() {
        // Never-saved card: editing only.
        let fresh = NoteEditor::new("q1", None);
        assert!(!fresh.is_viewing());

        // Saved card: viewing until Edit, then editing.
        let mut saved = NoteEditor::new("q2", Some("note".to_string()));
        assert!(saved.is_viewing());
        saved.begin_edit();
        assert!(!saved.is_viewing());
    }
}
