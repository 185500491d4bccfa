use eframe::egui::{
    self,
    containers,
};

use crate::{
    gui::theme::Theme,
    session::SessionStore,
};

pub enum TopBarAction {
    ShowSessions,
    Logout,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        session: &SessionStore,
        theme: &Theme,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.label(theme.brand(ctx, "PrepWise").size(16.0));
                ui.add_space(8.0);

                if session.is_signed_in() {
                    ui.menu_button("File", |ui| {
                        if ui.button("My Sessions").clicked() {
                            action = Some(TopBarAction::ShowSessions);
                        }
                        if ui.button("Quit").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(action_out) = Self::show_profile(ui, session, theme) {
                        action = Some(action_out);
                    }
                });
            });
        });

        action
    }

    fn show_profile(
        ui: &mut egui::Ui,
        session: &SessionStore,
        theme: &Theme,
    ) -> Option<TopBarAction> {
        let mut action = None;

        if let Some(user) = session.user() {
            if ui.link(egui::RichText::new("Logout").color(theme.amber(ui.ctx()))).clicked() {
                action = Some(TopBarAction::Logout);
            }
            ui.label(egui::RichText::new(&user.name).strong());
        } else if session.is_signed_in() {
            // Token restored but the profile fetch hasn't landed yet.
            ui.small("Signing in...");
        }

        let (color, tooltip) = if session.is_signed_in() {
            (theme.green(ui.ctx()), "Signed in")
        } else {
            (theme.red(ui.ctx()), "Signed out")
        };
        ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);

        action
    }
}
