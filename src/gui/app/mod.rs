use std::collections::HashMap;

use eframe::egui;

use crate::{
    api::ApiClient,
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        AuthResponse,
        PrepSession,
    },
    gui::{
        auth_panel::{
            AuthEvent,
            AuthPanel,
        },
        dashboard,
        error_modal::ErrorModal,
        message_overlay::MessageOverlay,
        question_card::{
            CardAction,
            QuestionCard,
        },
        theme::{
            set_theme,
            Theme,
        },
        toast::Toasts,
        top_bar::{
            TopBar,
            TopBarAction,
        },
    },
    session::SessionStore,
    settings::SettingsData,
};

/// The session currently on screen plus per-question card state. Cards are
/// created lazily and live as long as the session stays open; opening a
/// different session discards them, which is the only thing that resets
/// card-local state.
struct OpenSession {
    session: PrepSession,
    cards: HashMap<String, QuestionCard>,
}

pub struct PrepwiseApp {
    // Configuration
    settings: SettingsData,

    // User context
    session_store: SessionStore,
    api: ApiClient,

    // Data
    sessions: Vec<PrepSession>,
    open_session: Option<OpenSession>,

    // UI state
    theme: Theme,
    auth_panel: AuthPanel,
    toasts: Toasts,
    message_overlay: MessageOverlay,
    error_modal: ErrorModal,

    task_manager: TaskManager,
}

impl PrepwiseApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = SettingsData::load();
        let session_store = SessionStore::restore();

        let api = ApiClient::new(&settings.api_base_url, session_store.token().map(str::to_string))
            .expect("Failed to create HTTP client");

        let theme = Theme::prepwise();
        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_theme(if settings.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        let task_manager = TaskManager::new();
        let mut message_overlay = MessageOverlay::default();

        if session_store.is_signed_in() {
            message_overlay.set_message("Restoring session...");
            task_manager.load_profile(api.clone());
        }

        Self {
            settings,
            session_store,
            api,
            sessions: Vec::new(),
            open_session: None,
            theme,
            auth_panel: AuthPanel::new(),
            toasts: Toasts::default(),
            message_overlay,
            error_modal: ErrorModal::default(),
            task_manager,
        }
    }
}

impl eframe::App for PrepwiseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        if self.message_overlay.is_active() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        self.persist_theme_preference(ctx);

        if let Some(action) = TopBar::show(ctx, &self.session_store, &self.theme) {
            match action {
                TopBarAction::ShowSessions => self.open_session = None,
                TopBarAction::Logout => self.logout(),
            }
        }

        if !self.session_store.is_signed_in() {
            self.show_auth_view(ctx);
        } else if self.open_session.is_some() {
            self.show_session_view(ctx);
        } else {
            self.show_dashboard_view(ctx);
        }

        self.toasts.show(ctx, &self.theme);
        self.message_overlay.show(ctx, &self.theme);
        self.error_modal.show(ctx);
    }
}

impl PrepwiseApp {
    fn show_auth_view(&mut self, ctx: &egui::Context) {
        let mut event = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            event = self.auth_panel.show(ui, &self.theme);
        });

        match event {
            Some(AuthEvent::Login { email, password }) => {
                self.task_manager.login(self.api.clone(), email, password);
            }
            Some(AuthEvent::SignUp { name, email, password }) => {
                self.task_manager.sign_up(self.api.clone(), name, email, password);
            }
            None => {}
        }
    }

    fn show_dashboard_view(&mut self, ctx: &egui::Context) {
        let mut open_id = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            open_id = dashboard::session_table(ui, &self.sessions, &self.theme);
        });

        if let Some(session_id) = open_id {
            self.message_overlay.set_message("Loading questions...");
            self.task_manager.open_session(self.api.clone(), session_id);
        }
    }

    fn show_session_view(&mut self, ctx: &egui::Context) {
        let mut go_back = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(open) = &mut self.open_session else {
                return;
            };

            ui.horizontal(|ui| {
                if ui.button("⬅ Sessions").clicked() {
                    go_back = true;
                }
                ui.heading(self.theme.heading(ui.ctx(), &open.session.role));
                ui.label(
                    egui::RichText::new(&open.session.topics_to_focus)
                        .color(self.theme.muted(ui.ctx())),
                );
            });
            ui.separator();
            ui.add_space(4.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                for question in &open.session.questions {
                    let card = open
                        .cards
                        .entry(question.id.clone())
                        .or_insert_with(|| QuestionCard::new(question));

                    match card.show(ui, question, &self.api, &self.theme) {
                        Some(CardAction::TogglePin) => {
                            self.task_manager.toggle_pin(self.api.clone(), question.id.clone());
                        }
                        Some(CardAction::LearnMore) => {
                            self.task_manager.fetch_elaboration(
                                self.api.clone(),
                                question.id.clone(),
                                question.question.clone(),
                            );
                        }
                        None => {}
                    }

                    ui.add_space(8.0);
                }
            });
        });

        if go_back {
            self.open_session = None;
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::LoggedIn(result) => self.handle_auth_result(result, "Login successful!"),
            TaskResult::SignedUp(result) => {
                self.handle_auth_result(result, "Account created, welcome!")
            }

            TaskResult::ProfileLoaded(result) => match result {
                Ok(user) => {
                    self.session_store.set_user(user);
                    self.load_sessions();
                }
                Err(e) => {
                    // Stored token no longer valid; back to the login form.
                    log::warn!("Profile restore failed: {}", e);
                    self.message_overlay.clear_message();
                    self.logout_silently();
                    self.toasts.error("Session expired, please log in again");
                }
            },

            TaskResult::SessionsLoaded(result) => {
                self.message_overlay.clear_message();
                match result {
                    Ok(sessions) => self.sessions = sessions,
                    Err(e) => {
                        self.error_modal.show_error(
                            "Load Error",
                            "Unable to load your prep sessions",
                            Some(&e),
                        );
                    }
                }
            }

            TaskResult::SessionOpened(result) => {
                self.message_overlay.clear_message();
                match result {
                    Ok(session) => {
                        self.open_session =
                            Some(OpenSession { session, cards: HashMap::new() });
                    }
                    Err(e) => {
                        self.error_modal.show_error(
                            "Load Error",
                            "Unable to open that session",
                            Some(&e),
                        );
                    }
                }
            }

            TaskResult::PinToggled { question_id, result } => match result {
                Ok(updated) => {
                    if let Some(question) = self.find_question_mut(&question_id) {
                        question.is_pinned = updated.is_pinned;
                    }
                }
                Err(e) => {
                    log::warn!("Pin toggle failed for question {}: {}", question_id, e);
                    self.toasts.error("Couldn't update the pin, try again");
                }
            },

            TaskResult::Elaboration { question_id, result } => match result {
                Ok(answer) => {
                    if let Some(question) = self.find_question_mut(&question_id) {
                        question.answer = answer;
                    }
                }
                Err(e) => {
                    log::warn!("Elaboration failed for question {}: {}", question_id, e);
                    self.toasts.error("Couldn't fetch an explanation, try again");
                }
            },
        }
    }

    fn handle_auth_result(&mut self, result: Result<AuthResponse, String>, success_message: &str) {
        match result {
            Ok(auth) => {
                self.api = self.api.with_token(auth.token.clone());
                self.session_store.sign_in(auth.token, auth.user);
                self.session_store.persist();
                self.auth_panel.finish(None);
                self.toasts.success(success_message);
                self.load_sessions();
            }
            Err(e) => {
                self.auth_panel.finish(Some(e.clone()));
                self.toasts.error(e);
            }
        }
    }

    fn find_question_mut(&mut self, question_id: &str) -> Option<&mut crate::core::Question> {
        self.open_session
            .as_mut()?
            .session
            .questions
            .iter_mut()
            .find(|q| q.id == question_id)
    }

    fn load_sessions(&mut self) {
        self.message_overlay.set_message("Loading sessions...");
        self.task_manager.load_sessions(self.api.clone());
    }

    fn logout(&mut self) {
        self.logout_silently();
        self.toasts.success("Successfully logged out");
    }

    fn logout_silently(&mut self) {
        self.session_store.clear();
        self.session_store.clear_persisted();
        self.api = self.api.without_token();
        self.sessions.clear();
        self.open_session = None;
        self.auth_panel = AuthPanel::new();
    }

    fn persist_theme_preference(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.style().visuals.dark_mode;
        if dark_mode != self.settings.dark_mode {
            self.settings.dark_mode = dark_mode;
            self.settings.save();
        }
    }
}
