use eframe::egui::{
    self,
    RichText,
    Ui,
};

use crate::gui::theme::Theme;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    Login,
    SignUp,
}

/// Credentials the user submitted; the app hands them to the task manager.
pub enum AuthEvent {
    Login { email: String, password: String },
    SignUp { name: String, email: String, password: String },
}

/// Login/signup forms shown while signed out. Validation failures surface
/// inline; server-side failures come back through `finish` and also toast.
pub struct AuthPanel {
    mode: AuthMode,
    name: String,
    email: String,
    password: String,
    error: Option<String>,
    in_flight: bool,
}

impl AuthPanel {
    pub fn new() -> Self {
        Self {
            mode: AuthMode::Login,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            error: None,
            in_flight: false,
        }
    }

    /// Called by the app when the login/signup task completes.
    pub fn finish(&mut self, error: Option<String>) {
        self.in_flight = false;
        self.error = error;
    }

    pub fn show(&mut self, ui: &mut Ui, theme: &Theme) -> Option<AuthEvent> {
        let mut event = None;

        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.15);
            ui.set_max_width(360.0);

            egui::Frame::group(ui.style())
                .fill(theme.panel(ui.ctx()))
                .corner_radius(8)
                .inner_margin(egui::Margin::same(24))
                .show(ui, |ui| {
                    match self.mode {
                        AuthMode::Login => {
                            ui.heading("Welcome Back!");
                            ui.label(RichText::new("Enter your details to login").weak());
                        }
                        AuthMode::SignUp => {
                            ui.heading("Create an Account");
                            ui.label(RichText::new("Join us today by entering your details").weak());
                        }
                    }
                    ui.add_space(12.0);

                    if self.mode == AuthMode::SignUp {
                        ui.label("Full Name");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.name)
                                .hint_text("John Doe")
                                .desired_width(f32::INFINITY),
                        );
                        ui.add_space(6.0);
                    }

                    ui.label("Email Address");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.email)
                            .hint_text("john@email.com")
                            .desired_width(f32::INFINITY),
                    );
                    ui.add_space(6.0);

                    ui.label("Password");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.password)
                            .hint_text("Minimum 8 Characters")
                            .password(true)
                            .desired_width(f32::INFINITY),
                    );

                    if let Some(error) = &self.error {
                        ui.add_space(6.0);
                        ui.label(RichText::new(error).color(theme.red(ui.ctx())).small());
                    }

                    ui.add_space(12.0);

                    let submit_label = match (self.mode, self.in_flight) {
                        (AuthMode::Login, false) => "LOGIN",
                        (AuthMode::Login, true) => "Logging in...",
                        (AuthMode::SignUp, false) => "SIGN UP",
                        (AuthMode::SignUp, true) => "Signing up...",
                    };

                    let submit = ui.add_enabled(
                        !self.in_flight,
                        egui::Button::new(submit_label).min_size(egui::vec2(ui.available_width(), 32.0)),
                    );
                    if submit.clicked() {
                        event = self.submit();
                    }

                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        let (prompt, link) = match self.mode {
                            AuthMode::Login => ("Don't have an account?", "SignUp"),
                            AuthMode::SignUp => ("Already have an account?", "Login"),
                        };
                        ui.small(prompt);
                        if ui.link(RichText::new(link).color(theme.amber(ui.ctx())).small()).clicked()
                        {
                            self.mode = match self.mode {
                                AuthMode::Login => AuthMode::SignUp,
                                AuthMode::SignUp => AuthMode::Login,
                            };
                            self.error = None;
                        }
                    });
                });
        });

        event
    }

    fn submit(&mut self) -> Option<AuthEvent> {
        if let Some(error) = self.validate() {
            self.error = Some(error);
            return None;
        }

        self.error = None;
        self.in_flight = true;

        Some(match self.mode {
            AuthMode::Login => {
                AuthEvent::Login { email: self.email.clone(), password: self.password.clone() }
            }
            AuthMode::SignUp => AuthEvent::SignUp {
                name: self.name.trim().to_string(),
                email: self.email.clone(),
                password: self.password.clone(),
            },
        })
    }

    fn validate(&self) -> Option<String> {
        if self.mode == AuthMode::SignUp && self.name.trim().is_empty() {
            return Some("Please enter your full name".to_string());
        }
        if !validate_email(&self.email) {
            return Some("Please enter a valid email address".to_string());
        }
        if self.password.is_empty() {
            return Some("Please enter the password".to_string());
        }
        if self.mode == AuthMode::SignUp && self.password.len() < 8 {
            return Some("Password must be at least 8 characters".to_string());
        }
        None
    }
}

impl Default for AuthPanel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn validate_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !email.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(validate_email("john@email.com"));
        assert!(validate_email("a.b+c@sub.domain.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!validate_email(""));
        assert!(!validate_email("john"));
        assert!(!validate_email("john@"));
        assert!(!validate_email("@email.com"));
        assert!(!validate_email("john@email"));
        assert!(!validate_email("john@.com"));
        assert!(!validate_email("jo hn@email.com"));
    }

    #[test]
    fn submit_requires_valid_fields() {
        let mut panel = AuthPanel::new();
        panel.email = "not-an-email".to_string();
        panel.password = "hunter22".to_string();

        assert!(panel.submit().is_none());
        assert!(panel.error.is_some());
        assert!(!panel.in_flight);
    }

    #[test]
    fn submit_emits_login_event_and_marks_in_flight() {
        let mut panel = AuthPanel::new();
        panel.email = "john@email.com".to_string();
        panel.password = "hunter22".to_string();

        match panel.submit() {
            Some(AuthEvent::Login { email, .. }) => assert_eq!(email, "john@email.com"),
            _ => panic!("expected a login event"),
        }
        assert!(panel.in_flight);
        assert!(panel.error.is_none());
    }

    #[test]
    fn finish_with_error_re_enables_the_form() {
        let mut panel = AuthPanel::new();
        panel.in_flight = true;

        panel.finish(Some("Invalid credentials".to_string()));

        assert!(!panel.in_flight);
        assert_eq!(panel.error.as_deref(), Some("Invalid credentials"));
    }
}
