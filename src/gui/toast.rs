use std::time::{
    Duration,
    Instant,
};

use eframe::egui::{
    self,
    RichText,
};

use crate::gui::theme::Theme;

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, PartialEq, Eq)]
enum ToastKind {
    Success,
    Error,
}

struct Toast {
    kind: ToastKind,
    text: String,
    expires_at: Instant,
}

/// Transient top-center notices for outcomes the user should see but not
/// acknowledge: login success, pin failures and the like. Card-level note
/// saves deliberately do not use this channel.
#[derive(Default)]
pub struct Toasts {
    queue: Vec<Toast>,
}

impl Toasts {
    pub fn success(&mut self, text: impl Into<String>) {
        self.push(ToastKind::Success, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(ToastKind::Error, text.into());
    }

    fn push(&mut self, kind: ToastKind, text: String) {
        self.queue.push(Toast { kind, text, expires_at: Instant::now() + TOAST_LIFETIME });
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        let now = Instant::now();
        self.queue.retain(|t| t.expires_at > now);

        if self.queue.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 40.0))
            .show(ctx, |ui| {
                for toast in &self.queue {
                    let accent = match toast.kind {
                        ToastKind::Success => theme.green(ctx),
                        ToastKind::Error => theme.red(ctx),
                    };

                    egui::Frame::window(ui.style())
                        .stroke(egui::Stroke::new(1.5, accent))
                        .corner_radius(6)
                        .inner_margin(egui::Margin::symmetric(12, 8))
                        .show(ui, |ui| {
                            let icon = match toast.kind {
                                ToastKind::Success => "✔",
                                ToastKind::Error => "⚠",
                            };
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(icon).color(accent));
                                ui.label(&toast.text);
                            });
                        });
                    ui.add_space(4.0);
                }
            });

        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
