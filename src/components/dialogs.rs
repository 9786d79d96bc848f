//! Modal message dialogs.
//!
//! One dialog at a time: whichever info or error message was raised last is
//! shown center-anchored until dismissed with OK, Enter, or Escape. While a
//! dialog is open the app suppresses shortcuts and canvas input, so the
//! dialog behaves modally without a separate window.

use eframe::egui;
use egui::{Align2, Color32, Id, Key, Modifiers, RichText};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageKind {
    #[default]
    Info,
    Error,
}

#[derive(Default)]
pub struct MessageDialog {
    open: bool,
    kind: MessageKind,
    title: String,
    text: String,
}

impl MessageDialog {
    pub fn info(&mut self, title: &str, text: impl Into<String>) {
        self.open = true;
        self.kind = MessageKind::Info;
        self.title = title.to_string();
        self.text = text.into();
    }

    pub fn error(&mut self, title: &str, text: impl Into<String>) {
        self.open = true;
        self.kind = MessageKind::Error;
        self.title = title.to_string();
        self.text = text.into();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }

        // Keyboard: Enter and Esc both dismiss
        let enter = ctx.input_mut(|i| i.consume_key(Modifiers::NONE, Key::Enter));
        let esc = ctx.input_mut(|i| i.consume_key(Modifiers::NONE, Key::Escape));
        let mut should_close = enter || esc;

        egui::Window::new("message_dialog_internal")
            .id(Id::new("message_dialog"))
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(260.0);

                let header = match self.kind {
                    MessageKind::Info => RichText::new(self.title.as_str()).strong(),
                    MessageKind::Error => RichText::new(self.title.as_str())
                        .strong()
                        .color(Color32::from_rgb(0xE0, 0x50, 0x50)),
                };
                ui.label(header);
                ui.separator();
                ui.label(&self.text);
                ui.add_space(8.0);

                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        should_close = true;
                    }
                });
            });

        if should_close {
            self.open = false;
        }
    }
}
