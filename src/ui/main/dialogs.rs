use crate::app::ShowcaseApp;
use egui::{self, RichText};
use slidekit::contact::{FormError, SubmitOutcome};
use slidekit::toast::Toast;

impl ShowcaseApp {
    pub(crate) fn render_dish_modal(&mut self, ctx: &egui::Context) {
        let Some(dish) = self.dish_modal.view(&self.dishes) else {
            return;
        };

        let modal = egui::Modal::new(egui::Id::new("dish_modal")).show(ctx, |ui| {
            ui.set_max_width(520.0);
            ui.label(RichText::new(&dish.title).size(20.0).strong());
            ui.add_space(8.0);

            ui.label(RichText::new("The Story").strong());
            ui.label(&dish.story);
            ui.add_space(6.0);

            ui.label(RichText::new("Key Ingredients").strong());
            for ingredient in &dish.ingredients {
                ui.label(format!("• {ingredient}"));
            }
            ui.add_space(6.0);

            ui.label(RichText::new("Perfect Pairing").strong());
            ui.label(RichText::new(&dish.pairing).italics());
            ui.add_space(8.0);
            ui.button("Close").clicked()
        });

        if modal.inner || modal.should_close() {
            self.dish_modal.click_backdrop();
        }
    }

    pub(crate) fn render_message_modal(&mut self, ctx: &egui::Context) {
        if !self.message_modal.is_open() {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("message_modal")).show(ctx, |ui| {
            ui.set_max_width(480.0);
            ui.label(RichText::new("Send a message to the chef").size(18.0).strong());
            ui.add_space(8.0);

            let form = &mut self.message_modal.form;
            ui.label("Name");
            ui.text_edit_singleline(&mut form.name);
            ui.label("Email");
            ui.text_edit_singleline(&mut form.email);
            ui.label("Subject");
            ui.text_edit_singleline(&mut form.subject);
            ui.label("Message");
            ui.add(egui::TextEdit::multiline(&mut form.message).desired_rows(4));

            ui.add_space(6.0);
            if ui.checkbox(&mut self.message_captcha_checked, "I'm not a robot").changed() {
                if self.message_captcha_checked {
                    self.message_modal.on_captcha_success();
                } else {
                    self.message_modal.on_captcha_expire();
                }
            }

            ui.add_space(8.0);
            let mut close = false;
            ui.horizontal(|ui| {
                let label = if self.message_modal.is_submitting() { "Sending..." } else { "Send" };
                if ui.add_enabled(!self.message_modal.is_submitting(), egui::Button::new(label)).clicked() {
                    self.send_modal_message();
                }
                close = ui.button("Cancel").clicked();
            });
            close
        });

        if modal.inner || modal.should_close() {
            self.message_modal.click_backdrop();
        }
    }

    fn send_modal_message(&mut self) {
        match self.message_modal.begin_send() {
            Ok(payload) => {
                log::debug!("sending modal message from {}", payload.email);
                // Delivery belongs to the hosting page; the showcase accepts it locally
                let toast = self.message_modal.finish_send(SubmitOutcome::Delivered);
                self.message_captcha_checked = false;
                self.toasts.show(toast);
            }
            Err(FormError::CaptchaRequired) => {
                self.toasts.show(Toast::error("Please complete the CAPTCHA verification."));
            }
            Err(FormError::Invalid(report)) => {
                let first = report
                    .errors
                    .first()
                    .map(|e| e.message.clone())
                    .unwrap_or_else(|| FormError::Invalid(report.clone()).to_string());
                self.toasts.show(Toast::error(first));
            }
            Err(err) => log::debug!("modal send ignored: {}", err),
        }
    }
}
