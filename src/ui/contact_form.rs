use crate::app::ShowcaseApp;
use chrono::Utc;
use egui::{self, Color32, RichText};
use slidekit::contact::{
    counter, validate_field, CounterLevel, Field, FormError, FormStatus, StatusKind, SubmitOutcome,
};
use slidekit::newsletter::NewsletterError;
use slidekit::toast::Toast;

fn counter_color(level: CounterLevel) -> Color32 {
    match level {
        CounterLevel::Normal => Color32::from_gray(110),
        CounterLevel::Warning => Color32::from_rgb(243, 156, 18),
        CounterLevel::Danger => Color32::from_rgb(231, 76, 60),
    }
}

impl ShowcaseApp {
    pub(crate) fn render_contact_form(&mut self, ui: &mut egui::Ui) {
        ui.heading("Get in touch");
        ui.add_space(8.0);

        for field in [Field::Name, Field::Email, Field::Subject, Field::Message] {
            self.render_field(ui, field);
            ui.add_space(6.0);
        }

        let captcha = ui.checkbox(&mut self.captcha_checked, "I'm not a robot");
        if captcha.changed() {
            self.form_errors.retain(|e| e.field != Field::Captcha);
            if self.captcha_checked {
                self.contact.on_captcha_success();
            } else {
                let err = self.contact.on_captcha_expire();
                self.form_errors.push(err);
            }
        }
        self.render_field_error(ui, Field::Captcha);

        ui.add_space(8.0);
        let label = if self.contact.is_submitting() { "Sending..." } else { "Send Message →" };
        let submit = ui.add_enabled(self.contact.submit_enabled(), egui::Button::new(label));
        if submit.clicked() {
            self.submit_contact_form();
        }

        if let Some(status) = &self.form_status {
            let color = match status.kind {
                StatusKind::Success => Color32::from_rgb(80, 200, 120),
                StatusKind::Error => Color32::from_rgb(231, 76, 60),
            };
            ui.add_space(8.0);
            ui.label(RichText::new(&status.message).color(color));
        }

        ui.add_space(16.0);
        if ui.button("Message the chef directly").clicked() {
            self.message_modal.open();
        }

        ui.separator();
        self.render_newsletter(ui);
    }

    fn render_newsletter(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Newsletter").strong());
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.newsletter.email)
                    .hint_text("you@example.com")
                    .desired_width(240.0),
            );
            let busy = self.newsletter.is_submitting();
            if ui.add_enabled(!busy, egui::Button::new("Subscribe")).clicked() {
                self.subscribe_newsletter();
            }
        });
    }

    fn subscribe_newsletter(&mut self) {
        match self.newsletter.begin_subscribe() {
            Ok(email) => {
                self.toasts.show(Toast::info("Subscribing..."));
                log::debug!("subscribing {}", email);
                // The mailing-list service is external; the showcase accepts locally
                let toast = self.newsletter.finish_subscribe(SubmitOutcome::Delivered);
                self.toasts.show(toast);
            }
            Err(NewsletterError::AlreadySubmitting) => {}
            Err(err) => self.toasts.show(Toast::error(err.to_string())),
        }
    }

    fn render_field(&mut self, ui: &mut egui::Ui, field: Field) {
        let (label, value) = match field {
            Field::Name => ("Name", &mut self.contact.form.name),
            Field::Email => ("Email", &mut self.contact.form.email),
            Field::Subject => ("Subject", &mut self.contact.form.subject),
            Field::Message | Field::Captcha => ("Message", &mut self.contact.form.message),
        };

        ui.horizontal(|ui| {
            ui.label(label);
            if let Some(count) = counter(field, value.chars().count()) {
                ui.label(RichText::new(count.text).small().color(counter_color(count.level)));
            }
        });

        let edit = if field == Field::Message {
            egui::TextEdit::multiline(value).desired_rows(5)
        } else {
            egui::TextEdit::singleline(value)
        };
        let response = ui.add(edit.desired_width(f32::INFINITY));

        if response.changed() {
            self.form_errors.retain(|e| e.field != field);
        }
        if response.lost_focus() {
            if let Some(err) = validate_field(field, self.contact.form.value(field)) {
                self.form_errors.retain(|e| e.field != field);
                self.form_errors.push(err);
            }
        }
        self.render_field_error(ui, field);
    }

    fn render_field_error(&self, ui: &mut egui::Ui, field: Field) {
        if let Some(err) = self.form_errors.iter().find(|e| e.field == field) {
            ui.label(RichText::new(&err.message).small().color(Color32::from_rgb(231, 76, 60)));
        }
    }

    fn submit_contact_form(&mut self) {
        let now = Utc::now();
        match self.contact.begin_submit(now) {
            Ok(payload) => {
                match serde_json::to_string(&payload) {
                    Ok(json) => log::debug!("submitting contact form: {}", json),
                    Err(e) => log::warn!("could not serialize contact payload: {}", e),
                }
                // Delivery belongs to the hosting page; the showcase accepts it locally
                let status = self.contact.finish_submit(now, SubmitOutcome::Delivered);
                self.captcha_checked = false;
                self.form_errors.clear();
                self.form_status = Some(status);
            }
            Err(err) => {
                if let FormError::Invalid(report) = &err {
                    self.form_errors = report.errors.clone();
                }
                if err == FormError::CaptchaRequired {
                    self.form_errors.retain(|e| e.field != Field::Captcha);
                    self.form_errors.push(slidekit::contact::FieldError::new(
                        Field::Captcha,
                        "Please complete the security verification",
                    ));
                }
                self.form_status = Some(FormStatus::from(&err));
            }
        }
    }
}
