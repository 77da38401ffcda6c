use std::fmt;
use thiserror::Error;

use crate::config;

pub const DEFAULT_SUBJECT: &str = "Demande de cotation";

/// Choices offered by the subject dropdown. The form itself accepts any string.
pub const SUBJECT_OPTIONS: [&str; 4] = [
    DEFAULT_SUBJECT,
    "Partenariat technique",
    "Support & Maintenance",
    "Autre",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn key(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Nom Complet",
            ContactField::Email => "Email Professionnel",
            ContactField::Subject => "Objet de la demande",
            ContactField::Message => "Message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Veuillez renseigner : {}", join_labels(.missing))]
pub struct ValidationError {
    missing: Vec<ContactField>,
}

impl ValidationError {
    /// Failing fields in form order.
    pub fn missing(&self) -> &[ContactField] {
        &self.missing
    }

    pub fn is_missing(&self, field: ContactField) -> bool {
        self.missing.contains(&field)
    }
}

fn join_labels(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(ContactField::label)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: DEFAULT_SUBJECT.to_string(),
            message: String::new(),
        }
    }
}

impl ContactForm {
    /// New form value with one field replaced. The value is stored as typed.
    pub fn update_field(&self, field: ContactField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            ContactField::Name => next.name = value,
            ContactField::Email => next.email = value,
            ContactField::Subject => next.subject = value,
            ContactField::Message => next.message = value,
        }
        next
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<ContactField> = [ContactField::Name, ContactField::Email, ContactField::Message]
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }
}

/// Turns a contact form into a `mailto:` link for the visitor's mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailComposer<'a> {
    recipient: &'a str,
    site_tag: &'a str,
}

impl<'a> MailComposer<'a> {
    pub fn new(recipient: &'a str, site_tag: &'a str) -> Self {
        Self { recipient, site_tag }
    }

    pub fn from_config() -> MailComposer<'static> {
        MailComposer::new(config::get_contact_email(), config::SITE_TAG)
    }

    pub fn subject_line(&self, form: &ContactForm) -> String {
        format!("[{}] {} - {}", self.site_tag, form.subject, form.name)
    }

    pub fn body(&self, form: &ContactForm) -> String {
        format!(
            "Nom: {}\nEmail: {}\nObjet: {}\n\nMessage:\n{}",
            form.name, form.email, form.subject, form.message
        )
    }

    /// Validates the form and builds the handoff link.
    ///
    /// Nothing is encoded when a required field is blank. The form is only read.
    pub fn submit(&self, form: &ContactForm) -> Result<String, ValidationError> {
        form.validate()?;
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject_line(form)),
            urlencoding::encode(&self.body(form)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm::default()
            .update_field(ContactField::Name, "Jean Dupont")
            .update_field(ContactField::Email, "jean@entreprise.com")
            .update_field(ContactField::Message, "Besoin d'un devis")
    }

    #[test]
    fn default_subject_is_quote_request() {
        let form = ContactForm::default();
        assert_eq!(form.subject, "Demande de cotation");
        assert!(form.name.is_empty());
    }

    #[test]
    fn update_field_keeps_raw_value() {
        let form = ContactForm::default().update_field(ContactField::Subject, "  hors liste ");
        assert_eq!(form.subject, "  hors liste ");
    }

    #[test]
    fn update_field_returns_new_value() {
        let original = ContactForm::default();
        let updated = original.update_field(ContactField::Name, "Awa");
        assert_eq!(original.name, "");
        assert_eq!(updated.name, "Awa");
    }

    #[test]
    fn whitespace_counts_as_empty() {
        let form = filled().update_field(ContactField::Email, "   ");
        let err = form.validate().unwrap_err();
        assert_eq!(err.missing(), &[ContactField::Email]);
    }

    #[test]
    fn reports_every_missing_field_in_form_order() {
        let err = ContactForm::default().validate().unwrap_err();
        assert_eq!(
            err.missing(),
            &[ContactField::Name, ContactField::Email, ContactField::Message]
        );
        assert_eq!(
            err.to_string(),
            "Veuillez renseigner : Nom Complet, Email Professionnel, Message"
        );
    }

    #[test]
    fn blank_subject_is_allowed() {
        let form = filled().update_field(ContactField::Subject, "");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn subject_line_template() {
        let composer = MailComposer::new("contact@nes-sarlu.cd", "NES");
        assert_eq!(
            composer.subject_line(&filled()),
            "[NES] Demande de cotation - Jean Dupont"
        );
    }

    #[test]
    fn body_template() {
        let composer = MailComposer::new("contact@nes-sarlu.cd", "NES");
        assert_eq!(
            composer.body(&filled()),
            "Nom: Jean Dupont\nEmail: jean@entreprise.com\nObjet: Demande de cotation\n\nMessage:\nBesoin d'un devis"
        );
    }

    #[test]
    fn submit_escapes_reserved_characters() {
        let composer = MailComposer::new("contact@nes-sarlu.cd", "NES");
        let form = filled().update_field(ContactField::Message, "a&b=c?d");
        let href = composer.submit(&form).unwrap();
        assert!(href.contains("a%26b%3Dc%3Fd"));
        assert_eq!(href.matches('&').count(), 1);
        assert_eq!(href.matches('?').count(), 1);
    }
}
