//! Contact form state: per-field errors and the thank-you state.

use tracing::info;

use crate::domain::{ContactForm, ContactSubmission, Field, FieldError};

#[derive(Clone, Debug, Default)]
pub struct ContactModel {
    errors: Vec<FieldError>,
    submitted: Option<ContactSubmission>,
}

impl ContactModel {
    pub fn submitted(&self) -> Option<&ContactSubmission> {
        self.submitted.as_ref()
    }

    pub fn error_for(&self, field: Field) -> Option<FieldError> {
        self.errors.iter().copied().find(|e| e.field() == field)
    }

    /// Validate and accept the form. Nothing is sent anywhere; an accepted
    /// message is only logged.
    pub fn submit(&mut self, form: &ContactForm) -> bool {
        match form.validate() {
            Ok(submission) => {
                info!(
                    name = %submission.name,
                    email = %submission.email,
                    subject = %submission.subject,
                    "contact message accepted"
                );
                self.errors.clear();
                self.submitted = Some(submission);
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }

    /// "Send another message"
    pub fn start_over(&mut self) {
        self.errors.clear();
        self.submitted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_submit_keeps_errors_per_field() {
        let mut model = ContactModel::default();
        let form = ContactForm {
            name: "Al".into(),
            email: "nope".into(),
            subject: "Hi".into(),
            message: "long enough message".into(),
        };
        assert!(!model.submit(&form));
        assert!(model.submitted().is_none());
        assert_eq!(model.error_for(Field::Name), None);
        assert_eq!(model.error_for(Field::Email), Some(FieldError::InvalidEmail));
        assert_eq!(model.error_for(Field::Subject), Some(FieldError::SubjectTooShort));
    }

    #[test]
    fn test_submit_then_start_over() {
        let mut model = ContactModel::default();
        let form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello there".into(),
            message: "I would like to learn the Lucena position.".into(),
        };
        assert!(model.submit(&form));
        assert_eq!(model.submitted().map(|s| s.name.as_str()), Some("Ada"));

        model.start_over();
        assert!(model.submitted().is_none());
        assert_eq!(model.error_for(Field::Email), None);
    }
}
