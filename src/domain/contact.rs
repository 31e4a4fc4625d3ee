//! Contact form fields and validation.

use thiserror::Error;

const MIN_NAME: usize = 2;
const MIN_SUBJECT: usize = 5;
const MIN_MESSAGE: usize = 10;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "your.email@example.com",
            Field::Subject => "What is this regarding?",
            Field::Message => "Your message...",
        }
    }

    /// Text rows shown for the field; more than one means a text area
    pub fn rows(self) -> usize {
        match self {
            Field::Message => 6,
            _ => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name must be at least 2 characters.")]
    NameTooShort,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Subject must be at least 5 characters.")]
    SubjectTooShort,
    #[error("Message must be at least 10 characters.")]
    MessageTooShort,
}

impl FieldError {
    pub fn field(self) -> Field {
        match self {
            FieldError::NameTooShort => Field::Name,
            FieldError::InvalidEmail => Field::Email,
            FieldError::SubjectTooShort => Field::Subject,
            FieldError::MessageTooShort => Field::Message,
        }
    }
}

/// Raw form input, exactly as typed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A validated, trimmed message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Check every field, returning one error per failing field in field order
    pub fn validate(&self) -> Result<ContactSubmission, Vec<FieldError>> {
        let name = self.name.trim();
        let email = self.email.trim();
        let subject = self.subject.trim();
        let message = self.message.trim();

        let mut errors = Vec::new();
        if name.chars().count() < MIN_NAME {
            errors.push(FieldError::NameTooShort);
        }
        if !is_valid_email(email) {
            errors.push(FieldError::InvalidEmail);
        }
        if subject.chars().count() < MIN_SUBJECT {
            errors.push(FieldError::SubjectTooShort);
        }
        if message.chars().count() < MIN_MESSAGE {
            errors.push(FieldError::MessageTooShort);
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }
}

/// `local@domain.tld` with no whitespace and non-empty domain labels
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Lessons".into(),
            message: "When does the endgame course start?".into(),
        }
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let mut form = valid_form();
        form.set(Field::Name, "  Ada  ");
        let submission = form.validate().unwrap();
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "ada@example.com");
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::NameTooShort,
                FieldError::InvalidEmail,
                FieldError::SubjectTooShort,
                FieldError::MessageTooShort,
            ]
        );
        let fields: Vec<Field> = errors.iter().map(|e| e.field()).collect();
        assert_eq!(fields, Field::ALL);
    }

    #[test]
    fn test_lengths_are_checked_after_trimming() {
        let mut form = valid_form();
        form.set(Field::Subject, "  abcd   ");
        assert_eq!(form.validate().unwrap_err(), vec![FieldError::SubjectTooShort]);
        form.set(Field::Subject, "abcde");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_lengths_count_characters() {
        let mut form = valid_form();
        form.set(Field::Name, "Zoë");
        assert!(form.validate().is_ok());
        form.set(Field::Name, "é");
        assert_eq!(form.validate().unwrap_err(), vec![FieldError::NameTooShort]);
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@localhost"));
        assert!(!is_valid_email("a@b..com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn test_only_message_is_a_text_area() {
        let multi_line: Vec<Field> = Field::ALL.into_iter().filter(|f| f.rows() > 1).collect();
        assert_eq!(multi_line, vec![Field::Message]);
    }

    #[test]
    fn test_multi_line_message_is_trimmed_not_flattened() {
        let mut form = valid_form();
        form.set(Field::Message, "\n  First line.\nSecond line.  \n");
        let submission = form.validate().unwrap();
        assert_eq!(submission.message, "First line.\nSecond line.");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FieldError::MessageTooShort.to_string(),
            "Message must be at least 10 characters."
        );
    }
}
