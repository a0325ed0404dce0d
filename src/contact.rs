use std::{fmt, time::Duration};
use thiserror::Error;

/// How long a success or error message stays up before the form goes idle.
pub const STATUS_RESET: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Required fields holding an empty string. Whitespace counts as content.
    pub fn missing(&self) -> Vec<Field> {
        [Field::Name, Field::Email, Field::Message]
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Success,
    Error,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<Field>),
    #[error("message rejected: {0}")]
    Rejected(String),
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Delivers a validated contact message somewhere.
pub trait ContactService {
    fn submit(&self, fields: &ContactFields) -> Result<(), ContactError>;
}

/// Accepts every message without sending it anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalContactService;

impl ContactService for LocalContactService {
    fn submit(&self, fields: &ContactFields) -> Result<(), ContactError> {
        log::info!(
            "contact message from {} <{}> ({} chars)",
            fields.name,
            fields.email,
            fields.message.chars().count()
        );
        Ok(())
    }
}

/// Handed out by [`ContactForm::submit`]; pass it back to
/// [`ContactForm::revert`] once `delay` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertTicket {
    generation: u64,
    pub delay: Duration,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub fields: ContactFields,
    status: FormStatus,
    error: Option<ContactError>,
    generation: u64,
}

impl ContactForm {
    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn error(&self) -> Option<&ContactError> {
        self.error.as_ref()
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Message => self.fields.message = value,
        }
    }

    pub fn submit<S: ContactService + ?Sized>(&mut self, service: &S) -> RevertTicket {
        self.generation += 1;
        let missing = self.fields.missing();
        let res = if missing.is_empty() {
            service.submit(&self.fields)
        } else {
            Err(ContactError::MissingFields(missing))
        };
        match res {
            Ok(()) => {
                self.status = FormStatus::Success;
                self.error = None;
                self.fields = ContactFields::default();
            }
            Err(e) => {
                log::debug!("contact form not sent: {e}");
                self.status = FormStatus::Error;
                self.error = Some(e);
            }
        }
        RevertTicket {
            generation: self.generation,
            delay: STATUS_RESET,
        }
    }

    /// Returns to idle unless a newer submission has happened since `ticket`
    /// was issued.
    pub fn revert(&mut self, ticket: RevertTicket) -> bool {
        if ticket.generation != self.generation || self.status == FormStatus::Idle {
            return false;
        }
        self.status = FormStatus::Idle;
        self.error = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Simulated clock holding scheduled reverts
    #[derive(Default)]
    struct FakeTimers {
        now: Duration,
        pending: Vec<(Duration, RevertTicket)>,
    }

    impl FakeTimers {
        fn schedule(&mut self, ticket: RevertTicket) {
            self.pending.push((self.now + ticket.delay, ticket));
        }

        fn advance(&mut self, by: Duration, form: &mut ContactForm) {
            self.now += by;
            let now = self.now;
            let (due, pending): (Vec<_>, Vec<_>) =
                self.pending.drain(..).partition(|(at, _)| *at <= now);
            self.pending = pending;
            for (_, ticket) in due {
                form.revert(ticket);
            }
        }
    }

    struct RejectAll;

    impl ContactService for RejectAll {
        fn submit(&self, _fields: &ContactFields) -> Result<(), ContactError> {
            Err(ContactError::Rejected("mailbox full".to_string()))
        }
    }

    fn form_with(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, name.to_string());
        form.set_field(Field::Email, email.to_string());
        form.set_field(Field::Message, message.to_string());
        form
    }

    #[test]
    fn test_empty_field_is_error_and_keeps_fields() {
        for (name, email, message) in [("", "a@b.com", "Hi"), ("Ann", "", "Hi"), ("Ann", "a@b.com", "")] {
            let mut form = form_with(name, email, message);
            let before = form.fields.clone();
            form.submit(&LocalContactService);
            assert_eq!(form.status(), FormStatus::Error);
            assert_eq!(form.fields, before);
        }
    }

    #[test]
    fn test_missing_fields_reported() {
        let mut form = form_with("", "", "Hi");
        form.submit(&LocalContactService);
        assert_eq!(
            form.error(),
            Some(&ContactError::MissingFields(vec![Field::Name, Field::Email]))
        );
        assert_eq!(
            form.error().map(|e| e.to_string()),
            Some("missing required fields: name, email".to_string())
        );
    }

    #[test]
    fn test_whitespace_counts_as_content() {
        let mut form = form_with(" ", "not-an-email", "\n");
        form.submit(&LocalContactService);
        assert_eq!(form.status(), FormStatus::Success);
    }

    #[test]
    fn test_success_clears_fields_then_idles() {
        let mut timers = FakeTimers::default();
        let mut form = form_with("Ann", "a@b.com", "Hi");
        timers.schedule(form.submit(&LocalContactService));
        assert_eq!(form.status(), FormStatus::Success);
        assert_eq!(form.fields, ContactFields::default());

        timers.advance(Duration::from_millis(2999), &mut form);
        assert_eq!(form.status(), FormStatus::Success);
        timers.advance(Duration::from_millis(1), &mut form);
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[test]
    fn test_error_then_success_scenario() {
        let mut timers = FakeTimers::default();
        let mut form = form_with("Ann", "", "Hi");
        timers.schedule(form.submit(&LocalContactService));
        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.fields, form_with("Ann", "", "Hi").fields);

        timers.advance(Duration::from_millis(500), &mut form);
        form.set_field(Field::Email, "a@b.com".to_string());
        timers.schedule(form.submit(&LocalContactService));
        assert_eq!(form.status(), FormStatus::Success);
        assert_eq!(form.fields, ContactFields::default());

        // the error's revert fires here but belongs to the older submission
        timers.advance(Duration::from_millis(2600), &mut form);
        assert_eq!(form.status(), FormStatus::Success);

        timers.advance(Duration::from_millis(400), &mut form);
        assert_eq!(form.status(), FormStatus::Idle);
        assert!(timers.pending.is_empty());
    }

    #[test]
    fn test_error_reverts_without_input() {
        let mut timers = FakeTimers::default();
        let mut form = form_with("", "", "");
        timers.schedule(form.submit(&LocalContactService));
        assert_eq!(form.status(), FormStatus::Error);
        timers.advance(STATUS_RESET, &mut form);
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut form = form_with("Ann", "a@b.com", "Hi");
        let first = form.submit(&LocalContactService);
        let second = form.submit(&LocalContactService);
        assert_eq!(form.status(), FormStatus::Error);
        assert!(!form.revert(first));
        assert_eq!(form.status(), FormStatus::Error);
        assert!(form.revert(second));
        assert!(!form.revert(second));
    }

    #[test]
    fn test_rejected_by_service_keeps_fields() {
        let mut form = form_with("Ann", "a@b.com", "Hi");
        form.submit(&RejectAll);
        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.fields.name, "Ann");
        assert_eq!(
            form.error(),
            Some(&ContactError::Rejected("mailbox full".to_string()))
        );
    }
}
