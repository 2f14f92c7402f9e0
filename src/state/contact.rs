use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use super::toast::{Notice, Tone};

pub const MISSING_FIELDS_NOTICE: Notice = Notice {
    title: "Error",
    description: "Please fill in all fields",
    tone: Tone::Error,
};

pub const SENT_NOTICE: Notice = Notice {
    title: "Message sent!",
    description: "Thank you for reaching out. I'll get back to you soon.",
    tone: Tone::Success,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
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

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitError {
    MissingFields,
    InFlight,
}

impl SubmitError {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingFields => "missing_fields",
            Self::InFlight => "in_flight",
        }
    }

    /// What the visitor is told. An in-flight rejection is silent; the button is disabled anyway.
    pub fn notice(self) -> Option<Notice> {
        match self {
            Self::MissingFields => Some(MISSING_FIELDS_NOTICE),
            Self::InFlight => None,
        }
    }
}

/// Contact form buffer with a single in-flight guard around the simulated delivery.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    phase: SubmitPhase,
}

impl ContactForm {
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        *self.fields.slot(field) = value;
    }

    pub fn begin_submit(&mut self) -> Result<(), SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }

        if !self.fields.is_complete() {
            return Err(SubmitError::MissingFields);
        }

        self.phase = SubmitPhase::Submitting;
        Ok(())
    }

    /// Finishes the pending submission: fields are cleared and the form returns to idle.
    pub fn complete_submit(&mut self) -> Notice {
        self.fields = ContactFields::default();
        self.phase = SubmitPhase::Idle;
        SENT_NOTICE
    }
}

/// Waits out `delay`, then completes the submission already started on `form`.
pub async fn deliver<D>(form: Rc<RefCell<ContactForm>>, delay: D) -> Notice
where
    D: Future<Output = ()>,
{
    delay.await;
    form.borrow_mut().complete_submit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::{sleep, Instant};

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, "Ada".to_string());
        form.set_field(Field::Email, "ada@example.com".to_string());
        form.set_field(Field::Message, "hi".to_string());
        form
    }

    #[test]
    fn empty_field_fails_validation_and_keeps_input() {
        let mut form = ContactForm::default();
        form.set_field(Field::Email, "a@b.com".to_string());
        form.set_field(Field::Message, "hi".to_string());
        let before = form.clone();

        assert_eq!(form.begin_submit(), Err(SubmitError::MissingFields));
        assert_eq!(form, before);
        assert!(!form.is_submitting());
        assert_eq!(SubmitError::MissingFields.notice(), Some(MISSING_FIELDS_NOTICE));
    }

    #[test]
    fn second_submit_while_pending_is_rejected() {
        let mut form = filled_form();
        assert_eq!(form.begin_submit(), Ok(()));
        assert!(form.is_submitting());

        assert_eq!(form.begin_submit(), Err(SubmitError::InFlight));
        assert_eq!(SubmitError::InFlight.notice(), None);
    }

    #[test]
    fn completion_clears_fields_and_returns_to_idle() {
        let mut form = filled_form();
        form.begin_submit().expect("complete form submits");

        assert_eq!(form.complete_submit(), SENT_NOTICE);
        assert_eq!(form.fields(), &ContactFields::default());
        assert!(!form.is_submitting());
        assert_eq!(form.begin_submit(), Err(SubmitError::MissingFields));
    }

    #[test]
    fn edits_are_accepted_while_submitting() {
        let mut form = filled_form();
        form.begin_submit().expect("complete form submits");
        form.set_field(Field::Name, "Grace".to_string());
        assert_eq!(form.fields().get(Field::Name), "Grace");
    }

    #[tokio::test(start_paused = true)]
    async fn delivery_completes_after_delay() {
        let form = Rc::new(RefCell::new(filled_form()));
        form.borrow_mut().begin_submit().expect("complete form submits");
        let started = Instant::now();

        let (notice, retry) = tokio::join!(
            deliver(form.clone(), sleep(Duration::from_millis(1_000))),
            async { form.borrow_mut().begin_submit() },
        );

        assert_eq!(retry, Err(SubmitError::InFlight));
        assert_eq!(notice, SENT_NOTICE);
        assert!(started.elapsed() >= Duration::from_millis(1_000));
        assert_eq!(form.borrow().fields(), &ContactFields::default());
        assert!(!form.borrow().is_submitting());
    }
}
