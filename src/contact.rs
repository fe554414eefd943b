mod relay;

pub use relay::{HttpRelay, Relay, RelayConfig, RelayError, RelayPayload, RelayResponse};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// A submission that has left the form and is waiting on the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub attempt: u64,
    pub fields: ContactFields,
}

/// Controlled state behind the contact form.
///
/// Submitting is split in two so a UI can release the state while the
/// request is in flight: [`ContactForm::begin_submit`] moves to
/// `Submitting` and hands out a snapshot, [`ContactForm::complete`] applies
/// the relay outcome. Each attempt is numbered; outcomes for anything but
/// the current in-flight attempt are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    status: SubmissionStatus,
    attempt: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Set one field. Editing after a finished submission puts the form back
    /// to `Idle` so stale feedback disappears.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Message => self.fields.message = value,
        }
        if matches!(
            self.status,
            SubmissionStatus::Success | SubmissionStatus::Error
        ) {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Returns `None` while another submission is in flight.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.is_submitting() {
            log::debug!("submit ignored, attempt {} still in flight", self.attempt);
            return None;
        }
        self.attempt += 1;
        self.status = SubmissionStatus::Submitting;
        Some(Submission {
            attempt: self.attempt,
            fields: self.fields.clone(),
        })
    }

    /// Apply the relay outcome for `attempt`.
    pub fn complete(&mut self, attempt: u64, outcome: Result<(), RelayError>) -> SubmissionStatus {
        if !self.is_current(attempt) {
            log::debug!("dropping outcome for stale attempt {attempt}");
            return self.status;
        }
        match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.status = SubmissionStatus::Success;
            }
            Err(e) => {
                log::warn!("contact submission failed: {e}");
                self.status = SubmissionStatus::Error;
            }
        }
        self.status
    }

    /// Give up on `attempt` if it is still in flight. Returns whether it was.
    pub fn expire(&mut self, attempt: u64) -> bool {
        if !self.is_current(attempt) {
            return false;
        }
        log::warn!("contact submission {attempt} timed out");
        self.status = SubmissionStatus::Error;
        true
    }

    /// Run one full submission against `relay`.
    ///
    /// A no-op returning `Submitting` if a submission is already in flight.
    pub async fn submit<R: Relay>(&mut self, relay: &R) -> SubmissionStatus {
        let Some(submission) = self.begin_submit() else {
            return self.status;
        };
        let outcome = relay.send(&submission.fields).await;
        self.complete(submission.attempt, outcome)
    }

    fn is_current(&self, attempt: u64) -> bool {
        self.is_submitting() && attempt == self.attempt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;

    struct CannedRelay {
        outcome: Result<(), RelayError>,
        calls: Cell<usize>,
    }

    impl CannedRelay {
        fn new(outcome: Result<(), RelayError>) -> Self {
            Self {
                outcome,
                calls: Cell::new(0),
            }
        }
    }

    impl Relay for CannedRelay {
        async fn send(&self, _fields: &ContactFields) -> Result<(), RelayError> {
            self.calls.set(self.calls.get() + 1);
            self.outcome.clone()
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "Ada");
        form.update_field(Field::Email, "ada@example.com");
        form.update_field(Field::Message, "Hello");
        form
    }

    fn rejected() -> RelayError {
        RelayError::Rejected {
            status: 200,
            message: "invalid access key".to_string(),
        }
    }

    #[tokio::test]
    async fn test_successful_submit_clears_fields() {
        let relay = CannedRelay::new(Ok(()));
        let mut form = filled();
        assert_eq!(form.status(), SubmissionStatus::Idle);

        assert_eq!(form.submit(&relay).await, SubmissionStatus::Success);
        assert!(form.fields().is_empty());
        assert_eq!(relay.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_fields() {
        for err in [
            rejected(),
            RelayError::Transport("connection refused".to_string()),
            RelayError::Malformed("expected value at line 1".to_string()),
        ] {
            let relay = CannedRelay::new(Err(err));
            let mut form = filled();
            let before = form.fields().clone();

            assert_eq!(form.submit(&relay).await, SubmissionStatus::Error);
            assert_eq!(form.fields(), &before);
        }
    }

    #[tokio::test]
    async fn test_submit_while_submitting_is_ignored() {
        let relay = CannedRelay::new(Ok(()));
        let mut form = filled();
        let first = form.begin_submit().expect("first submit should start");
        assert!(form.is_submitting());

        assert!(form.begin_submit().is_none());
        assert_eq!(form.submit(&relay).await, SubmissionStatus::Submitting);
        assert_eq!(relay.calls.get(), 0);

        assert_eq!(form.complete(first.attempt, Ok(())), SubmissionStatus::Success);
    }

    #[test]
    fn test_snapshot_carries_fields() {
        let mut form = filled();
        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.attempt, 1);
        assert_eq!(submission.fields.name, "Ada");
        assert_eq!(submission.fields.get(Field::Email), "ada@example.com");
        assert_eq!(submission.fields.get(Field::Message), "Hello");
    }

    #[test]
    fn test_editing_after_outcome_returns_to_idle() {
        let mut form = filled();
        let s = form.begin_submit().unwrap();
        form.complete(s.attempt, Err(rejected()));
        assert_eq!(form.status(), SubmissionStatus::Error);
        form.update_field(Field::Message, "Hello again");
        assert_eq!(form.status(), SubmissionStatus::Idle);

        let s = form.begin_submit().unwrap();
        form.complete(s.attempt, Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Success);
        form.update_field(Field::Name, "Grace");
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.fields().name, "Grace");
    }

    #[test]
    fn test_editing_while_submitting_keeps_status() {
        let mut form = filled();
        let s = form.begin_submit().unwrap();
        form.update_field(Field::Name, "Ada L.");
        assert!(form.is_submitting());
        form.complete(s.attempt, Err(rejected()));
        assert_eq!(form.fields().name, "Ada L.");
    }

    #[test]
    fn test_expire_then_late_response() {
        let mut form = filled();
        let s = form.begin_submit().unwrap();
        assert!(form.expire(s.attempt));
        assert_eq!(form.status(), SubmissionStatus::Error);

        // late success must not wipe the user's input
        assert_eq!(form.complete(s.attempt, Ok(())), SubmissionStatus::Error);
        assert_eq!(form.fields().name, "Ada");
        assert!(!form.expire(s.attempt));
    }

    #[test]
    fn test_outcome_for_previous_attempt_is_dropped() {
        let mut form = filled();
        let first = form.begin_submit().unwrap();
        form.expire(first.attempt);
        let second = form.begin_submit().unwrap();
        assert_ne!(first.attempt, second.attempt);

        form.complete(first.attempt, Ok(()));
        assert!(form.is_submitting());
        assert!(!form.expire(first.attempt));
        form.complete(second.attempt, Err(rejected()));
        assert_eq!(form.status(), SubmissionStatus::Error);
    }

    fn arb_edits() -> impl Strategy<Value = Vec<(u8, String)>> {
        prop::collection::vec((0u8..3, ".{0,24}"), 0..12)
    }

    fn apply(form: &mut ContactForm, edits: &[(u8, String)]) {
        for (which, value) in edits {
            let field = match which {
                0 => Field::Name,
                1 => Field::Email,
                _ => Field::Message,
            };
            form.update_field(field, value.clone());
        }
    }

    proptest! {
        #[test]
        fn success_always_clears(edits in arb_edits()) {
            let mut form = ContactForm::new();
            apply(&mut form, &edits);
            let s = form.begin_submit().unwrap();
            prop_assert_eq!(form.complete(s.attempt, Ok(())), SubmissionStatus::Success);
            prop_assert_eq!(form.fields(), &ContactFields::default());
        }

        #[test]
        fn failure_never_touches_fields(edits in arb_edits(), transport in any::<bool>()) {
            let mut form = ContactForm::new();
            apply(&mut form, &edits);
            let before = form.fields().clone();
            let s = form.begin_submit().unwrap();
            let err = if transport {
                RelayError::Transport("network down".to_string())
            } else {
                RelayError::Rejected { status: 200, message: String::new() }
            };
            prop_assert_eq!(form.complete(s.attempt, Err(err)), SubmissionStatus::Error);
            prop_assert_eq!(form.fields(), &before);
        }
    }
}
