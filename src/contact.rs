use serde::{Deserialize, Serialize};

use crate::{
    notify::Notification,
    relay::{Relay, RelayError},
};

pub const SUCCESS_TITLE: &str = "Message sent successfully!";
pub const SUCCESS_DESCRIPTION: &str = "Thank you for your message. I'll get back to you soon.";
pub const ERROR_TITLE: &str = "Error sending message";
pub const ERROR_DESCRIPTION: &str =
    "Something went wrong. Please try again or contact me directly.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormInput {
    /// Every field has something other than whitespace in it.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|f| !f.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

impl SubmissionOutcome {
    pub fn is_sending(self) -> bool {
        self == Self::Sending
    }
}

/// State behind the contact form: what the visitor typed, where the last
/// submission got to, and notifications waiting to be shown.
#[derive(Debug, Clone, Default)]
pub struct ContactFlow {
    input: ContactFormInput,
    outcome: SubmissionOutcome,
    notifications: Vec<Notification>,
}

impl ContactFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &ContactFormInput {
        &self.input
    }

    pub fn outcome(&self) -> SubmissionOutcome {
        self.outcome
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.input.name = value,
            Field::Email => self.input.email = value,
            Field::Message => self.input.message = value,
        }
    }

    /// Starts a submission and hands back what to send. Returns `None` when
    /// the form is incomplete or a submission is already in flight, in
    /// which case nothing must be sent.
    pub fn begin(&mut self) -> Option<ContactFormInput> {
        if self.outcome.is_sending() || !self.input.is_complete() {
            return None;
        }
        self.outcome = SubmissionOutcome::Sending;
        Some(self.input.clone())
    }

    /// Applies the relay's answer to an in-flight submission.
    pub fn finish(&mut self, result: Result<(), RelayError>) -> SubmissionOutcome {
        if !self.outcome.is_sending() {
            log::warn!("contact result arrived with no submission in flight");
            return self.outcome;
        }
        match result {
            Ok(()) => {
                self.outcome = SubmissionOutcome::Succeeded;
                self.input = ContactFormInput::default();
                self.notifications
                    .push(Notification::success(SUCCESS_TITLE, SUCCESS_DESCRIPTION));
            }
            Err(e) => {
                log::error!("contact submission failed: {e}");
                self.outcome = SubmissionOutcome::Failed;
                self.notifications
                    .push(Notification::error(ERROR_TITLE, ERROR_DESCRIPTION));
            }
        }
        self.outcome
    }

    /// One attempt through `relay`. Retries, if any, belong to the relay.
    /// A caller that keeps the flow in shared state runs `begin` and
    /// `finish` itself around the delivery instead.
    pub async fn submit<R: Relay>(&mut self, relay: &R) -> SubmissionOutcome {
        let Some(message) = self.begin() else {
            return self.outcome;
        };
        let result = relay.deliver(&message).await;
        self.finish(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{notify::NotificationKind, relay::tests::ScriptedRelay};

    fn filled() -> ContactFlow {
        let mut flow = ContactFlow::new();
        flow.set_field(Field::Name, "Ada".to_string());
        flow.set_field(Field::Email, "ada@example.com".to_string());
        flow.set_field(Field::Message, "Hello".to_string());
        flow
    }

    #[test]
    fn test_starts_idle_and_empty() {
        let flow = ContactFlow::new();
        assert_eq!(flow.outcome(), SubmissionOutcome::Idle);
        assert!(flow.input().is_empty());
        assert!(flow.notifications().is_empty());
    }

    #[test]
    fn test_set_field() {
        let flow = filled();
        assert_eq!(
            flow.input(),
            &ContactFormInput {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "Hello".to_string(),
            }
        );
    }

    #[test]
    fn test_begin_moves_to_sending() {
        let mut flow = filled();
        let sent = flow.begin().expect("complete form should start");
        assert_eq!(flow.outcome(), SubmissionOutcome::Sending);
        assert_eq!(&sent, flow.input());
    }

    #[test]
    fn test_begin_while_sending_is_refused() {
        let mut flow = filled();
        assert!(flow.begin().is_some());
        assert!(flow.begin().is_none());
        assert_eq!(flow.outcome(), SubmissionOutcome::Sending);
    }

    #[test]
    fn test_begin_refuses_blank_fields() {
        let mut flow = filled();
        flow.set_field(Field::Email, "   ".to_string());
        assert!(flow.begin().is_none());
        assert_eq!(flow.outcome(), SubmissionOutcome::Idle);
    }

    #[test]
    fn test_finish_without_begin_is_ignored() {
        let mut flow = filled();
        assert_eq!(flow.finish(Ok(())), SubmissionOutcome::Idle);
        assert!(!flow.input().is_empty());
        assert!(flow.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_accepted_submission_clears_input() {
        let relay = ScriptedRelay::accepting();
        let mut flow = filled();
        let outcome = flow.submit(&relay).await;

        assert_eq!(outcome, SubmissionOutcome::Succeeded);
        assert_eq!(flow.outcome(), SubmissionOutcome::Succeeded);
        assert!(flow.input().is_empty());
        assert_eq!(relay.calls(), 1);
        assert_eq!(flow.notifications().len(), 1);
        assert_eq!(flow.notifications()[0].kind, NotificationKind::Success);
        assert_eq!(flow.notifications()[0].title, SUCCESS_TITLE);
    }

    #[tokio::test]
    async fn test_rejected_submission_keeps_input() {
        let relay = ScriptedRelay::rejecting();
        let mut flow = filled();
        let before = flow.input().clone();
        let outcome = flow.submit(&relay).await;

        assert_eq!(outcome, SubmissionOutcome::Failed);
        assert_eq!(flow.input(), &before);
        assert_eq!(relay.calls(), 1);
        assert_eq!(flow.notifications().len(), 1);
        assert_eq!(flow.notifications()[0].kind, NotificationKind::Error);
        assert_eq!(flow.notifications()[0].description, ERROR_DESCRIPTION);
    }

    #[tokio::test]
    async fn test_resubmit_after_failure() {
        let relay = ScriptedRelay::new(vec![Err(RelayError::Timeout), Ok(())]);
        let mut flow = filled();
        assert_eq!(flow.submit(&relay).await, SubmissionOutcome::Failed);
        assert_eq!(flow.take_notifications().len(), 1);
        assert!(flow.notifications().is_empty());

        assert_eq!(flow.submit(&relay).await, SubmissionOutcome::Succeeded);
        assert_eq!(relay.calls(), 2);
    }

    #[tokio::test]
    async fn test_incomplete_form_never_reaches_relay() {
        let relay = ScriptedRelay::accepting();
        let mut flow = ContactFlow::new();
        flow.set_field(Field::Name, "Ada".to_string());
        assert_eq!(flow.submit(&relay).await, SubmissionOutcome::Idle);
        assert_eq!(relay.calls(), 0);
        assert!(flow.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_split_steps_match_submit() {
        let relay = ScriptedRelay::rejecting();
        let mut whole = filled();
        whole.submit(&relay).await;

        let mut split = filled();
        let message = split.begin().unwrap();
        let result = relay.deliver(&message).await;
        split.finish(result);

        assert_eq!(split.outcome(), whole.outcome());
        assert_eq!(split.input(), whole.input());
        assert_eq!(split.notifications(), whole.notifications());
    }
}
