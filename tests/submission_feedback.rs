use std::time::Duration;

use calmform::{
    ErrorMessageState, FieldKey, FormView, StatusReport, SubmitButtonInput, SubmitButtonState,
    SubmitStatus,
};
use futures::executor::block_on;

#[derive(Clone, Debug, Eq, PartialEq)]
struct LoginForm {
    email: &'static str,
    password: &'static str,
}

fn draft() -> LoginForm {
    LoginForm {
        email: "user@example.com",
        password: "secret",
    }
}

#[test]
fn failed_submission_shows_then_hides_the_message() {
    let mut message = ErrorMessageState::new();
    let view = FormView::new(draft());

    assert_eq!(message.observe(&view, &StatusReport::default()), None);
    assert_eq!(
        message.observe(&view, &StatusReport::new(SubmitStatus::Pending)),
        None
    );

    let shown = message.observe(
        &view,
        &StatusReport::new(SubmitStatus::Rejected).message("Invalid credentials"),
    );
    assert_eq!(
        shown.map(|m| m.to_string()),
        Some("Invalid credentials".to_string())
    );

    // Typing into any field hides the message before the next paint.
    let edited = FormView::new(LoginForm {
        password: "secret2",
        ..draft()
    });
    assert_eq!(
        message.observe(
            &edited,
            &StatusReport::new(SubmitStatus::Rejected).message("Invalid credentials"),
        ),
        None
    );
}

#[test]
fn rejection_with_field_errors_defers_to_field_ui() {
    let mut message = ErrorMessageState::new();
    let invalid = FormView::new(draft()).field_error(FieldKey::new("email"), "Not an email");

    assert_eq!(
        message.observe(&invalid, &StatusReport::new(SubmitStatus::Rejected)),
        None
    );
    assert!(message.is_visible());
}

#[test]
fn button_state_tracks_a_whole_submission_cycle() {
    let button = SubmitButtonState::with_status_window(Duration::from_millis(25));

    let update = button
        .observe(SubmitButtonInput {
            is_valid: true,
            is_submitting: true,
            status: SubmitStatus::Pending,
            disabled: false,
        })
        .expect("observe must succeed");
    assert_eq!(update.value.status, SubmitStatus::Pending);
    assert!(update.value.disabled);

    let update = button
        .observe(SubmitButtonInput::new(SubmitStatus::Fulfilled))
        .expect("observe must succeed");
    assert_eq!(update.value.status, SubmitStatus::Fulfilled);
    assert!(!update.value.disabled);

    let decay = update.timeout.expect("status change must arm a decay");
    block_on(decay.elapse()).expect("elapse must succeed");

    let update = button
        .observe(SubmitButtonInput::new(SubmitStatus::Fulfilled))
        .expect("observe must succeed");
    assert_eq!(update.value.status, SubmitStatus::Idle);
}

#[test]
fn a_new_submission_supersedes_a_pending_decay() {
    let button = SubmitButtonState::with_status_window(Duration::from_millis(25));

    let first = button
        .observe(SubmitButtonInput::new(SubmitStatus::Fulfilled))
        .expect("observe must succeed")
        .timeout
        .expect("status change must arm a decay");

    // A second submission fails before the success indicator decays.
    let second = button
        .observe(SubmitButtonInput::new(SubmitStatus::Rejected))
        .expect("observe must succeed")
        .timeout
        .expect("status change must arm a decay");

    block_on(first.elapse()).expect("elapse must succeed");
    let update = button
        .observe(SubmitButtonInput::new(SubmitStatus::Rejected))
        .expect("observe must succeed");
    assert_eq!(update.value.status, SubmitStatus::Rejected);

    block_on(second.elapse()).expect("elapse must succeed");
    let update = button
        .observe(SubmitButtonInput::new(SubmitStatus::Rejected))
        .expect("observe must succeed");
    assert_eq!(update.value.status, SubmitStatus::Idle);
}
