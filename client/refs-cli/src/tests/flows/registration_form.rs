use crate::flows::RegistrationForm;
use crate::flows::registration_form::{EMPTY_EMAIL_MESSAGE, REGISTRATION_FAILED_MESSAGE};

use refs_api::{ClientError, RegistrationResponse};

fn accepted(message: Option<&str>) -> RegistrationResponse {
    RegistrationResponse {
        success: true,
        message: message.map(String::from),
    }
}

#[test]
fn given_blank_email_when_begin_submit_then_validation_error_and_no_attempt() {
    let mut form = RegistrationForm::with_email("   ");

    assert!(form.begin_submit().is_none());
    assert_eq!(form.error(), Some(EMPTY_EMAIL_MESSAGE));
    assert!(form.is_submit_enabled());
    assert!(!form.is_success());
}

#[test]
fn given_email_when_begin_submit_then_trimmed_and_control_disabled() {
    let mut form = RegistrationForm::with_email("  a@b.com ");

    assert_eq!(form.begin_submit().as_deref(), Some("a@b.com"));
    assert!(form.is_submitting());
    assert!(!form.is_submit_enabled());
}

#[test]
fn given_request_in_flight_when_begin_submit_again_then_blocked() {
    let mut form = RegistrationForm::with_email("a@b.com");
    form.begin_submit().unwrap();

    assert!(form.begin_submit().is_none());
    assert!(form.error().is_none());
}

#[test]
fn given_accepted_when_complete_then_success_and_input_cleared() {
    let mut form = RegistrationForm::with_email("a@b.com");
    form.begin_submit().unwrap();

    form.complete(Ok(accepted(Some("Registration successful."))));

    assert!(form.is_success());
    assert!(form.error().is_none());
    assert!(form.email.is_empty());
    assert_eq!(form.server_message(), Some("Registration successful."));
    assert!(!form.is_submitting());
}

#[test]
fn given_rejected_with_message_when_complete_then_exact_message_shown() {
    let mut form = RegistrationForm::with_email("a@b.com");
    form.begin_submit().unwrap();

    form.complete(Err(ClientError::rejected(
        409,
        Some("Email already registered".to_string()),
    )));

    assert!(!form.is_success());
    assert_eq!(form.error(), Some("Email already registered"));
    assert_eq!(form.email, "a@b.com");
    assert!(form.is_submit_enabled());
}

#[test]
fn given_rejected_without_message_when_complete_then_fallback() {
    let mut form = RegistrationForm::with_email("a@b.com");
    form.begin_submit().unwrap();

    form.complete(Err(ClientError::rejected(500, None)));

    assert_eq!(form.error(), Some(REGISTRATION_FAILED_MESSAGE));
}

#[test]
fn given_previous_success_when_resubmitted_then_state_reset() {
    let mut form = RegistrationForm::with_email("a@b.com");
    form.begin_submit().unwrap();
    form.complete(Ok(accepted(None)));

    form.email = "c@d.com".to_string();
    form.begin_submit().unwrap();

    assert!(!form.is_success());
    assert!(form.server_message().is_none());
}

#[test]
fn given_previous_error_when_resubmitted_then_error_cleared() {
    let mut form = RegistrationForm::with_email("a@b.com");
    form.begin_submit().unwrap();
    form.complete(Err(ClientError::rejected(400, None)));

    form.begin_submit().unwrap();

    assert!(form.error().is_none());
}
