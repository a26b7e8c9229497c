use super::*;

fn validator() -> Validator {
    Validator::new().unwrap()
}

fn check(name: &str, value: &str, required: bool) -> Result<(), String> {
    validator().validate(&FieldInput::new(name, value, required)).map_err(|e| e.to_string())
}

// =============================================================
// capitalize
// =============================================================

#[test]
fn capitalize_uppercases_first_char_only() {
    assert_eq!(capitalize("name"), "Name");
    assert_eq!(capitalize("subject line"), "Subject line");
    assert_eq!(capitalize("éclair"), "Éclair");
    assert_eq!(capitalize(""), "");
}

// =============================================================
// Required
// =============================================================

#[test]
fn required_empty_field_names_the_field() {
    assert_eq!(check("name", "", true), Err("Name is required".to_owned()));
    assert_eq!(check("subject", "   ", true), Err("Subject is required".to_owned()));
}

#[test]
fn optional_empty_field_passes() {
    assert_eq!(check("subject", "", false), Ok(()));
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_minimal_address_passes() {
    assert_eq!(check("email", "a@b.c", true), Ok(()));
    assert_eq!(check("email", "  jane.doe@example.co.uk ", true), Ok(()));
}

#[test]
fn email_without_dot_fails() {
    assert_eq!(check("email", "a@b", true), Err("Please enter a valid email address".to_owned()));
}

#[test]
fn email_with_inner_whitespace_fails() {
    assert_eq!(check("email", "a b@c.d", true), Err("Please enter a valid email address".to_owned()));
}

#[test]
fn email_with_two_ats_fails() {
    assert_eq!(check("email", "a@b@c.d", true), Err("Please enter a valid email address".to_owned()));
}

#[test]
fn empty_required_email_reports_required_only() {
    assert_eq!(check("email", "", true), Err("Email is required".to_owned()));
}

#[test]
fn empty_optional_email_skips_format_check() {
    assert_eq!(check("email", "", false), Ok(()));
}

// =============================================================
// Message
// =============================================================

#[test]
fn message_of_nine_chars_fails() {
    assert_eq!(
        check("message", "123456789", true),
        Err("Message must be at least 10 characters".to_owned())
    );
}

#[test]
fn message_of_ten_chars_passes() {
    assert_eq!(check("message", "1234567890", true), Ok(()));
}

#[test]
fn message_length_ignores_surrounding_whitespace() {
    assert!(check("message", "   short   ", true).is_err());
}

#[test]
fn message_length_counts_characters_not_bytes() {
    assert!(check("message", "ééééééééé", true).is_err());
    assert_eq!(check("message", "éééééééééé", true), Ok(()));
}

#[test]
fn message_length_counts_emoji_once() {
    assert!(check("message", "😀😀😀😀😀", true).is_err());
    assert_eq!(check("message", "😀😀😀😀😀😀😀😀😀😀", true), Ok(()));
}

#[test]
fn empty_required_message_reports_required_only() {
    assert_eq!(check("message", "", true), Err("Message is required".to_owned()));
}

#[test]
fn email_with_unicode_whitespace_fails() {
    for value in ["a\u{a0}b@c.d", "a@b\u{2003}c.d", "a@b.c\u{3000}d"] {
        assert_eq!(
            check("email", value, true),
            Err("Please enter a valid email address".to_owned()),
            "{value:?}"
        );
    }
}

// =============================================================
// FormState
// =============================================================

fn valid_fields() -> [FieldInput<'static>; 3] {
    [
        FieldInput::new("name", "Ada", true),
        FieldInput::new("email", "ada@example.com", true),
        FieldInput::new("message", "Hello there, Ada here.", true),
    ]
}

fn sent_ticket(outcome: SubmitOutcome) -> ResetTicket {
    match outcome {
        SubmitOutcome::Sent(ticket) => ticket,
        SubmitOutcome::Rejected(failures) => panic!("expected Sent, got {failures:?}"),
    }
}

#[test]
fn submit_with_valid_fields_enters_sent() {
    let mut state = FormState::default();
    assert!(matches!(state.submit(&validator(), &valid_fields()), SubmitOutcome::Sent(_)));
    assert_eq!(state.submission(), Submission::Sent);
}

#[test]
fn submit_with_invalid_field_lists_every_failure_by_index() {
    let mut state = FormState::default();
    let fields = [
        FieldInput::new("name", "", true),
        FieldInput::new("email", "nope", true),
        FieldInput::new("message", "Long enough message", true),
    ];
    let outcome = state.submit(&validator(), &fields);
    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(vec![
            (0, FieldError::Required { field: "name".to_owned() }),
            (1, FieldError::InvalidEmail),
        ])
    );
    assert_eq!(state.submission(), Submission::Idle);
}

#[test]
fn failures_are_attributed_to_the_right_field_when_names_repeat() {
    let mut state = FormState::default();
    let fields = [FieldInput::new("email", "ok@example.com", true), FieldInput::new("email", "broken", true)];
    assert_eq!(
        state.submit(&validator(), &fields),
        SubmitOutcome::Rejected(vec![(1, FieldError::InvalidEmail)])
    );
}

#[test]
fn rejected_submit_does_not_touch_a_pending_confirmation() {
    let mut state = FormState::default();
    let ticket = sent_ticket(state.submit(&validator(), &valid_fields()));
    state.submit(&validator(), &[FieldInput::new("name", "", true)]);
    assert_eq!(state.submission(), Submission::Sent);
    assert!(state.reset(ticket).is_some());
}

#[test]
fn reset_returns_to_idle_and_restores_button() {
    let mut state = FormState::default();
    let ticket = sent_ticket(state.submit(&validator(), &valid_fields()));
    state.capture_button("Send Message");
    assert_eq!(state.reset(ticket), Some(Restore { button_html: Some("Send Message".to_owned()) }));
    assert_eq!(state.submission(), Submission::Idle);
}

#[test]
fn resubmit_while_sent_restores_the_first_original_label() {
    let mut state = FormState::default();
    let first = sent_ticket(state.submit(&validator(), &valid_fields()));
    state.capture_button("Send Message");

    let second = sent_ticket(state.submit(&validator(), &valid_fields()));
    state.capture_button("Sent!");

    assert_eq!(state.reset(first), None);
    assert_eq!(state.submission(), Submission::Sent);
    assert_eq!(state.reset(second), Some(Restore { button_html: Some("Send Message".to_owned()) }));
    assert_eq!(state.submission(), Submission::Idle);
}

#[test]
fn reset_twice_is_a_noop() {
    let mut state = FormState::default();
    let ticket = sent_ticket(state.submit(&validator(), &valid_fields()));
    state.capture_button("Send");
    assert!(state.reset(ticket).is_some());
    assert_eq!(state.reset(ticket), None);
}

#[test]
fn next_cycle_captures_afresh() {
    let mut state = FormState::default();
    let ticket = sent_ticket(state.submit(&validator(), &valid_fields()));
    state.capture_button("Send");
    state.reset(ticket);

    let ticket = sent_ticket(state.submit(&validator(), &valid_fields()));
    state.capture_button("Send again");
    assert_eq!(state.reset(ticket), Some(Restore { button_html: Some("Send again".to_owned()) }));
}

#[test]
fn form_error_display() {
    assert_eq!(FormError::Pattern("bad".into()).to_string(), "invalid validation pattern: bad");
}
