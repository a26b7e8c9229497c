//! Contact form validation and the simulated submission flow.
//!
//! Rules run on the trimmed value in a fixed order and the last failing
//! rule wins. Content rules only look at non-empty values, so an empty
//! required email or message reports the generic "is required" message.
//! Nothing is transmitted: a valid submit flips to [`Submission::Sent`]
//! until the host's reset timer calls [`FormState::reset`].

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::fmt;

use regex::Regex;

use crate::consts::MESSAGE_MIN_CHARS;

/// Anything that is not whitespace or `@`, then `@`, then a dotted domain.
/// `\s` is Unicode-aware, so NBSP and other wide spaces are rejected too.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Failure to build a [`Validator`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("invalid validation pattern: {0}")]
    Pattern(String),
}

impl From<regex::Error> for FormError {
    fn from(err: regex::Error) -> Self {
        Self::Pattern(err.to_string())
    }
}

/// A user-visible validation message for one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required { field: String },
    InvalidEmail,
    MessageTooShort { min: usize },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{} is required", capitalize(field)),
            Self::InvalidEmail => f.write_str("Please enter a valid email address"),
            Self::MessageTooShort { min } => write!(f, "Message must be at least {min} characters"),
        }
    }
}

/// Uppercase the first character, leave the rest alone.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Snapshot of one form control at validation time.
#[derive(Clone, Copy, Debug)]
pub struct FieldInput<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub required: bool,
}

impl<'a> FieldInput<'a> {
    pub fn new(name: &'a str, value: &'a str, required: bool) -> Self {
        Self { name, value, required }
    }
}

#[derive(Clone, Debug)]
pub struct Validator {
    email: Regex,
    message_min: usize,
}

impl Validator {
    /// Compile the validation rules.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Pattern`] if the email pattern fails to compile.
    pub fn new() -> Result<Self, FormError> {
        Ok(Self { email: Regex::new(EMAIL_PATTERN)?, message_min: MESSAGE_MIN_CHARS })
    }

    #[must_use]
    pub fn is_valid_email(&self, value: &str) -> bool {
        self.email.is_match(value)
    }

    /// Validate one field.
    ///
    /// # Errors
    ///
    /// Returns the single message that should be shown for the field.
    pub fn validate(&self, field: &FieldInput<'_>) -> Result<(), FieldError> {
        let value = field.value.trim();
        let mut error = None;

        if field.required && value.is_empty() {
            error = Some(FieldError::Required { field: field.name.to_owned() });
        }
        if field.name == "email" && !value.is_empty() && !self.is_valid_email(value) {
            error = Some(FieldError::InvalidEmail);
        }
        // Length is in Unicode scalar values, not UTF-16 units: an emoji counts once.
        if field.name == "message" && !value.is_empty() && value.chars().count() < self.message_min {
            error = Some(FieldError::MessageTooShort { min: self.message_min });
        }

        error.map_or(Ok(()), Err)
    }
}

/// Whether the confirmation is currently on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Submission {
    #[default]
    Idle,
    Sent,
}

/// Identifies the reset scheduled by one successful submit.
///
/// A later submit issues a new ticket; resets carrying an older one are stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetTicket(u64);

/// Result of a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the confirmation should be shown and a reset
    /// scheduled with the ticket.
    Sent(ResetTicket),
    /// At least one field failed; listed by field index in form order.
    Rejected(Vec<(usize, FieldError)>),
}

/// What the host must put back when the confirmation ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Restore {
    /// Submit button markup from before the first "Sent!" swap, if captured.
    pub button_html: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct FormState {
    submission: Submission,
    generation: u64,
    button_html: Option<String>,
}

impl FormState {
    #[must_use]
    pub fn submission(&self) -> Submission {
        self.submission
    }

    /// Validate every field and, when all pass, enter [`Submission::Sent`].
    pub fn submit(&mut self, validator: &Validator, fields: &[FieldInput<'_>]) -> SubmitOutcome {
        let failures = fields
            .iter()
            .enumerate()
            .filter_map(|(index, field)| validator.validate(field).err().map(|e| (index, e)))
            .collect::<Vec<_>>();
        if !failures.is_empty() {
            return SubmitOutcome::Rejected(failures);
        }
        self.submission = Submission::Sent;
        self.generation += 1;
        SubmitOutcome::Sent(ResetTicket(self.generation))
    }

    /// Remember the submit button markup before it is swapped for "Sent!".
    ///
    /// Only the first capture of a confirmation cycle is kept, so a resubmit
    /// while "Sent!" is showing cannot make "Sent!" the restore target.
    pub fn capture_button(&mut self, current_html: &str) {
        if self.button_html.is_none() {
            self.button_html = Some(current_html.to_owned());
        }
    }

    /// End the confirmation for `ticket` and return to idle.
    ///
    /// Returns `None` for a stale ticket, superseded by a later submit.
    pub fn reset(&mut self, ticket: ResetTicket) -> Option<Restore> {
        if ticket.0 != self.generation || self.submission != Submission::Sent {
            return None;
        }
        self.submission = Submission::Idle;
        Some(Restore { button_html: self.button_html.take() })
    }
}
