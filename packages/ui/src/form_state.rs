//! State behind the registration form.
//!
//! The component keeps one [`RegistrationFormState`] in a signal and only
//! touches it through these methods, so every transition the form can make
//! is covered here without mounting a DOM.

use api::{RegistrationError, RegistrationInput, Token};

/// One of the three inputs of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Username,
    Email,
    Password,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationFormState {
    pub input: RegistrationInput,
    pub submitting: bool,
    pub error: Option<String>,
}

impl RegistrationFormState {
    /// Replace a field with the current content of its input.
    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Username => self.input.username = value,
            FormField::Email => self.input.email = value,
            FormField::Password => self.input.password = value,
        }
    }

    /// Start a submission, or `None` if one is already pending.
    ///
    /// Called synchronously from the submit handler, so a second submit event
    /// is refused before any task is spawned.
    pub fn begin_submit(&mut self) -> Option<RegistrationInput> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some(self.input.clone())
    }

    /// Record the outcome of a submission. Field values are never touched.
    pub fn finish(&mut self, result: &Result<Token, RegistrationError>) {
        self.submitting = false;
        match result {
            Ok(_) | Err(RegistrationError::Cancelled) | Err(RegistrationError::InFlight) => {}
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}
