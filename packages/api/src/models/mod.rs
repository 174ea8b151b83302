//! Data models for the registration flow.

mod registration;

pub use registration::{RegistrationInput, SignupRequest, SignupResponse, Token};
