//! This crate contains all shared UI for the workspace.

mod form_state;
pub use form_state::{FormField, RegistrationFormState};

mod navigation;
pub use navigation::LocationNavigator;

mod registration;
pub use registration::{
    make_registration, use_registration, PlatformStore, Registration, RegistrationProvider,
};

mod registration_form;
pub use registration_form::RegistrationForm;
