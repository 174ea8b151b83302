//! Registration form with username/email/password fields.

use std::cell::RefCell;
use std::rc::Rc;

use api::AbortHandle;
use dioxus::prelude::*;

use crate::form_state::{FormField, RegistrationFormState};
use crate::registration::use_registration;

/// Registration form component.
///
/// Each field holds exactly what was last typed into it. Submitting never
/// reloads the page; the values are sent as-is to the configured endpoint and,
/// on success, the browser is redirected to the login page. A pending
/// submission disables the button and is aborted if the form unmounts.
#[component]
pub fn RegistrationForm() -> Element {
    let registration = use_registration();
    let mut form = use_signal(RegistrationFormState::default);
    let pending = use_hook(|| Rc::new(RefCell::new(Option::<AbortHandle>::None)));

    let login_path = registration.config().redirect_path.clone();

    use_drop({
        let pending = pending.clone();
        move || {
            if let Some(handle) = pending.borrow_mut().take() {
                handle.abort();
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        // `submitting` flips before the task is spawned, so rapid repeats stop here
        let Some(input) = form.write().begin_submit() else {
            return;
        };

        let (submission, abort) = registration.submit_abortable(input);
        *pending.borrow_mut() = Some(abort);

        let pending = pending.clone();
        spawn(async move {
            let result = submission.await;
            pending.borrow_mut().take();
            form.write().finish(&result);
        });
    };

    let state = form();

    rsx! {
        div {
            class: "registration",

            form {
                onsubmit: handle_submit,

                if let Some(err) = state.error {
                    div {
                        class: "registration-error",
                        "{err}"
                    }
                }

                label {
                    "Username:"
                    input {
                        r#type: "text",
                        value: state.input.username,
                        oninput: move |evt: FormEvent| form.write().set_field(FormField::Username, evt.value()),
                    }
                }
                br {}
                label {
                    "Email:"
                    input {
                        r#type: "email",
                        value: state.input.email,
                        oninput: move |evt: FormEvent| form.write().set_field(FormField::Email, evt.value()),
                    }
                }
                br {}
                label {
                    "Password:"
                    input {
                        r#type: "password",
                        value: state.input.password,
                        oninput: move |evt: FormEvent| form.write().set_field(FormField::Password, evt.value()),
                    }
                }
                br {}
                button {
                    r#type: "submit",
                    disabled: state.submitting,
                    if state.submitting { "Registering..." } else { "Register" }
                }
            }

            p {
                "Already have an account? "
                a {
                    href: "{login_path}",
                    "Sign in"
                }
            }
        }
    }
}
