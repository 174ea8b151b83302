//! # API crate — the signup call and everything around it
//!
//! This crate holds the non-visual half of the registration page. The UI
//! crate builds a [`RegistrationService`] from platform capabilities and calls
//! it from the form's submit handler; nothing here depends on Dioxus.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`SignupClient`] trait and its `reqwest` implementation |
//! | [`config`] | [`RegistrationConfig`]: endpoint, redirect path, token key |
//! | [`error`] | [`RegistrationError`] and [`NavigationError`] |
//! | [`guard`] | [`SubmitGuard`], the shared in-flight flag |
//! | [`models`] | Form input, wire bodies and the opaque [`Token`] |
//! | [`navigation`] | [`Navigator`] trait for the post-signup redirect |
//! | [`registration`] | [`RegistrationService`], one submission end to end |
//!
//! ## Wire contract
//!
//! `POST {endpoint_url}` with `{"username": .., "email": .., "password": ..}`;
//! a 2xx response must be a JSON object with a string `token`.

pub mod client;
pub mod config;
pub mod error;
pub mod guard;
pub mod models;
pub mod navigation;
pub mod registration;

pub use client::{HttpSignupClient, SignupClient};
pub use config::RegistrationConfig;
pub use error::{NavigationError, RegistrationError};
pub use guard::SubmitGuard;
pub use models::{RegistrationInput, SignupRequest, SignupResponse, Token};
pub use navigation::Navigator;
pub use registration::RegistrationService;

pub use futures::future::AbortHandle;
