// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The contract with the hosted authentication and document backend.
//!
//! Pages never talk to the backend directly; they are handed something implementing [`AuthBackend`] so tests can
//! substitute an in-memory backend for the browser-facing one.

use std::fmt;
use togather_shared::auth_error::AuthErrorCode;
use togather_shared::user::Session;

pub mod firebase;
#[cfg(test)]
pub mod mock;
pub mod session;

use session::SessionSubscription;

/// A failure reported by the backend, identified by its error code
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BackendError {
	pub code: String,
	pub details: Option<String>,
}

impl BackendError {
	pub fn new(code: impl Into<String>) -> Self {
		Self {
			code: code.into(),
			details: None,
		}
	}

	pub fn with_details(code: impl Into<String>, details: impl fmt::Display) -> Self {
		Self {
			code: code.into(),
			details: Some(details.to_string()),
		}
	}

	pub fn network(details: impl fmt::Display) -> Self {
		Self::with_details(AuthErrorCode::NetworkRequestFailed.code(), details)
	}
}

impl From<AuthErrorCode> for BackendError {
	fn from(code: AuthErrorCode) -> Self {
		Self::new(code.code())
	}
}

impl fmt::Display for BackendError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.details {
			Some(details) => write!(f, "{}: {}", self.code, details),
			None => write!(f, "{}", self.code),
		}
	}
}

/// Operations the client needs from the authentication backend.
///
/// Everything runs on the browser's single thread, so neither futures nor listeners need to be `Send`.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
	/// Creates an account, signs it in, and stores its profile record.
	async fn register(&self, email: &str, password: &str, full_name: &str) -> Result<Session, BackendError>;

	async fn sign_in(&self, email: &str, password: &str) -> Result<Session, BackendError>;

	async fn sign_out(&self) -> Result<(), BackendError>;

	/// Registers a listener for session changes. The listener is called immediately with the current session and
	/// again on every change until the returned subscription is disposed.
	fn on_session_change(&self, listener: impl Fn(Option<&Session>) + 'static) -> SessionSubscription;
}
