// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory backend for tests.

use super::session::{SessionStore, SessionSubscription};
use super::{AuthBackend, BackendError};
use chrono::Utc;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use togather_shared::auth_error::AuthErrorCode;
use togather_shared::user::{Session, UserProfile};

struct MockAccount {
	uid: String,
	password: String,
}

#[derive(Default)]
pub struct MockBackend {
	sessions: SessionStore,
	accounts: RefCell<HashMap<String, MockAccount>>,
	profile_writes: RefCell<Vec<UserProfile>>,
	register_calls: Cell<usize>,
	sign_in_calls: Cell<usize>,
	sign_out_calls: Cell<usize>,
	next_register_error: RefCell<Option<BackendError>>,
	next_sign_out_error: RefCell<Option<BackendError>>,
}

impl MockBackend {
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts the backend with a user already signed in
	pub fn signed_in(email: &str) -> Self {
		let backend = Self::default();
		backend.sessions.set(Some(mock_session(&format!("mock-{}", email), email)));
		backend
	}

	/// Makes the next registration attempt fail with the given error
	pub fn fail_next_register(&self, error: BackendError) {
		*self.next_register_error.borrow_mut() = Some(error);
	}

	/// Makes the next sign-out attempt fail with the given error. The session is left in place.
	pub fn fail_next_sign_out(&self, error: BackendError) {
		*self.next_sign_out_error.borrow_mut() = Some(error);
	}

	pub fn sessions(&self) -> &SessionStore {
		&self.sessions
	}

	pub fn profile_writes(&self) -> Vec<UserProfile> {
		self.profile_writes.borrow().clone()
	}

	pub fn register_calls(&self) -> usize {
		self.register_calls.get()
	}

	pub fn sign_in_calls(&self) -> usize {
		self.sign_in_calls.get()
	}

	pub fn sign_out_calls(&self) -> usize {
		self.sign_out_calls.get()
	}
}

/// Accounts are keyed and reported by lowercased email, as the hosted backend does
fn normalize_email(email: &str) -> String {
	email.to_lowercase()
}

fn mock_session(uid: &str, email: &str) -> Session {
	Session {
		uid: uid.to_string(),
		email: normalize_email(email),
		id_token: format!("mock-token-{}", uid),
		refresh_token: String::new(),
	}
}

impl AuthBackend for MockBackend {
	async fn register(&self, email: &str, password: &str, full_name: &str) -> Result<Session, BackendError> {
		self.register_calls.set(self.register_calls.get() + 1);
		if let Some(error) = self.next_register_error.borrow_mut().take() {
			return Err(error);
		}

		let account_key = normalize_email(email);
		if self.accounts.borrow().contains_key(&account_key) {
			return Err(AuthErrorCode::EmailAlreadyInUse.into());
		}
		// The hosted backend enforces its own, shorter, minimum.
		if password.chars().count() < 6 {
			return Err(AuthErrorCode::WeakPassword.into());
		}

		let uid = format!("mock-uid-{}", self.accounts.borrow().len() + 1);
		self.accounts.borrow_mut().insert(
			account_key,
			MockAccount {
				uid: uid.clone(),
				password: password.to_string(),
			},
		);

		let session = mock_session(&uid, email);
		self.sessions.set(Some(session.clone()));

		let mut profile = UserProfile::for_registration(&session, full_name, email);
		profile.created_at = Some(Utc::now());
		self.profile_writes.borrow_mut().push(profile);

		Ok(session)
	}

	async fn sign_in(&self, email: &str, password: &str) -> Result<Session, BackendError> {
		self.sign_in_calls.set(self.sign_in_calls.get() + 1);
		let session = match self.accounts.borrow().get(&normalize_email(email)) {
			Some(account) if account.password == password => mock_session(&account.uid, email),
			_ => return Err(BackendError::new("auth/invalid-credential")),
		};
		self.sessions.set(Some(session.clone()));
		Ok(session)
	}

	async fn sign_out(&self) -> Result<(), BackendError> {
		self.sign_out_calls.set(self.sign_out_calls.get() + 1);
		if let Some(error) = self.next_sign_out_error.borrow_mut().take() {
			return Err(error);
		}
		self.sessions.set(None);
		Ok(())
	}

	fn on_session_change(&self, listener: impl Fn(Option<&Session>) + 'static) -> SessionSubscription {
		self.sessions.subscribe(listener)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use futures::executor::block_on;

	#[test]
	fn register_signs_in_and_writes_profile() {
		let backend = MockBackend::new();
		let session = block_on(backend.register("jo@example.com", "password1", "Jo Doe")).unwrap();

		assert_eq!(backend.sessions().current(), Some(session.clone()));
		let writes = backend.profile_writes();
		assert_eq!(writes.len(), 1);
		assert_eq!(writes[0].uid, session.uid);
		assert_eq!(writes[0].full_name, "Jo Doe");
		assert!(writes[0].created_at.is_some());
	}

	#[test]
	fn profile_keeps_typed_email_while_session_is_normalized() {
		let backend = MockBackend::new();
		let session = block_on(backend.register("Jo@Example.com", "password1", "Jo Doe")).unwrap();

		assert_eq!(session.email, "jo@example.com");
		assert_eq!(backend.profile_writes()[0].email, "Jo@Example.com");
		let error = block_on(backend.register("jo@example.com", "password2", "Jo Again")).unwrap_err();
		assert_eq!(error.code, "auth/email-already-in-use");
	}

	#[test]
	fn duplicate_email_is_rejected() {
		let backend = MockBackend::new();
		block_on(backend.register("jo@example.com", "password1", "Jo Doe")).unwrap();
		let error = block_on(backend.register("jo@example.com", "password2", "Jo Again")).unwrap_err();
		assert_eq!(error.code, "auth/email-already-in-use");
		assert_eq!(backend.profile_writes().len(), 1);
	}

	#[test]
	fn sign_in_checks_password() {
		let backend = MockBackend::new();
		block_on(backend.register("jo@example.com", "password1", "Jo Doe")).unwrap();
		block_on(backend.sign_out()).unwrap();

		assert!(block_on(backend.sign_in("jo@example.com", "wrong")).is_err());
		assert_eq!(backend.sessions().current(), None);
		let session = block_on(backend.sign_in("jo@example.com", "password1")).unwrap();
		assert_eq!(session.email, "jo@example.com");
		assert_eq!(backend.sign_in_calls(), 2);
	}

	#[test]
	fn failed_sign_out_keeps_session() {
		let backend = MockBackend::signed_in("jo@example.com");
		backend.fail_next_sign_out(BackendError::network("offline"));
		assert!(block_on(backend.sign_out()).is_err());
		assert!(backend.sessions().current().is_some());
		assert!(block_on(backend.sign_out()).is_ok());
		assert!(backend.sessions().current().is_none());
	}
}
