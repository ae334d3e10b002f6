// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::backend::{AuthBackend, BackendError};
use crate::routes::{AppRoute, Navigator};
use togather_shared::auth_error::translate;
use togather_shared::registration::{validate_registration, FormField, RegistrationForm, ValidationErrors};
use togather_shared::user::Session;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormStatus {
	Editing,
	Submitting,
	Success,
}

/// The values sent to the backend for a submission that passed validation
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistrationRequest {
	pub email: String,
	pub password: String,
	pub full_name: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
	/// Validation failed, or a submission was already underway; nothing was sent
	NotSubmitted,
	Registered(Session),
	/// The backend refused the registration; the translated message is stored as the submission error
	Failed(BackendError),
}

/// State of one registration attempt: form values, field errors, and the submission lifecycle
#[derive(Clone, Debug)]
pub struct RegistrationController {
	form: RegistrationForm,
	errors: ValidationErrors,
	submit_error: Option<String>,
	status: FormStatus,
}

impl Default for RegistrationController {
	fn default() -> Self {
		Self::new()
	}
}

impl RegistrationController {
	pub fn new() -> Self {
		Self {
			form: RegistrationForm::default(),
			errors: ValidationErrors::new(),
			submit_error: None,
			status: FormStatus::Editing,
		}
	}

	pub fn form(&self) -> &RegistrationForm {
		&self.form
	}

	pub fn errors(&self) -> &ValidationErrors {
		&self.errors
	}

	pub fn submit_error(&self) -> Option<&str> {
		self.submit_error.as_deref()
	}

	pub fn status(&self) -> FormStatus {
		self.status
	}

	pub fn inputs_disabled(&self) -> bool {
		self.status == FormStatus::Submitting
	}

	/// Updates one field. Only that field's error is cleared; other errors stay until the next submission.
	pub fn edit_field(&mut self, field: FormField, value: String) {
		if self.inputs_disabled() {
			return;
		}
		self.form.set(field, value);
		self.errors.clear(field);
	}

	/// Validates the form and, if it passes, moves into submission and hands back what to send.
	pub fn begin_submit(&mut self) -> Option<RegistrationRequest> {
		if self.status == FormStatus::Submitting {
			log::debug!("Ignoring registration submit while one is in flight");
			return None;
		}

		self.submit_error = None;
		self.errors = validate_registration(&self.form);
		if !self.errors.is_empty() {
			self.status = FormStatus::Editing;
			return None;
		}

		self.status = FormStatus::Submitting;
		Some(RegistrationRequest {
			email: self.form.email.clone(),
			password: self.form.password.clone(),
			full_name: self.form.full_name.clone(),
		})
	}

	/// Applies the backend's answer to a submission started with [`begin_submit`](Self::begin_submit).
	pub fn finish_submit(
		&mut self,
		result: Result<Session, BackendError>,
		navigator: &impl Navigator,
	) -> SubmitOutcome {
		match result {
			Ok(session) => {
				log::info!("Registration complete for {}", session.email);
				self.status = FormStatus::Success;
				navigator.navigate(AppRoute::Dashboard);
				SubmitOutcome::Registered(session)
			}
			Err(error) => {
				log::warn!("Registration failed: {}", error);
				self.submit_error = Some(String::from(translate(&error.code)));
				self.status = FormStatus::Editing;
				SubmitOutcome::Failed(error)
			}
		}
	}

	/// Validates, makes at most one registration call, and applies its result.
	pub async fn submit(&mut self, backend: &impl AuthBackend, navigator: &impl Navigator) -> SubmitOutcome {
		let Some(request) = self.begin_submit() else {
			return SubmitOutcome::NotSubmitted;
		};
		let result = backend
			.register(&request.email, &request.password, &request.full_name)
			.await;
		self.finish_submit(result, navigator)
	}
}
