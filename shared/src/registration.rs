// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::validation::{is_valid_email, is_valid_full_name, is_valid_password, passwords_match};
use std::collections::BTreeMap;
use std::fmt;

/// The inputs of the registration form
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum FormField {
	FullName,
	Email,
	Password,
	ConfirmPassword,
}

impl FormField {
	pub const ALL: [FormField; 4] = [Self::FullName, Self::Email, Self::Password, Self::ConfirmPassword];

	/// Name used for the field in markup and stored records
	pub fn name(&self) -> &'static str {
		match self {
			Self::FullName => "fullName",
			Self::Email => "email",
			Self::Password => "password",
			Self::ConfirmPassword => "confirmPassword",
		}
	}
}

impl fmt::Display for FormField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.name())
	}
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RegistrationForm {
	pub full_name: String,
	pub email: String,
	pub password: String,
	pub confirm_password: String,
}

impl RegistrationForm {
	pub fn get(&self, field: FormField) -> &str {
		match field {
			FormField::FullName => &self.full_name,
			FormField::Email => &self.email,
			FormField::Password => &self.password,
			FormField::ConfirmPassword => &self.confirm_password,
		}
	}

	pub fn set(&mut self, field: FormField, value: String) {
		let slot = match field {
			FormField::FullName => &mut self.full_name,
			FormField::Email => &mut self.email,
			FormField::Password => &mut self.password,
			FormField::ConfirmPassword => &mut self.confirm_password,
		};
		*slot = value;
	}
}

/// Field-level validation messages, at most one per field
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationErrors(BTreeMap<FormField, String>);

impl ValidationErrors {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn get(&self, field: FormField) -> Option<&str> {
		self.0.get(&field).map(String::as_str)
	}

	pub fn contains(&self, field: FormField) -> bool {
		self.0.contains_key(&field)
	}

	pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
		self.0.insert(field, message.into());
	}

	/// Removes the error for one field. Returns whether there was one.
	pub fn clear(&mut self, field: FormField) -> bool {
		self.0.remove(&field).is_some()
	}
}

/// Runs every field check against the form. The result is empty exactly when the form may be submitted.
pub fn validate_registration(form: &RegistrationForm) -> ValidationErrors {
	let mut errors = ValidationErrors::new();

	if form.full_name.trim().is_empty() {
		errors.insert(FormField::FullName, "Full name is required");
	} else if !is_valid_full_name(&form.full_name) {
		errors.insert(FormField::FullName, "Please enter your full name");
	}

	if form.email.trim().is_empty() {
		errors.insert(FormField::Email, "Email is required");
	} else if !is_valid_email(&form.email) {
		errors.insert(FormField::Email, "Please enter a valid email address");
	}

	if form.password.is_empty() {
		errors.insert(FormField::Password, "Password is required");
	} else if !is_valid_password(&form.password) {
		errors.insert(FormField::Password, "Password must be at least 8 characters");
	}

	if form.confirm_password.is_empty() {
		errors.insert(FormField::ConfirmPassword, "Please confirm your password");
	} else if !passwords_match(&form.password, &form.confirm_password) {
		errors.insert(FormField::ConfirmPassword, "Passwords do not match");
	}

	errors
}
