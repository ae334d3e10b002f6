// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

/// Message shown for any backend failure that doesn't have a specific translation
pub const FALLBACK_MESSAGE: &str = "An error occurred. Please try again.";

/// Error codes reported by the authentication backend that have user-facing translations
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AuthErrorCode {
	EmailAlreadyInUse,
	InvalidEmail,
	WeakPassword,
	NetworkRequestFailed,
	TooManyRequests,
}

impl AuthErrorCode {
	pub const ALL: [AuthErrorCode; 5] = [
		Self::EmailAlreadyInUse,
		Self::InvalidEmail,
		Self::WeakPassword,
		Self::NetworkRequestFailed,
		Self::TooManyRequests,
	];

	/// The code string as the backend reports it
	pub fn code(&self) -> &'static str {
		match self {
			Self::EmailAlreadyInUse => "auth/email-already-in-use",
			Self::InvalidEmail => "auth/invalid-email",
			Self::WeakPassword => "auth/weak-password",
			Self::NetworkRequestFailed => "auth/network-request-failed",
			Self::TooManyRequests => "auth/too-many-requests",
		}
	}

	pub fn from_code(code: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|known| known.code() == code)
	}

	/// The sentence shown to the user for this error
	pub fn message(&self) -> &'static str {
		match self {
			Self::EmailAlreadyInUse => "This email address is already registered. Please login instead.",
			Self::InvalidEmail => "Please enter a valid email address.",
			Self::WeakPassword => "Password is too weak. Please use at least 8 characters.",
			Self::NetworkRequestFailed => "Network error. Please check your internet connection.",
			Self::TooManyRequests => "Too many attempts. Please try again later.",
		}
	}
}

impl fmt::Display for AuthErrorCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.code())
	}
}

/// Translates a backend error code into the message to show the user. Unknown codes get a generic message.
pub fn translate(code: &str) -> &'static str {
	match AuthErrorCode::from_code(code) {
		Some(known) => known.message(),
		None => FALLBACK_MESSAGE,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_codes_translate_to_their_sentence() {
		assert_eq!(
			translate("auth/email-already-in-use"),
			"This email address is already registered. Please login instead."
		);
		assert_eq!(translate("auth/invalid-email"), "Please enter a valid email address.");
		assert_eq!(
			translate("auth/weak-password"),
			"Password is too weak. Please use at least 8 characters."
		);
		assert_eq!(
			translate("auth/network-request-failed"),
			"Network error. Please check your internet connection."
		);
		assert_eq!(
			translate("auth/too-many-requests"),
			"Too many attempts. Please try again later."
		);
	}

	#[test]
	fn unknown_codes_fall_back() {
		assert_eq!(translate(""), FALLBACK_MESSAGE);
		assert_eq!(translate("auth/user-disabled"), FALLBACK_MESSAGE);
		assert_eq!(translate("AUTH/EMAIL-ALREADY-IN-USE"), FALLBACK_MESSAGE);
	}

	#[test]
	fn codes_round_trip_through_strings() {
		for code in AuthErrorCode::ALL {
			assert_eq!(AuthErrorCode::from_code(code.code()), Some(code));
			assert_eq!(code.to_string(), code.code());
		}
	}
}
