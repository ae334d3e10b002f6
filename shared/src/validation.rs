// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum number of characters accepted for a password
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Minimum number of non-whitespace-bounded characters accepted for a full name
pub const FULL_NAME_MIN_LENGTH: usize = 2;

static EMAIL_PATTERN: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex"));

/// Checks that an email address has the shape `local@domain.tld`. Nothing about deliverability is checked.
pub fn is_valid_email(email: &str) -> bool {
	EMAIL_PATTERN.is_match(email)
}

/// Checks that a password is long enough. No character classes are required.
pub fn is_valid_password(password: &str) -> bool {
	password.chars().count() >= PASSWORD_MIN_LENGTH
}

pub fn passwords_match(password: &str, confirm_password: &str) -> bool {
	password == confirm_password
}

/// Checks the full name after trimming surrounding whitespace.
///
/// Only the trimmed length is checked; a single word of two characters passes.
pub fn is_valid_full_name(full_name: &str) -> bool {
	full_name.trim().chars().count() >= FULL_NAME_MIN_LENGTH
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn email_needs_at_and_dot_after_it() {
		assert!(is_valid_email("a@b.c"));
		assert!(is_valid_email("guest.list@wedding.example.com"));
		assert!(!is_valid_email(""));
		assert!(!is_valid_email("plainaddress"));
		assert!(!is_valid_email("a@b"));
		assert!(!is_valid_email("a.b@c"));
		assert!(!is_valid_email("a.b.c"));
		assert!(!is_valid_email("@b.c"));
		assert!(!is_valid_email("a@.c"));
		assert!(!is_valid_email("a@b."));
	}

	#[test]
	fn email_rejects_whitespace_and_extra_at() {
		assert!(!is_valid_email("a b@c.d"));
		assert!(!is_valid_email(" a@b.c"));
		assert!(!is_valid_email("a@b.c "));
		assert!(!is_valid_email("a@@b.c"));
		assert!(!is_valid_email("a@b@c.d"));
	}

	#[test]
	fn password_length_boundary() {
		assert!(!is_valid_password(""));
		assert!(!is_valid_password("1234567"));
		assert!(is_valid_password("12345678"));
		assert!(is_valid_password("a much longer passphrase"));
	}

	#[test]
	fn passwords_match_exactly() {
		for value in ["", "a", "Secret123", "  spaced  "] {
			assert!(passwords_match(value, value));
		}
		assert!(!passwords_match("a", "b"));
		assert!(!passwords_match("Secret123", "secret123"));
		assert!(!passwords_match("Secret123", "Secret123 "));
	}

	#[test]
	fn full_name_uses_trimmed_length() {
		assert!(!is_valid_full_name(""));
		assert!(!is_valid_full_name("J"));
		assert!(!is_valid_full_name("   J   "));
		assert!(is_valid_full_name("Jo"));
		assert!(is_valid_full_name("  Jo  "));
		assert!(is_valid_full_name("Jane Doe"));
	}
}
