// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A signed-in user as the authentication backend reports it.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Session {
	pub uid: String,
	pub email: String,
	/// Bearer token for calls made on behalf of this user
	#[serde(default)]
	pub id_token: String,
	#[serde(default)]
	pub refresh_token: String,
}

/// Profile record stored under the user's ID when an account is created
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
	pub uid: String,
	pub full_name: String,
	pub email: String,
	/// Assigned by the backend when the record is written
	#[serde(default)]
	pub created_at: Option<DateTime<Utc>>,
}

impl UserProfile {
	/// Builds the profile written for a newly registered session.
	///
	/// The email is stored as the user entered it, which may differ from the backend's normalized copy in the session.
	/// The creation time is left for the backend to fill.
	pub fn for_registration(session: &Session, full_name: &str, email: &str) -> Self {
		Self {
			uid: session.uid.clone(),
			full_name: full_name.to_string(),
			email: email.to_string(),
			created_at: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn profile_uses_camel_case_keys() {
		let session = Session {
			uid: "u1".into(),
			email: "jo@example.com".into(),
			id_token: String::new(),
			refresh_token: String::new(),
		};
		let profile = UserProfile::for_registration(&session, "Jo Doe", "jo@example.com");
		let json = serde_json::to_value(&profile).unwrap();
		assert_eq!(json["uid"], "u1");
		assert_eq!(json["fullName"], "Jo Doe");
		assert_eq!(json["email"], "jo@example.com");
		assert!(json["createdAt"].is_null());
	}

	#[test]
	fn profile_keeps_email_as_entered() {
		let session = Session {
			uid: "u1".into(),
			email: "jo@example.com".into(),
			id_token: String::new(),
			refresh_token: String::new(),
		};
		let profile = UserProfile::for_registration(&session, "Jo Doe", "Jo@Example.com");
		assert_eq!(profile.uid, "u1");
		assert_eq!(profile.email, "Jo@Example.com");
	}
}
