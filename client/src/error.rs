// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

/// Failures inside the client itself, as opposed to errors reported by the backend
#[derive(Debug)]
pub enum ClientError {
	ConfigParse(serde_json::Error),
	ConfigMissing(&'static str),
	Storage(String),
}

impl From<serde_json::Error> for ClientError {
	fn from(error: serde_json::Error) -> Self {
		Self::ConfigParse(error)
	}
}

impl fmt::Display for ClientError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::ConfigParse(error) => write!(f, "The backend configuration couldn't be read: {}", error),
			Self::ConfigMissing(key) => write!(f, "The backend configuration is missing \"{}\"", key),
			Self::Storage(error) => write!(f, "Browser storage is unavailable: {}", error),
		}
	}
}
