// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::ClientError;
use serde::Deserialize;

/// Backend configuration bundled into the build
const EMBEDDED_CONFIG: &str = include_str!("../backend_config.json");

/// Connection settings for the hosted backend. Keys match the config object the backend console hands out.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BackendConfig {
	pub api_key: String,
	#[serde(default)]
	pub auth_domain: String,
	pub project_id: String,
	#[serde(default)]
	pub storage_bucket: String,
	#[serde(default)]
	pub messaging_sender_id: String,
	#[serde(default)]
	pub app_id: String,
	/// Base URL of the account API; point it at an emulator for local work
	#[serde(default = "default_auth_endpoint")]
	pub auth_endpoint: String,
	#[serde(default = "default_firestore_endpoint")]
	pub firestore_endpoint: String,
	/// Collection holding one profile document per user ID
	#[serde(default = "default_users_collection")]
	pub users_collection: String,
	/// How long any single backend request may take before it's treated as a network failure
	#[serde(default = "default_request_timeout_ms")]
	pub request_timeout_ms: u32,
}

fn default_auth_endpoint() -> String {
	String::from("https://identitytoolkit.googleapis.com/v1")
}

fn default_firestore_endpoint() -> String {
	String::from("https://firestore.googleapis.com/v1")
}

fn default_users_collection() -> String {
	String::from("users")
}

fn default_request_timeout_ms() -> u32 {
	15_000
}

impl BackendConfig {
	pub fn from_json(json: &str) -> Result<Self, ClientError> {
		let config: Self = serde_json::from_str(json)?;
		if config.api_key.trim().is_empty() {
			return Err(ClientError::ConfigMissing("apiKey"));
		}
		if config.project_id.trim().is_empty() {
			return Err(ClientError::ConfigMissing("projectId"));
		}
		Ok(config)
	}

	/// Loads the configuration compiled into the client
	pub fn embedded() -> Result<Self, ClientError> {
		Self::from_json(EMBEDDED_CONFIG)
	}
}
