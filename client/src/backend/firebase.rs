// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Browser implementation of the backend over the hosted REST APIs.

use super::session::{SessionStore, SessionSubscription};
use super::{AuthBackend, BackendError};
use crate::config::BackendConfig;
use crate::error::ClientError;
use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::future::Future;
use togather_shared::auth_error::AuthErrorCode;
use togather_shared::user::{Session, UserProfile};
use web_sys::Storage;

/// Local storage key under which the signed-in session survives page loads
const SESSION_STORAGE_KEY: &str = "togather.session";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AccountRequest<'a> {
	email: &'a str,
	password: &'a str,
	return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
	local_id: String,
	email: String,
	id_token: String,
	#[serde(default)]
	refresh_token: String,
}

impl From<AccountResponse> for Session {
	fn from(account: AccountResponse) -> Self {
		Self {
			uid: account.local_id,
			email: account.email,
			id_token: account.id_token,
			refresh_token: account.refresh_token,
		}
	}
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
	error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
	#[serde(default)]
	message: String,
	#[serde(default)]
	status: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CommitRequest {
	writes: Vec<DocumentWrite>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentWrite {
	update: Document,
	update_transforms: Vec<FieldTransform>,
}

#[derive(Debug, Serialize)]
struct Document {
	name: String,
	fields: BTreeMap<&'static str, DocumentValue>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
enum DocumentValue {
	StringValue(String),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldTransform {
	field_path: &'static str,
	set_to_server_value: &'static str,
}

/// Converts an account API error message into the backend error code used throughout the client.
///
/// Messages look like `EMAIL_EXISTS` or `WEAK_PASSWORD : Password should be at least 6 characters`.
fn account_error_code(message: &str) -> String {
	let reason = message.split(':').next().unwrap_or_default().trim();
	let code = match reason {
		"EMAIL_EXISTS" => AuthErrorCode::EmailAlreadyInUse.code(),
		"INVALID_EMAIL" | "MISSING_EMAIL" => AuthErrorCode::InvalidEmail.code(),
		"WEAK_PASSWORD" => AuthErrorCode::WeakPassword.code(),
		"TOO_MANY_ATTEMPTS_TRY_LATER" => AuthErrorCode::TooManyRequests.code(),
		"EMAIL_NOT_FOUND" => "auth/user-not-found",
		"INVALID_PASSWORD" => "auth/wrong-password",
		"INVALID_LOGIN_CREDENTIALS" => "auth/invalid-credential",
		"USER_DISABLED" => "auth/user-disabled",
		"OPERATION_NOT_ALLOWED" => "auth/operation-not-allowed",
		other => return format!("auth/{}", other.to_lowercase().replace('_', "-")),
	};
	String::from(code)
}

/// Converts a document API status (e.g. `PERMISSION_DENIED`) into an error code
fn document_error_code(status: &str) -> String {
	format!("firestore/{}", status.to_lowercase().replace('_', "-"))
}

fn profile_commit(config: &BackendConfig, profile: &UserProfile) -> CommitRequest {
	let name = format!(
		"projects/{}/databases/(default)/documents/{}/{}",
		config.project_id, config.users_collection, profile.uid
	);
	let mut fields = BTreeMap::new();
	fields.insert("uid", DocumentValue::StringValue(profile.uid.clone()));
	fields.insert("fullName", DocumentValue::StringValue(profile.full_name.clone()));
	fields.insert("email", DocumentValue::StringValue(profile.email.clone()));

	CommitRequest {
		writes: vec![DocumentWrite {
			update: Document { name, fields },
			update_transforms: vec![FieldTransform {
				field_path: "createdAt",
				set_to_server_value: "REQUEST_TIME",
			}],
		}],
	}
}

/// Races a request against a timer. The timer finishing first is reported as a network failure.
async fn race_timer<T>(
	request: impl Future<Output = T>,
	timer: impl Future<Output = ()>,
	timeout_ms: u32,
) -> Result<T, BackendError> {
	match select(Box::pin(request), Box::pin(timer)).await {
		Either::Left((output, _)) => Ok(output),
		Either::Right(_) => Err(BackendError::network(format!(
			"no response from the backend within {} ms",
			timeout_ms
		))),
	}
}

/// Runs a request, giving up with a network failure once the timeout passes
async fn with_timeout<T>(request: impl Future<Output = T>, timeout_ms: u32) -> Result<T, BackendError> {
	race_timer(request, TimeoutFuture::new(timeout_ms), timeout_ms).await
}

/// Builds the error for a failed response from its status and body text
fn error_from_body(status: u16, body: &str, error_code: impl Fn(&ApiErrorBody) -> String) -> BackendError {
	match serde_json::from_str::<ApiErrorResponse>(body) {
		Ok(parsed) => BackendError::with_details(error_code(&parsed.error), parsed.error.message),
		Err(error) => BackendError::with_details(format!("http/{}", status), error),
	}
}

async fn read_response<T: DeserializeOwned>(
	response: Response,
	error_code: impl Fn(&ApiErrorBody) -> String,
) -> Result<T, BackendError> {
	if response.ok() {
		return response.json().await.map_err(BackendError::network);
	}

	let status = response.status();
	let body = response.text().await.map_err(BackendError::network)?;
	Err(error_from_body(status, &body, error_code))
}

fn local_storage() -> Result<Storage, ClientError> {
	let window = web_sys::window().ok_or_else(|| ClientError::Storage(String::from("no browser window")))?;
	match window.local_storage() {
		Ok(Some(storage)) => Ok(storage),
		Ok(None) => Err(ClientError::Storage(String::from("local storage is disabled"))),
		Err(error) => Err(ClientError::Storage(format!("{:?}", error))),
	}
}

fn load_persisted_session() -> Result<Option<Session>, ClientError> {
	let stored = local_storage()?
		.get_item(SESSION_STORAGE_KEY)
		.map_err(|error| ClientError::Storage(format!("{:?}", error)))?;
	match stored {
		Some(json) => Ok(Some(serde_json::from_str(&json)?)),
		None => Ok(None),
	}
}

fn persist_session(session: Option<&Session>) -> Result<(), ClientError> {
	let storage = local_storage()?;
	let result = match session {
		Some(session) => storage.set_item(SESSION_STORAGE_KEY, &serde_json::to_string(session)?),
		None => storage.remove_item(SESSION_STORAGE_KEY),
	};
	result.map_err(|error| ClientError::Storage(format!("{:?}", error)))
}

/// Talks to the hosted account and document APIs from the browser.
pub struct FirebaseBackend {
	config: BackendConfig,
	sessions: SessionStore,
}

impl FirebaseBackend {
	/// Creates the backend, restoring a session left over from a previous page load if there is one.
	pub fn new(config: BackendConfig) -> Self {
		let restored = match load_persisted_session() {
			Ok(session) => session,
			Err(error) => {
				log::warn!("Discarding stored session: {}", error);
				None
			}
		};
		Self {
			config,
			sessions: SessionStore::new(restored),
		}
	}

	fn set_session(&self, session: Option<Session>) {
		if let Err(error) = persist_session(session.as_ref()) {
			log::warn!("Session change won't survive a reload: {}", error);
		}
		self.sessions.set(session);
	}

	async fn account_request(&self, operation: &str, email: &str, password: &str) -> Result<Session, BackendError> {
		let url = format!(
			"{}/accounts:{}?key={}",
			self.config.auth_endpoint, operation, self.config.api_key
		);
		let body = AccountRequest {
			email,
			password,
			return_secure_token: true,
		};
		let request = Request::post(&url).json(&body).map_err(BackendError::network)?;
		let response = with_timeout(request.send(), self.config.request_timeout_ms)
			.await?
			.map_err(BackendError::network)?;
		let account: AccountResponse = read_response(response, |error| account_error_code(&error.message)).await?;
		Ok(account.into())
	}

	async fn write_profile(&self, session: &Session, profile: &UserProfile) -> Result<(), BackendError> {
		let url = format!(
			"{}/projects/{}/databases/(default)/documents:commit",
			self.config.firestore_endpoint, self.config.project_id
		);
		let request = Request::post(&url)
			.header("Authorization", &format!("Bearer {}", session.id_token))
			.json(&profile_commit(&self.config, profile))
			.map_err(BackendError::network)?;
		let response = with_timeout(request.send(), self.config.request_timeout_ms)
			.await?
			.map_err(BackendError::network)?;
		let _: serde_json::Value = read_response(response, |error| match &error.status {
			Some(status) => document_error_code(status),
			None => document_error_code("unknown"),
		})
		.await?;
		Ok(())
	}
}

impl AuthBackend for FirebaseBackend {
	async fn register(&self, email: &str, password: &str, full_name: &str) -> Result<Session, BackendError> {
		let session = self.account_request("signUp", email, password).await?;
		log::info!("Created account {}", session.uid);
		self.set_session(Some(session.clone()));

		let profile = UserProfile::for_registration(&session, full_name, email);
		self.write_profile(&session, &profile).await?;
		Ok(session)
	}

	async fn sign_in(&self, email: &str, password: &str) -> Result<Session, BackendError> {
		let session = self.account_request("signInWithPassword", email, password).await?;
		log::info!("Signed in as {}", session.uid);
		self.set_session(Some(session.clone()));
		Ok(session)
	}

	async fn sign_out(&self) -> Result<(), BackendError> {
		// Tokens are bearer credentials with nothing to revoke server-side; forgetting them signs out.
		self.set_session(None);
		log::info!("Signed out");
		Ok(())
	}

	fn on_session_change(&self, listener: impl Fn(Option<&Session>) + 'static) -> SessionSubscription {
		self.sessions.subscribe(listener)
	}
}
