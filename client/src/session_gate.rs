// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Keeps session-only pages in sync with the backend's idea of who is signed in.

use crate::backend::session::SessionSubscription;
use crate::backend::AuthBackend;
use crate::routes::{AppRoute, Navigator};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GateState {
	/// No session notification has arrived yet
	Loading,
	SignedIn { email: String },
	/// There's no session; the user has been sent to the login page
	SignedOut,
}

/// An open subscription to session changes on behalf of a page.
///
/// Every notification updates the gate's state and is passed on to the page. A notification without a session sends
/// the user to the login page. Closing (or dropping) the gate ends the subscription.
pub struct SessionGate {
	state: Rc<RefCell<GateState>>,
	subscription: Option<SessionSubscription>,
}

impl SessionGate {
	pub fn open<N: Navigator + 'static>(
		backend: &impl AuthBackend,
		navigator: N,
		on_state: impl Fn(&GateState) + 'static,
	) -> Self {
		let state = Rc::new(RefCell::new(GateState::Loading));
		let subscription = backend.on_session_change({
			let state = Rc::clone(&state);
			move |session| {
				let new_state = match session {
					Some(session) => GateState::SignedIn {
						email: session.email.clone(),
					},
					None => GateState::SignedOut,
				};
				*state.borrow_mut() = new_state.clone();

				if new_state == GateState::SignedOut {
					log::debug!("No session; leaving session-only page");
					navigator.navigate(AppRoute::Login);
				}
				on_state(&new_state);
			}
		});

		Self {
			state,
			subscription: Some(subscription),
		}
	}

	pub fn state(&self) -> GateState {
		self.state.borrow().clone()
	}

	pub fn is_open(&self) -> bool {
		self.subscription.as_ref().is_some_and(SessionSubscription::is_active)
	}

	/// Stops listening for session changes
	pub fn close(mut self) {
		if let Some(subscription) = self.subscription.take() {
			subscription.unsubscribe();
		}
	}
}

/// Signs out and sends the user to the login page. A failed sign-out is logged, and the user still ends up on the
/// login page.
pub async fn log_out(backend: &impl AuthBackend, navigator: &impl Navigator) {
	if let Err(error) = backend.sign_out().await {
		log::error!("Logout error: {}", error);
	}
	navigator.navigate(AppRoute::Login);
}
