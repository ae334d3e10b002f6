// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use togather_shared::user::Session;

type SessionListener = Rc<dyn Fn(Option<&Session>)>;

#[derive(Default)]
struct SessionStoreState {
	current: Option<Session>,
	listeners: BTreeMap<u64, SessionListener>,
	next_listener_id: u64,
}

/// Holds the signed-in session and tells listeners whenever it changes.
///
/// Cloning the store gives another handle to the same session.
#[derive(Clone, Default)]
pub struct SessionStore {
	state: Rc<RefCell<SessionStoreState>>,
}

impl SessionStore {
	pub fn new(initial: Option<Session>) -> Self {
		let state = SessionStoreState {
			current: initial,
			..Default::default()
		};
		Self {
			state: Rc::new(RefCell::new(state)),
		}
	}

	pub fn current(&self) -> Option<Session> {
		self.state.borrow().current.clone()
	}

	/// Replaces the current session and notifies every listener.
	pub fn set(&self, session: Option<Session>) {
		self.state.borrow_mut().current = session;
		self.notify();
	}

	/// Adds a listener and immediately calls it with the current session.
	pub fn subscribe(&self, listener: impl Fn(Option<&Session>) + 'static) -> SessionSubscription {
		let listener: SessionListener = Rc::new(listener);
		let (id, current) = {
			let mut state = self.state.borrow_mut();
			let id = state.next_listener_id;
			state.next_listener_id += 1;
			state.listeners.insert(id, Rc::clone(&listener));
			(id, state.current.clone())
		};

		listener(current.as_ref());

		SessionSubscription {
			store: Rc::downgrade(&self.state),
			id: Some(id),
		}
	}

	pub fn listener_count(&self) -> usize {
		self.state.borrow().listeners.len()
	}

	fn notify(&self) {
		// Listeners may subscribe, unsubscribe, or change the session themselves, so nothing stays borrowed while
		// they run.
		let (current, listeners): (Option<Session>, Vec<SessionListener>) = {
			let state = self.state.borrow();
			(state.current.clone(), state.listeners.values().cloned().collect())
		};
		for listener in listeners {
			listener(current.as_ref());
		}
	}
}

/// A live session listener. Disposing it (explicitly or by dropping it) stops further notifications.
#[must_use = "dropping a subscription immediately unsubscribes it"]
pub struct SessionSubscription {
	store: Weak<RefCell<SessionStoreState>>,
	id: Option<u64>,
}

impl SessionSubscription {
	pub fn unsubscribe(mut self) {
		self.dispose();
	}

	pub fn is_active(&self) -> bool {
		let Some(id) = self.id else {
			return false;
		};
		match self.store.upgrade() {
			Some(state) => state.borrow().listeners.contains_key(&id),
			None => false,
		}
	}

	fn dispose(&mut self) {
		let Some(id) = self.id.take() else {
			return;
		};
		if let Some(state) = self.store.upgrade() {
			state.borrow_mut().listeners.remove(&id);
		}
	}
}

impl Drop for SessionSubscription {
	fn drop(&mut self) {
		self.dispose();
	}
}
