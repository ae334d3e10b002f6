// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![cfg(test)]
use crate::routes::{AppRoute, Navigator};
use std::cell::RefCell;

/// Keeps every navigation request instead of touching browser history
#[derive(Default)]
pub struct RecordingNavigator {
	visited: RefCell<Vec<AppRoute>>,
}

impl RecordingNavigator {
	pub fn visited(&self) -> Vec<AppRoute> {
		self.visited.borrow().clone()
	}

	pub fn last(&self) -> Option<AppRoute> {
		self.visited.borrow().last().copied()
	}
}

impl Navigator for RecordingNavigator {
	fn navigate(&self, route: AppRoute) {
		self.visited.borrow_mut().push(route);
	}
}
