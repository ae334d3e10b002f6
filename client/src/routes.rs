// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::rc::Rc;
use sycamore_router::Route;

/// Every location the client knows how to show
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AppRoute {
	Root,
	Register,
	Login,
	Dashboard,
	NotFound,
}

impl AppRoute {
	pub fn from_segments(segments: &[&str]) -> Self {
		let segments: Vec<&str> = segments.iter().copied().filter(|segment| !segment.is_empty()).collect();
		match segments.as_slice() {
			[] => Self::Root,
			["register"] => Self::Register,
			["login"] => Self::Login,
			["dashboard"] => Self::Dashboard,
			_ => Self::NotFound,
		}
	}

	pub fn from_path(path: &str) -> Self {
		let segments: Vec<&str> = path.split('/').collect();
		Self::from_segments(&segments)
	}

	pub fn path(&self) -> &'static str {
		match self {
			Self::Root => "/",
			Self::Register => "/register",
			Self::Login => "/login",
			Self::Dashboard => "/dashboard",
			Self::NotFound => "/not_found",
		}
	}

	/// Where a request for this route is sent instead, for routes that have no page of their own
	pub fn redirect_target(&self) -> Option<AppRoute> {
		match self {
			Self::Root | Self::NotFound => Some(Self::Register),
			Self::Register | Self::Login | Self::Dashboard => None,
		}
	}
}

impl Default for AppRoute {
	fn default() -> Self {
		Self::NotFound
	}
}

impl Route for AppRoute {
	fn match_route(&self, segments: &[&str]) -> Self {
		Self::from_segments(segments)
	}
}

/// Moves the user to another page
pub trait Navigator {
	fn navigate(&self, route: AppRoute);
}

impl<N: Navigator + ?Sized> Navigator for Rc<N> {
	fn navigate(&self, route: AppRoute) {
		self.as_ref().navigate(route)
	}
}

/// Navigates through the browser history
#[derive(Clone, Copy, Debug, Default)]
pub struct HistoryNavigator;

impl Navigator for HistoryNavigator {
	fn navigate(&self, route: AppRoute) {
		log::debug!("Navigating to {}", route.path());
		// Navigation can be requested while the router is rendering, so it's deferred to the next tick.
		sycamore::futures::spawn_local(async move {
			sycamore_router::navigate(route.path());
		});
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_paths_match_their_route() {
		assert_eq!(AppRoute::from_path("/"), AppRoute::Root);
		assert_eq!(AppRoute::from_path("/register"), AppRoute::Register);
		assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
		assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::Dashboard);
		assert_eq!(AppRoute::from_path("/dashboard/"), AppRoute::Dashboard);
	}

	#[test]
	fn unknown_paths_fall_through() {
		assert_eq!(AppRoute::from_path("/admin"), AppRoute::NotFound);
		assert_eq!(AppRoute::from_path("/register/extra"), AppRoute::NotFound);
		assert_eq!(AppRoute::default().match_route(&["guests"]), AppRoute::NotFound);
	}

	#[test]
	fn root_and_unknown_paths_redirect_to_registration() {
		assert_eq!(AppRoute::Root.redirect_target(), Some(AppRoute::Register));
		assert_eq!(AppRoute::NotFound.redirect_target(), Some(AppRoute::Register));
		for route in [AppRoute::Register, AppRoute::Login, AppRoute::Dashboard] {
			assert_eq!(route.redirect_target(), None);
			assert_eq!(AppRoute::from_path(route.path()), route);
		}
	}
}
