// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::routes::{AppRoute, HistoryNavigator, Navigator};
use sycamore::prelude::*;

#[derive(Prop)]
pub struct RedirectProps {
	target: AppRoute,
}

/// Stand-in for locations without a page of their own; sends the user to the target route.
#[component]
pub fn RedirectView<G: Html>(ctx: Scope, props: RedirectProps) -> View<G> {
	log::debug!("Redirecting to {}", props.target.path());
	HistoryNavigator.navigate(props.target);

	view! { ctx, }
}
