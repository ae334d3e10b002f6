// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::backend::firebase::FirebaseBackend;
use crate::config::BackendConfig;
use crate::pages::dashboard::DashboardView;
use crate::pages::error::error_message_view;
use crate::pages::login::LoginView;
use crate::pages::register::RegistrationView;
use crate::pages::start_redirect::RedirectView;
use crate::routes::AppRoute;
use std::rc::Rc;
use sycamore::prelude::*;
use sycamore_router::{HistoryIntegration, Router};

#[component]
pub fn App<G: Html>(ctx: Scope) -> View<G> {
	view! {
		ctx,
		Router(
			integration=HistoryIntegration::new(),
			view=|ctx, route: &ReadSignal<AppRoute>| {
				view! {
					ctx,
					div(id="app") {
						(match *route.get() {
							AppRoute::Register => view! { ctx, RegistrationView {} },
							AppRoute::Login => view! { ctx, LoginView {} },
							AppRoute::Dashboard => view! { ctx, DashboardView {} },
							other => {
								let target = other.redirect_target().unwrap_or(AppRoute::Register);
								view! { ctx, RedirectView(target=target) }
							}
						})
					}
				}
			}
		)
	}
}

/// Loads the backend configuration and mounts the application into the page.
pub fn start() {
	let config = match BackendConfig::embedded() {
		Ok(config) => config,
		Err(error) => {
			log::error!("Unable to start: {}", error);
			sycamore::render(|ctx| {
				error_message_view(
					ctx,
					String::from("Unable to load: the backend configuration is invalid"),
					Some(error),
				)
			});
			return;
		}
	};

	let backend = Rc::new(FirebaseBackend::new(config));
	sycamore::render(move |ctx| {
		provide_context(ctx, backend);
		view! { ctx, App {} }
	});
}
