// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::backend::firebase::FirebaseBackend;
use crate::routes::HistoryNavigator;
use crate::session_gate::{log_out, GateState, SessionGate};
use std::rc::Rc;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn DashboardView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating dashboard page");

	let backend: &Rc<FirebaseBackend> = use_context(ctx);
	let gate_state = create_rc_signal(GateState::Loading);
	let gate = SessionGate::open(Rc::as_ref(backend), HistoryNavigator, {
		let gate_state = gate_state.clone();
		move |state: &GateState| gate_state.set(state.clone())
	});
	on_cleanup(ctx, move || gate.close());
	let gate_state = create_ref(ctx, gate_state);

	let logout_handler = move |_event: WebEvent| {
		spawn_local_scoped(ctx, async move {
			let backend: &Rc<FirebaseBackend> = use_context(ctx);
			log_out(Rc::as_ref(backend), &HistoryNavigator).await;
		});
	};

	view! {
		ctx,
		div(class="dashboard-container") {
			(match (*gate_state.get()).clone() {
				GateState::SignedIn { email } => view! {
					ctx,
					div(class="dashboard-content") {
						header(class="dashboard-header") {
							h1(class="dashboard-title") { "Welcome to ToGather" }
							button(class="logout-button", on:click=logout_handler) { "Logout" }
						}
						div(class="welcome-card") {
							h2(class="welcome-heading") { "Registration Successful!" }
							p(class="welcome-text") {
								"Hello, "
								strong { (email) }
							}
							p(class="welcome-subtext") {
								"Your ToGather account has been created successfully. Start managing your wedding invitations and guest lists."
							}
						}
						div(class="dashboard-grid") {
							div(class="dashboard-card") {
								h3(class="card-title") { "Invitations" }
								p(class="card-description") { "Create and send beautiful wedding invitations" }
							}
							div(class="dashboard-card") {
								h3(class="card-title") { "Guest List" }
								p(class="card-description") { "Manage your wedding guests and RSVPs" }
							}
							div(class="dashboard-card") {
								h3(class="card-title") { "Analytics" }
								p(class="card-description") { "Track invitation views and responses" }
							}
						}
					}
				},
				// Signed-out users are already on their way to the login page
				GateState::Loading | GateState::SignedOut => view! {
					ctx,
					div(class="loading-spinner") {}
				},
			})
		}
	}
}
