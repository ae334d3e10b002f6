// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;

#[component]
pub fn LoginView<G: Html>(ctx: Scope) -> View<G> {
	log::debug!("Activating login page");

	view! {
		ctx,
		div(class="login-container") {
			div(class="login-card") {
				div(class="login-header") {
					h1(class="login-title") { "ToGather" }
					p(class="login-subtitle") { "Welcome back" }
				}
				div(class="placeholder-content") {
					p { "Login page coming soon..." }
				}
				div(class="login-footer") {
					p(class="footer-text") {
						"Don't have an account? "
						a(href="/register", class="footer-link") { "Sign up" }
					}
				}
			}
		}
	}
}
