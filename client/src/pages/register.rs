// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::backend::firebase::FirebaseBackend;
use crate::backend::AuthBackend;
use crate::components::form_input::{FormInput, PasswordInput};
use crate::register_form::RegistrationController;
use crate::routes::HistoryNavigator;
use std::rc::Rc;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use togather_shared::registration::FormField;
use web_sys::Event as WebEvent;

fn field_error_signal<'a>(
	ctx: Scope<'a>,
	controller: &'a Signal<RegistrationController>,
	field: FormField,
) -> &'a ReadSignal<Option<String>> {
	create_memo(ctx, move || controller.get().errors().get(field).map(String::from))
}

#[component]
pub fn RegistrationView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating registration page");

	let controller = create_signal(ctx, RegistrationController::new());
	let full_name_signal = create_signal(ctx, String::new());
	let email_signal = create_signal(ctx, String::new());
	let password_signal = create_signal(ctx, String::new());
	let confirm_password_signal = create_signal(ctx, String::new());

	for (field, value_signal) in [
		(FormField::FullName, full_name_signal),
		(FormField::Email, email_signal),
		(FormField::Password, password_signal),
		(FormField::ConfirmPassword, confirm_password_signal),
	] {
		create_effect(ctx, move || {
			let value = (*value_signal.get()).clone();
			controller.modify().edit_field(field, value);
		});
	}

	let full_name_error = field_error_signal(ctx, controller, FormField::FullName);
	let email_error = field_error_signal(ctx, controller, FormField::Email);
	let password_error = field_error_signal(ctx, controller, FormField::Password);
	let confirm_password_error = field_error_signal(ctx, controller, FormField::ConfirmPassword);
	let submit_error = create_memo(ctx, || controller.get().submit_error().map(String::from));
	let disabled = create_memo(ctx, || controller.get().inputs_disabled());

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		let Some(request) = controller.modify().begin_submit() else {
			return;
		};

		spawn_local_scoped(ctx, async move {
			let backend: &Rc<FirebaseBackend> = use_context(ctx);
			let result = backend
				.register(&request.email, &request.password, &request.full_name)
				.await;
			controller.modify().finish_submit(result, &HistoryNavigator);
		});
	};

	view! {
		ctx,
		div(class="register-container") {
			div(class="register-card") {
				div(class="register-header") {
					h1(class="register-title") { "ToGather" }
					p(class="register-subtitle") { "Create your account" }
				}
				form(class="register-form", on:submit=form_submission_handler) {
					FormInput(
						field=FormField::FullName,
						label="Full Name",
						input_type="text",
						placeholder="John Doe",
						value=full_name_signal,
						error=full_name_error,
						disabled=disabled
					)
					FormInput(
						field=FormField::Email,
						label="Email Address",
						input_type="email",
						placeholder="you@example.com",
						value=email_signal,
						error=email_error,
						disabled=disabled
					)
					PasswordInput(
						field=FormField::Password,
						label="Password",
						input_type="password",
						placeholder="At least 8 characters",
						value=password_signal,
						error=password_error,
						disabled=disabled
					)
					PasswordInput(
						field=FormField::ConfirmPassword,
						label="Confirm Password",
						input_type="password",
						placeholder="Re-enter your password",
						value=confirm_password_signal,
						error=confirm_password_error,
						disabled=disabled
					)
					(if let Some(message) = (*submit_error.get()).clone() {
						view! {
							ctx,
							div(class="error-banner") { (message) }
						}
					} else {
						view! { ctx, }
					})
					button(type="submit", class="submit-button", disabled=*disabled.get()) {
						(if *disabled.get() {
							view! {
								ctx,
								span(class="spinner") {}
								"Creating account..."
							}
						} else {
							view! { ctx, "Create Account" }
						})
					}
				}
				div(class="register-footer") {
					p(class="footer-text") {
						"Already have an account? "
						a(href="/login", class="footer-link") { "Sign in" }
					}
				}
			}
		}
	}
}
