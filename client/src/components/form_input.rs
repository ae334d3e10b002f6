// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;
use togather_shared::registration::FormField;

#[derive(Prop)]
pub struct FormInputProps<'a> {
	field: FormField,
	label: &'static str,
	input_type: &'static str,
	placeholder: &'static str,
	value: &'a Signal<String>,
	error: &'a ReadSignal<Option<String>>,
	disabled: &'a ReadSignal<bool>,
}

#[component]
pub fn FormInput<'a, G: Html>(ctx: Scope<'a>, props: FormInputProps<'a>) -> View<G> {
	let field_name = props.field.name();
	let error = props.error;
	let input_class = create_memo(ctx, move || {
		if error.get().is_some() {
			"form-input input-error"
		} else {
			"form-input"
		}
	});

	view! {
		ctx,
		div(class="form-group") {
			label(for=field_name, class="form-label") { (props.label) }
			input(
				type=props.input_type,
				id=field_name,
				name=field_name,
				class=*input_class.get(),
				placeholder=props.placeholder,
				disabled=*props.disabled.get(),
				bind:value=props.value
			)
			FieldError(error=error)
		}
	}
}

/// A password input with a button to reveal what's been typed
#[component]
pub fn PasswordInput<'a, G: Html>(ctx: Scope<'a>, props: FormInputProps<'a>) -> View<G> {
	let field_name = props.field.name();
	let error = props.error;
	let hidden_type = props.input_type;
	let show_signal = create_signal(ctx, false);
	let input_type = create_memo(ctx, move || if *show_signal.get() { "text" } else { hidden_type });
	let input_class = create_memo(ctx, move || {
		if error.get().is_some() {
			"form-input input-error"
		} else {
			"form-input"
		}
	});

	view! {
		ctx,
		div(class="form-group") {
			label(for=field_name, class="form-label") { (props.label) }
			div(class="password-input-wrapper") {
				input(
					type=*input_type.get(),
					id=field_name,
					name=field_name,
					class=*input_class.get(),
					placeholder=props.placeholder,
					disabled=*props.disabled.get(),
					bind:value=props.value
				)
				button(
					type="button",
					class="password-toggle",
					title="Toggle password visibility",
					on:click=move |_| show_signal.set(!*show_signal.get())
				) {
					(if *show_signal.get() { "Hide" } else { "Show" })
				}
			}
			FieldError(error=error)
		}
	}
}

#[derive(Prop)]
pub struct FieldErrorProps<'a> {
	error: &'a ReadSignal<Option<String>>,
}

#[component]
fn FieldError<'a, G: Html>(ctx: Scope<'a>, props: FieldErrorProps<'a>) -> View<G> {
	view! {
		ctx,
		(if let Some(message) = (*props.error.get()).clone() {
			view! {
				ctx,
				span(class="error-message") { (message) }
			}
		} else {
			view! { ctx, }
		})
	}
}
