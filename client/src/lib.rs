// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Browser client for creating ToGather accounts.
//!
//! The page logic ([`register_form`], [`session_gate`]) is written against the [`backend::AuthBackend`] and
//! [`routes::Navigator`] traits so it can run outside a browser.

pub mod app;
pub mod backend;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod register_form;
pub mod routes;
pub mod session_gate;
#[cfg(test)]
mod test_support;
