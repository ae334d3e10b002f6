// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Types and rules shared by everything that handles ToGather accounts.

pub mod auth_error;
pub mod registration;
pub mod user;
pub mod validation;
