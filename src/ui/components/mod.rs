// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across the form screens.
//!
//! # Components
//!
//! - [`password_strength`] - Five-segment meter scoring the password as it
//!   is typed
//! - [`form_field`] - Labeled text input with consistent sizing

pub mod form_field;
pub mod password_strength;
