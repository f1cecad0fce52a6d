// SPDX-License-Identifier: MPL-2.0
//! Domain layer - form rules with no UI dependencies.
//!
//! # Modules
//!
//! - [`credentials`]: Login/signup validation ([`LoginForm`](credentials::LoginForm),
//!   [`SignupForm`](credentials::SignupForm), [`FormError`](credentials::FormError))
//!   and the password strength score ([`PasswordStrength`](credentials::PasswordStrength))

pub mod credentials;
