// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`welcome`] - Entry screen leading to the login form
//! - [`login`] - Email/password form with "Remember Me"
//! - [`signup`] - Account form with password strength feedback
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Toast notifier and the per-screen notification owner
//! - [`components`] - Reusable UI components (form fields, strength meter)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod login;
pub mod notifications;
pub mod signup;
pub mod styles;
pub mod theming;
pub mod welcome;
