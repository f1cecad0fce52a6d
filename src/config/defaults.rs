// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default time a toast stays up before sliding out (in milliseconds).
pub const DEFAULT_TOAST_VISIBLE_MS: u64 = 3000;

/// Minimum toast visible duration (in milliseconds).
pub const MIN_TOAST_VISIBLE_MS: u64 = 1;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Interval between animation ticks while a toast is mounted (~60 fps).
pub const TICK_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS provide a supported one.
pub const DEFAULT_LOCALE: &str = "en-US";
