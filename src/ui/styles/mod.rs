// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the onboarding screens.

pub mod button;
pub mod container;
