// SPDX-License-Identifier: MPL-2.0
//! Login and signup form rules.
//!
//! Validation stops at the first failing rule, in this order: required
//! fields, email shape, password confirmation.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// `local@domain.tld` with no whitespace and exactly the separators required.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// One point per matched rule: lowercase, uppercase, digit, symbol, length.
static STRENGTH_RULES: LazyLock<[Regex; 5]> = LazyLock::new(|| {
    ["[a-z]", "[A-Z]", "[0-9]", "[!@#$%^&*]", ".{8,}"]
        .map(|pattern| Regex::new(pattern).expect("valid strength pattern"))
});

/// Why a form submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    /// At least one field was left empty.
    MissingFields,
    /// The email does not look like an address.
    InvalidEmail,
    /// Password and confirmation differ.
    PasswordMismatch,
}

impl FormError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FormError::MissingFields => "notification-fields-required",
            FormError::InvalidEmail => "notification-invalid-email",
            FormError::PasswordMismatch => "notification-passwords-mismatch",
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingFields => write!(f, "All fields are required"),
            FormError::InvalidEmail => write!(f, "Invalid email"),
            FormError::PasswordMismatch => write!(f, "Passwords do not match"),
        }
    }
}

impl std::error::Error for FormError {}

/// Returns whether `email` has the `local@domain.tld` shape.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Values entered on the login screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

/// Values entered on the signup screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if [
            &self.name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ]
        .iter()
        .any(|field| field.is_empty())
        {
            return Err(FormError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }
}

/// Password strength score, from 0 (nothing matched) to [`PasswordStrength::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct PasswordStrength(u8);

impl PasswordStrength {
    /// Number of rules, and number of segments in the meter.
    pub const MAX: u8 = 5;

    /// Scores `password` against the strength rules.
    #[must_use]
    pub fn evaluate(password: &str) -> Self {
        let matched = STRENGTH_RULES
            .iter()
            .filter(|rule| rule.is_match(password))
            .count();
        Self(u8::try_from(matched).unwrap_or(Self::MAX))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether segment `index` (0-based) of the meter is lit.
    #[must_use]
    pub fn lights(self, index: u8) -> bool {
        self.0 > index
    }
}
