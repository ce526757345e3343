//! # Validation Result Types
//!
//! This module provides the verdict produced by the title validator.
//!
//! A [`ValidationResult`] is either `Accepted` or `Rejected`. A rejection names
//! the [`TitleRule`] that failed and carries a human-readable message that the
//! host shows to the user.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "validation_result_tests.rs"]
mod tests;

/// Outcome of validating a pull request title.
///
/// # Examples
///
/// ```
/// use title_warden_core::validation_result::{TitleRule, ValidationResult};
///
/// let accepted = ValidationResult::accepted();
/// assert!(accepted.is_accepted());
/// assert!(accepted.message().is_none());
///
/// let rejected = ValidationResult::rejected(TitleRule::MinLength, "too short");
/// assert!(!rejected.is_accepted());
/// assert_eq!(rejected.rule(), Some(TitleRule::MinLength));
/// assert_eq!(rejected.message(), Some("too short"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationResult {
    /// The title satisfied every configured rule
    Accepted,

    /// The title violated a rule
    Rejected {
        /// The first rule that failed
        rule: TitleRule,

        /// Description of the failure, including the title and the rule settings
        message: String,
    },
}

/// The rules a title is checked against, in evaluation order.
///
/// # Examples
///
/// ```
/// use title_warden_core::validation_result::TitleRule;
///
/// assert_eq!(TitleRule::DisallowedPrefix.to_string(), "Disallowed Prefix");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleRule {
    MinLength,
    MaxLength,
    AllowedPrefix,
    DisallowedPrefix,
    AllowedSuffix,
    DisallowedSuffix,
    Pattern,
}

impl ValidationResult {
    pub fn accepted() -> Self {
        ValidationResult::Accepted
    }

    pub fn rejected(rule: TitleRule, message: impl Into<String>) -> Self {
        ValidationResult::Rejected {
            rule,
            message: message.into(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted)
    }

    /// The rule that caused a rejection, if any.
    pub fn rule(&self) -> Option<TitleRule> {
        match self {
            ValidationResult::Accepted => None,
            ValidationResult::Rejected { rule, .. } => Some(*rule),
        }
    }

    /// The rejection message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationResult::Accepted => None,
            ValidationResult::Rejected { message, .. } => Some(message),
        }
    }
}

impl std::fmt::Display for TitleRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TitleRule::MinLength => write!(f, "Min Length"),
            TitleRule::MaxLength => write!(f, "Max Length"),
            TitleRule::AllowedPrefix => write!(f, "Allowed Prefix"),
            TitleRule::DisallowedPrefix => write!(f, "Disallowed Prefix"),
            TitleRule::AllowedSuffix => write!(f, "Allowed Suffix"),
            TitleRule::DisallowedSuffix => write!(f, "Disallowed Suffix"),
            TitleRule::Pattern => write!(f, "Pattern"),
        }
    }
}
