//! # Title Validation
//!
//! This module validates pull request titles against a [`TitleValidationConfig`].
//!
//! Rules are evaluated in a fixed order and the first failing rule decides the
//! verdict:
//!
//! 1. minimum length
//! 2. maximum length
//! 3. allowed prefixes
//! 4. disallowed prefixes
//! 5. allowed suffixes
//! 6. disallowed suffixes
//! 7. pattern
//!
//! Prefixes and suffixes are compared literally. Only the pattern rule is a
//! regular expression, and it uses search semantics: a match anywhere in the
//! title is enough.

use std::borrow::Cow;

use regex::Regex;

use crate::config::TitleValidationConfig;
use crate::errors::TitleWardenError;
use crate::validation_result::{TitleRule, ValidationResult};

#[cfg(test)]
#[path = "title_tests.rs"]
mod tests;

/// Validates a PR title against the configured rules.
///
/// Length is counted in characters. When a case-sensitivity flag is off, both
/// the title and the list entry are lowercased before comparing.
///
/// # Arguments
///
/// * `title` - The pull request title, possibly empty
/// * `config` - The rules to apply
///
/// # Returns
///
/// `Ok(ValidationResult::Accepted)` if all rules pass, or
/// `Ok(ValidationResult::Rejected { .. })` naming the first failing rule.
///
/// # Errors
///
/// Returns `TitleWardenError::RegexError` if `config.pattern` is not a valid
/// regular expression. The pattern is compiled before any rule runs, so a bad
/// pattern is reported regardless of the title.
///
/// # Examples
///
/// ```
/// use title_warden_core::checks::title::validate_title;
/// use title_warden_core::config::TitleValidationConfig;
/// use title_warden_core::validation_result::TitleRule;
///
/// let config = TitleValidationConfig {
///     allowed_prefixes: vec!["fix:".to_string()],
///     ..Default::default()
/// };
///
/// assert!(validate_title("Fix: bug", &config).unwrap().is_accepted());
///
/// let result = validate_title("Add feature", &config).unwrap();
/// assert_eq!(result.rule(), Some(TitleRule::AllowedPrefix));
/// ```
pub fn validate_title(
    title: &str,
    config: &TitleValidationConfig,
) -> Result<ValidationResult, TitleWardenError> {
    let pattern = if config.pattern.is_empty() {
        None
    } else {
        Some(Regex::new(&config.pattern)?)
    };

    let length = title.chars().count();
    if length < config.min_length {
        return Ok(ValidationResult::rejected(
            TitleRule::MinLength,
            format!(
                "Pull Request title \"{}\" is smaller than min length specified - {}",
                title, config.min_length
            ),
        ));
    }

    if config.max_length > 0 && length > config.max_length {
        return Ok(ValidationResult::rejected(
            TitleRule::MaxLength,
            format!(
                "Pull Request title \"{}\" is greater than max length specified - {}",
                title, config.max_length
            ),
        ));
    }

    let prefix_case = config.prefix_case_sensitive;
    if !config.allowed_prefixes.is_empty()
        && !config
            .allowed_prefixes
            .iter()
            .any(|prefix| has_prefix(title, prefix, prefix_case))
    {
        return Ok(ValidationResult::rejected(
            TitleRule::AllowedPrefix,
            format!(
                "Pull Request title \"{}\" did not match any of the prefixes - {}",
                title,
                format_list(&config.allowed_prefixes)
            ),
        ));
    }

    if config
        .disallowed_prefixes
        .iter()
        .any(|prefix| has_prefix(title, prefix, prefix_case))
    {
        return Ok(ValidationResult::rejected(
            TitleRule::DisallowedPrefix,
            format!(
                "Pull Request title \"{}\" matched with a disallowed prefix - {}",
                title,
                format_list(&config.disallowed_prefixes)
            ),
        ));
    }

    let suffix_case = config.suffix_case_sensitive;
    if !config.allowed_suffixes.is_empty()
        && !config
            .allowed_suffixes
            .iter()
            .any(|suffix| has_suffix(title, suffix, suffix_case))
    {
        return Ok(ValidationResult::rejected(
            TitleRule::AllowedSuffix,
            format!(
                "Pull Request title \"{}\" did not match any of the suffixes - {}",
                title,
                format_list(&config.allowed_suffixes)
            ),
        ));
    }

    if config
        .disallowed_suffixes
        .iter()
        .any(|suffix| has_suffix(title, suffix, suffix_case))
    {
        return Ok(ValidationResult::rejected(
            TitleRule::DisallowedSuffix,
            format!(
                "Pull Request title \"{}\" matched with a disallowed suffix - {}",
                title,
                format_list(&config.disallowed_suffixes)
            ),
        ));
    }

    if let Some(regex) = pattern {
        if !regex.is_match(title) {
            return Ok(ValidationResult::rejected(
                TitleRule::Pattern,
                format!(
                    "Pull Request title \"{}\" failed to pass match regex - {}",
                    title, config.pattern
                ),
            ));
        }
    }

    Ok(ValidationResult::accepted())
}

fn fold_case(value: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(value.to_lowercase())
    }
}

fn format_list(entries: &[String]) -> String {
    entries.join(", ")
}

fn has_prefix(title: &str, prefix: &str, case_sensitive: bool) -> bool {
    let prefix = fold_case(prefix, case_sensitive);
    fold_case(title, case_sensitive).starts_with(&*prefix)
}

fn has_suffix(title: &str, suffix: &str, case_sensitive: bool) -> bool {
    let suffix = fold_case(suffix, case_sensitive);
    fold_case(title, case_sensitive).ends_with(&*suffix)
}
