//! Field rules shared by every form that builds or edits an entity.
//!
//! The DTOs in `crate::dtos` wire these in through `#[validate(custom = ...)]`,
//! so a rule such as "amounts are whole positive numbers" exists once.

use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use validator::{Validate, ValidationError};

use crate::service::error::ServiceError;

pub const MIN_GIG_TITLE_LEN: usize = 10;
pub const MIN_GIG_DESCRIPTION_LEN: usize = 20;
pub const MAX_BIO_LEN: u64 = 500;
pub const MAX_SKILLS: usize = 10;

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::from(message));
    error
}

/// Runs the derive-generated rules and converts the result into the
/// service error every caller understands.
pub fn validate_dto<T: Validate>(dto: &T) -> Result<(), ServiceError> {
    dto.validate().map_err(ServiceError::from)
}

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("blank", "This field is required"));
    }
    Ok(())
}

/// Parses a form amount: digits only (surrounding whitespace tolerated).
pub fn parse_amount(value: &str) -> Option<u64> {
    let value = value.trim();
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    value.parse::<u64>().ok()
}

pub fn positive_amount(value: &str) -> Result<(), ValidationError> {
    match parse_amount(value) {
        None => Err(error("numeric", "Please enter a whole number")),
        Some(0) => Err(error("positive", "Amount must be greater than zero")),
        Some(_) => Ok(()),
    }
}

/// Counts what is left after trimming, since that is what gets stored.
fn min_trimmed_chars(value: &str, min: usize, message: &'static str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(error("blank", "This field is required"));
    }
    if value.chars().count() < min {
        return Err(error("length", message));
    }
    Ok(())
}

pub fn gig_title(value: &str) -> Result<(), ValidationError> {
    min_trimmed_chars(value, MIN_GIG_TITLE_LEN, "Title must be at least 10 characters")
}

pub fn gig_description(value: &str) -> Result<(), ValidationError> {
    min_trimmed_chars(
        value,
        MIN_GIG_DESCRIPTION_LEN,
        "Description must be at least 20 characters",
    )
}

fn phone_regex() -> Option<&'static Regex> {
    static PHONE: OnceLock<Option<Regex>> = OnceLock::new();
    PHONE
        .get_or_init(|| Regex::new(r"^[\d\s\+\-\(\)]+$").ok())
        .as_ref()
}

/// Blank phone numbers are allowed and mean "no phone".
pub fn phone_number(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    let phone_regex = phone_regex().ok_or_else(|| ValidationError::new("Invalid phone regex"))?;

    if !phone_regex.is_match(value.trim()) {
        return Err(error("invalid_phone", "Please enter a valid phone number"));
    }
    Ok(())
}

pub fn skill_list(skills: &[String]) -> Result<(), ValidationError> {
    if skills.is_empty() {
        return Err(error("no_skills", "Please add at least one skill"));
    }
    if skills.len() > MAX_SKILLS {
        return Err(error("too_many_skills", "Maximum 10 skills allowed"));
    }
    let mut seen = HashSet::new();
    for skill in skills {
        let skill = skill.trim();
        if skill.is_empty() {
            return Err(error("blank_skill", "Skills cannot be blank"));
        }
        if !seen.insert(skill.to_lowercase()) {
            return Err(error("duplicate_skill", "This skill is already added"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_are_digits_only() {
        assert_eq!(parse_amount(" 4500 "), Some(4500));
        assert_eq!(parse_amount("45.00"), None);
        assert_eq!(parse_amount("-10"), None);
        assert_eq!(parse_amount("4,500"), None);
        assert!(positive_amount("0").is_err());
        assert!(positive_amount("1").is_ok());
    }

    #[test]
    fn phone_accepts_common_punctuation() {
        assert!(phone_number("+355 (69) 123-4567").is_ok());
        assert!(phone_number("").is_ok());
        let err = phone_number("call me").unwrap_err();
        assert_eq!(err.code, "invalid_phone");
    }

    #[test]
    fn skills_must_be_unique_and_bounded() {
        let skills = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert!(skill_list(&skills(&["Plumbing", "Electrical Work"])).is_ok());
        assert!(skill_list(&[]).is_err());
        assert!(skill_list(&skills(&["Plumbing", "plumbing"])).is_err());
        let eleven: Vec<String> = (0..11).map(|i| format!("Skill {}", i)).collect();
        assert_eq!(skill_list(&eleven).unwrap_err().code, "too_many_skills");
    }

    #[test]
    fn blank_is_not_enough() {
        assert!(not_blank("   ").is_err());
        assert!(not_blank("x").is_ok());
    }

    #[test]
    fn gig_text_length_ignores_padding() {
        assert_eq!(gig_title("Fix pipe     ").unwrap_err().code, "length");
        assert_eq!(gig_title("   ").unwrap_err().code, "blank");
        assert!(gig_title("  Fix leaking pipe ").is_ok());
        assert!(gig_description(&format!("{:<40}", "Leaking sink")).is_err());
        assert!(gig_description("Leaking sink under the stairs").is_ok());
    }
}
