//! Input validation for student and group payloads

use crate::contract::{NewGroup, NewStudent, Page, RosterError};

/// Maximum length of names and emails, in characters
pub const MAX_TEXT_LEN: usize = 255;

/// Validate and normalize a student payload.
///
/// Returns the payload with name and email trimmed.
pub fn validate_new_student(student: &NewStudent) -> Result<NewStudent, RosterError> {
    let name = validate_text("name", &student.name)?;
    let email = validate_email(&student.email)?;
    Ok(NewStudent { name, email })
}

/// Validate and normalize a group payload
pub fn validate_new_group(group: &NewGroup) -> Result<NewGroup, RosterError> {
    let name = validate_text("name", &group.name)?;
    Ok(NewGroup { name })
}

/// Validate an email address.
///
/// Accepts exactly one '@' with a non-empty local part and domain part, and
/// no whitespace anywhere.
pub fn validate_email(email: &str) -> Result<String, RosterError> {
    let email = validate_text("email", email)?;

    if email.chars().any(char::is_whitespace) {
        return Err(RosterError::validation(format!(
            "email '{}' must not contain whitespace",
            email
        )));
    }

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(email)
        }
        _ => Err(RosterError::validation(format!(
            "email '{}' is not a valid address",
            email
        ))),
    }
}

/// Largest `skip` the database accepts as an OFFSET
pub const MAX_SKIP: u64 = i64::MAX as u64;

/// Validate a pagination window against the configured maximum page size
pub fn validate_page(page: Page, max_page_size: u64) -> Result<Page, RosterError> {
    if page.skip > MAX_SKIP {
        return Err(RosterError::validation(format!(
            "skip must not exceed {}",
            MAX_SKIP
        )));
    }
    if page.limit == 0 || page.limit > max_page_size {
        return Err(RosterError::validation(format!(
            "limit must be between 1 and {}",
            max_page_size
        )));
    }
    Ok(page)
}

fn validate_text(field: &str, value: &str) -> Result<String, RosterError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RosterError::validation(format!("{} cannot be empty", field)));
    }
    if trimmed.chars().count() > MAX_TEXT_LEN {
        return Err(RosterError::validation(format!(
            "{} cannot be longer than {} characters",
            field, MAX_TEXT_LEN
        )));
    }
    Ok(trimmed.to_string())
}
