//! Credential plausibility checks.
//!
//! Both checks are deliberately weak: the email rule is containment only, and
//! the password rule is a bare length floor. Downstream behaviour depends on
//! these exact rules, so do not strengthen them.

/// True iff `value` contains at least one `@` and at least one `.`.
///
/// No positional, structural, or TLD validation.
pub fn is_valid_email(value: &str) -> bool {
    value.contains('@') && value.contains('.')
}

/// True iff `value` is at least 6 characters long.
///
/// Counted in characters, not bytes; no charset requirement.
pub fn is_valid_password(value: &str) -> bool {
    value.chars().count() >= 6
}
