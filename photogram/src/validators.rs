use email_address::EmailAddress;

/// Returns `true` if the provided string is a syntactically valid email address.
pub fn is_valid_email(value: &str) -> bool {
    EmailAddress::is_valid(value)
}

/// Returns `true` if the string holds something other than whitespace.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Returns `true` if the string is at most `max` characters long.
pub fn within_length(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}
