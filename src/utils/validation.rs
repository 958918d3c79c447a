//! Input validation utilities

/// Check that an email address has exactly one `@` with text on both sides
pub fn validate_email_shape(email: &str) -> Result<(), &'static str> {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => Ok(()),
        (_, _, Some(_)) => Err("Email must contain exactly one '@'"),
        _ => Err("Invalid email format"),
    }
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Sanitize an optional free-form tag; blank values become `None`
pub fn sanitize_optional(input: Option<&str>) -> Option<String> {
    input.map(sanitize_string).filter(|s| !s.is_empty())
}

/// Truncate to at most `max_chars` characters without splitting a code point
pub fn truncate_chars(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &input[..byte_index],
        None => input,
    }
}
