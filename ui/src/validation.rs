//! Client-side form checks. The server re-validates everything; these only
//! exist to catch typos before a round-trip.

/// local@domain.tld with at least one dot after the @.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && tld.len() >= 2 && !email.contains(char::is_whitespace)
}

/// At least 8 characters with a letter and a digit.
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < 8 {
        return Err("Password must be at least 8 characters");
    }
    if !password.chars().any(|c| c.is_alphabetic()) {
        return Err("Password must contain a letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain a number");
    }
    Ok(())
}

/// 3-30 characters, lowercase alphanumeric plus `-` and `_`. Usernames are
/// URL path segments, so the charset is strict.
pub fn is_valid_username(username: &str) -> bool {
    let len = username.chars().count();
    (3..=30).contains(&len)
        && username
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

/// `Some(error)` when a required field is blank.
pub fn required(value: &str, field: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{field} is required"))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("  ada+folio@sub.example.io  "));
        assert!(!is_valid_email("ada"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@exa mple.com"));
    }

    #[test]
    fn password_rules() {
        assert!(validate_password("abcdefg1").is_ok());
        assert!(validate_password("short1").is_err());
        assert!(validate_password("12345678").is_err());
        assert!(validate_password("abcdefgh").is_err());
    }

    #[test]
    fn username_charset() {
        assert!(is_valid_username("ada_lovelace"));
        assert!(is_valid_username("dev-42"));
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username("Ada"));
        assert!(!is_valid_username("name with spaces"));
    }

    #[test]
    fn required_fields() {
        assert_eq!(required("  ", "Title"), Some("Title is required".into()));
        assert_eq!(required("x", "Title"), None);
    }
}
