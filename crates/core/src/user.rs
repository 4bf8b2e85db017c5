//! Username constants and validation.

/// Maximum length of a username in characters.
pub const MAX_USERNAME_LENGTH: usize = 150;

/// Validate a username: non-empty, within the length limit, and made of
/// letters, digits, and `@`, `.`, `+`, `-`, `_` only.
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("Username cannot be empty".to_string());
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(format!(
            "Username exceeds maximum length of {MAX_USERNAME_LENGTH} characters"
        ));
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
    {
        return Err(format!(
            "Username '{username}' contains invalid characters. \
             Letters, digits, and @/./+/-/_ only"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_usernames_accepted() {
        assert!(validate_username("tester").is_ok());
        assert!(validate_username("user.name+tag@host").is_ok());
        assert!(validate_username("a_b-c").is_ok());
    }

    #[test]
    fn empty_username_rejected() {
        let result = validate_username("");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("empty"));
    }

    #[test]
    fn username_with_spaces_rejected() {
        let result = validate_username("not a name");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("invalid characters"));
    }

    #[test]
    fn overlong_username_rejected() {
        let username = "a".repeat(MAX_USERNAME_LENGTH + 1);
        assert!(validate_username(&username).is_err());
    }
}
