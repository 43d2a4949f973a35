use crate::error::{AppError, AppResult};
use regex::Regex;

/// Validate email shape (local@domain.tld); full RFC parsing is not the goal.
pub fn validate_email(email: &str) -> AppResult<()> {
    let email_regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();

    if email.len() > 250 || !email_regex.is_match(email) {
        return Err(AppError::ValidationError(
            "Invalid email address".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("a.b+tag@sub.example.co").is_ok());
        assert!(validate_email("alice").is_err());
        assert!(validate_email("alice@nodot").is_err());
        assert!(validate_email("ali ce@example.com").is_err());
    }
}
