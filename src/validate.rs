use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("email must be valid")]
    Invalid,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("password must be longer than 0 characters")]
    Empty,
    #[error("password must be at least 8 characters")]
    TooShort,
    #[error("password must be less than 50 characters")]
    TooLong,
}

/// Checks `local@domain.tld` shape: local part allows letters, digits and
/// `._%+-`; the top-level segment is two or more letters.
pub fn validate_email(email: &str) -> Result<(), EmailError> {
    lazy_static! {
        static ref EMAIL_RE: Regex =
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();
    }
    if !EMAIL_RE.is_match(email) {
        return Err(EmailError::Invalid);
    }
    Ok(())
}

/// Length bounds are measured in bytes, matching how the store treats the
/// column.
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    if password.is_empty() {
        return Err(PasswordError::Empty);
    }
    if password.len() < 8 {
        return Err(PasswordError::TooShort);
    }
    if password.len() > 50 {
        return Err(PasswordError::TooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_address() {
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("user.name+tag@sub.example.org").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in [
            "",
            "plain",
            "@example.com",
            "user@",
            "user@example",
            "user@example.c",
            "user name@example.com",
            "user@exa mple.com",
        ] {
            assert_eq!(validate_email(bad), Err(EmailError::Invalid), "{bad:?}");
        }
    }

    #[test]
    fn password_empty_is_its_own_error() {
        assert_eq!(validate_password(""), Err(PasswordError::Empty));
    }

    #[test]
    fn password_length_bounds() {
        assert_eq!(validate_password(&"x".repeat(7)), Err(PasswordError::TooShort));
        assert_eq!(validate_password(&"x".repeat(51)), Err(PasswordError::TooLong));
        assert!(validate_password(&"x".repeat(8)).is_ok());
        assert!(validate_password(&"x".repeat(50)).is_ok());
    }

    #[test]
    fn password_length_counts_bytes() {
        // 13 four-byte chars: 52 bytes, over the limit even though only 13 chars
        assert_eq!(
            validate_password(&"🦀".repeat(13)),
            Err(PasswordError::TooLong)
        );
    }
}
