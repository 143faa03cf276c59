//! Registration input checks.

use crate::error::{GameError, GameResult};

/// Shortest accepted username, in characters.
pub const MIN_USERNAME_LEN: usize = 3;

/// Shortest accepted password, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A sign-up request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Login name.
    pub username: String,
    /// Contact address; unique across accounts.
    pub email: String,
    /// Plain-text password. Hashed before it reaches the store.
    pub password: String,
}

impl Registration {
    /// Build a request, trimming the username and email.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into().trim().to_string(),
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }

    /// Check every field, reporting the first problem found.
    pub fn validate(&self) -> GameResult<()> {
        if self.username.is_empty() || self.email.is_empty() || self.password.is_empty() {
            return Err(invalid("username, email and password are required"));
        }
        if self.username.chars().count() < MIN_USERNAME_LEN {
            return Err(invalid(format!(
                "username must be at least {MIN_USERNAME_LEN} characters"
            )));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(invalid(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if !is_valid_email(&self.email) {
            return Err(invalid("email address is not valid"));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> GameError {
    GameError::Validation(msg.into())
}

/// `local@domain.tld`: one `@`, no whitespace, and some dot in the domain
/// with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(r: &Registration) -> String {
        r.validate().unwrap_err().to_string()
    }

    #[test]
    fn accepts_well_formed_request() {
        let r = Registration::new("  ayu ", " ayu@example.com", "secret1");
        assert_eq!(r.username, "ayu");
        assert_eq!(r.email, "ayu@example.com");
        assert!(r.validate().is_ok());
    }

    #[test]
    fn missing_fields() {
        let r = Registration::new("", "ayu@example.com", "secret1");
        assert!(reason(&r).contains("required"));
        let r = Registration::new("ayu", "ayu@example.com", "");
        assert!(reason(&r).contains("required"));
    }

    #[test]
    fn short_username_and_password() {
        assert!(reason(&Registration::new("ay", "a@b.co", "secret1")).contains("username"));
        assert!(reason(&Registration::new("ayu", "a@b.co", "12345")).contains("password"));
        assert!(Registration::new("ayu", "a@b.co", "123456").validate().is_ok());
    }

    #[test]
    fn email_shapes() {
        for good in ["a@b.co", "first.last@mail.example.org", "x@y.z", "a@b.c."] {
            assert!(is_valid_email(good), "{good}");
        }
        for bad in [
            "plain",
            "@b.co",
            "a@",
            "a@bco",
            "a@.co",
            "a@b.",
            "a b@c.de",
            "a@b@c.de",
        ] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn bad_email_is_validation_error() {
        let err = Registration::new("ayu", "nope", "secret1").validate().unwrap_err();
        assert!(matches!(err, GameError::Validation(_)));
    }
}
