//! Password hashing with bcrypt.

use crate::error::GameResult;

/// bcrypt cost used unless configured otherwise.
pub const DEFAULT_COST: u32 = 10;

/// Lowest cost bcrypt accepts.
pub const MIN_COST: u32 = 4;

/// Highest cost bcrypt accepts.
pub const MAX_COST: u32 = 31;

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str, cost: u32) -> GameResult<String> {
    Ok(bcrypt::hash(password, cost)?)
}

/// Check a password against a stored hash. Malformed hashes never match.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "stored password hash is unreadable");
        false
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("hunter22", MIN_COST).unwrap();
        assert!(hash.starts_with("$2b$04$"));
        assert!(verify_password("hunter22", &hash));
        assert!(!verify_password("hunter23", &hash));
    }

    #[test]
    fn salts_differ_between_hashes() {
        let a = hash_password("same", MIN_COST).unwrap();
        let b = hash_password("same", MIN_COST).unwrap();
        assert_ne!(a, b);
        assert!(verify_password("same", &a));
        assert!(verify_password("same", &b));
    }

    #[test]
    fn cost_is_encoded_in_hash() {
        let hash = hash_password("pw", 5).unwrap();
        assert!(hash.starts_with("$2b$05$"));
    }

    #[test]
    fn out_of_range_cost_is_an_error() {
        assert!(hash_password("pw", 3).is_err());
        assert!(hash_password("pw", 32).is_err());
    }

    #[test]
    fn malformed_hashes_never_match() {
        assert!(!verify_password("pw", ""));
        assert!(!verify_password("pw", "sha256$1$salt$abcd"));
        assert!(!verify_password("pw", "$2b$04$tooshort"));
    }
}
