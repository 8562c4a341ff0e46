use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

/// Hashes a secret with a fresh random salt. Used for passwords and for the
/// stored copies of issued tokens, so the database never holds a credential
/// in a recoverable form.
pub fn hash_secret(plain: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2.hash_password(plain.as_bytes(), &salt)?.to_string();
    Ok(hash)
}

pub fn verify_secret(plain: &str, hashed: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hashed)?;
    let ok = Argon2::default()
        .verify_password(plain.as_bytes(), &parsed_hash)
        .is_ok();
    Ok(ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = hash_secret("correct horse battery staple").unwrap();
        assert!(verify_secret("correct horse battery staple", &hash).unwrap());
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let hash = hash_secret("p1").unwrap();
        assert!(!verify_secret("p2", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_secret("same input").unwrap();
        let b = hash_secret("same input").unwrap();
        assert_ne!(a, b);
        assert!(verify_secret("same input", &a).unwrap());
        assert!(verify_secret("same input", &b).unwrap());
    }

    #[test]
    fn garbage_stored_hash_is_an_error() {
        assert!(verify_secret("p1", "not-a-phc-string").is_err());
    }
}
