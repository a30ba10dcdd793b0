// src/utils/hash.rs

use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};

use crate::error::SetupError;

pub fn hash_password(password: &str) -> Result<String, SetupError> {
    let salt = SaltString::generate(&mut OsRng);

    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| SetupError::Internal(e.to_string()))?
        .to_string();

    Ok(password_hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_a_parseable_argon2_hash() {
        let hash = hash_password("password123").unwrap();
        assert!(hash.starts_with("$argon2"));
        // Same input, fresh salt: hashes must differ.
        assert_ne!(hash, hash_password("password123").unwrap());
    }
}
