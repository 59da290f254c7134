use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tokio::task;

use crate::error::AppError;

/// Hashes a password with Argon2id and a random salt.
///
/// CPU-intensive, so it runs on a blocking thread to keep the request
/// executor responsive.
pub async fn hash_password(password: &str) -> Result<String, AppError> {
    let password = password.to_string();

    task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|err| AppError::InternalError(format!("Failed to hash password: {err}")))
    })
    .await
    .map_err(|err| AppError::InternalError(format!("Password hashing task failed: {err}")))?
}

/// Verifies a password against a stored PHC hash string.
///
/// Returns `Ok(false)` for a wrong password; only a malformed stored hash or
/// a failed blocking task produce an error.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let password = password.to_string();
    let hash = hash.to_string();

    task::spawn_blocking(move || {
        let parsed = PasswordHash::new(&hash)
            .map_err(|err| AppError::InternalError(format!("Stored password hash invalid: {err}")))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(err) => Err(AppError::InternalError(format!(
                "Password verification failed: {err}"
            ))),
        }
    })
    .await
    .map_err(|err| AppError::InternalError(format!("Password verification task failed: {err}")))?
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the hash-then-verify happy path.
    ///
    /// Expected: Ok(true) for the original password.
    #[tokio::test]
    async fn verifies_correct_password() {
        let hash = hash_password("correct horse battery staple").await.unwrap();

        assert!(verify_password("correct horse battery staple", &hash)
            .await
            .unwrap());
    }

    /// Tests that a wrong password is rejected without an error.
    ///
    /// Expected: Ok(false).
    #[tokio::test]
    async fn rejects_wrong_password() {
        let hash = hash_password("right").await.unwrap();

        assert!(!verify_password("wrong", &hash).await.unwrap());
    }

    /// Tests that a corrupted stored hash is an error, not a silent mismatch.
    ///
    /// Expected: Err, since the stored value is not a PHC string.
    #[tokio::test]
    async fn errors_on_malformed_hash() {
        let result = verify_password("anything", "not-a-phc-string").await;

        assert!(result.is_err());
    }
}
