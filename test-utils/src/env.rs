use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Acquires the process-wide environment lock.
///
/// Tests that read or write environment variables must hold this guard for
/// their entire duration; the test harness runs tests in parallel and the
/// environment is process-global.
pub fn lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Scoped environment variable override.
///
/// Sets (or removes) a variable on construction and restores the previous
/// value when dropped. Must only be used while holding the guard returned by
/// [`lock`].
pub struct EnvVar {
    name: String,
    previous: Option<String>,
}

impl EnvVar {
    /// Sets `name` to `value`, remembering the previous value for restore.
    pub fn set(name: &str, value: &str) -> Self {
        let previous = std::env::var(name).ok();
        std::env::set_var(name, value);
        Self {
            name: name.to_string(),
            previous,
        }
    }

    /// Removes `name` from the environment, remembering the previous value.
    pub fn unset(name: &str) -> Self {
        let previous = std::env::var(name).ok();
        std::env::remove_var(name);
        Self {
            name: name.to_string(),
            previous,
        }
    }
}

impl Drop for EnvVar {
    fn drop(&mut self) {
        match &self.previous {
            Some(value) => std::env::set_var(&self.name, value),
            None => std::env::remove_var(&self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that a scoped override restores the prior value on drop.
    ///
    /// Expected: variable holds the override inside the scope and the
    /// original value after it.
    #[test]
    fn restores_previous_value() {
        let _guard = lock();
        std::env::set_var("TEST_UTILS_ENV_VAR", "before");

        {
            let _var = EnvVar::set("TEST_UTILS_ENV_VAR", "after");
            assert_eq!(std::env::var("TEST_UTILS_ENV_VAR").unwrap(), "after");
        }

        assert_eq!(std::env::var("TEST_UTILS_ENV_VAR").unwrap(), "before");
        std::env::remove_var("TEST_UTILS_ENV_VAR");
    }

    /// Tests that unset removes the variable and drop restores it.
    ///
    /// Expected: variable absent inside the scope, present after it.
    #[test]
    fn unset_removes_and_restores() {
        let _guard = lock();
        std::env::set_var("TEST_UTILS_ENV_VAR_2", "kept");

        {
            let _var = EnvVar::unset("TEST_UTILS_ENV_VAR_2");
            assert!(std::env::var("TEST_UTILS_ENV_VAR_2").is_err());
        }

        assert_eq!(std::env::var("TEST_UTILS_ENV_VAR_2").unwrap(), "kept");
        std::env::remove_var("TEST_UTILS_ENV_VAR_2");
    }
}
