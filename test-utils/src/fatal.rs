use std::sync::{Arc, Mutex};

/// Records fatal-shutdown invocations instead of terminating the process.
///
/// The application's connector takes an injectable shutdown callback so the
/// fail-fast path can be observed in tests. This recorder produces such a
/// callback and exposes the exit code it was invoked with.
#[derive(Clone, Default)]
pub struct FatalRecorder {
    code: Arc<Mutex<Option<i32>>>,
}

impl FatalRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a callback suitable for passing where the application would
    /// normally pass `std::process::exit`.
    pub fn callback(&self) -> impl FnOnce(i32) + Send + 'static {
        let code = self.code.clone();
        move |exit_code| {
            *code.lock().unwrap() = Some(exit_code);
        }
    }

    /// The exit code the callback was invoked with, if it was invoked.
    pub fn exit_code(&self) -> Option<i32> {
        *self.code.lock().unwrap()
    }
}
