//! Pending Java exception handling.
//!
//! A failed JNI call can leave a Java exception pending on the thread. Any
//! further JNI call on that thread is then undefined behaviour until the
//! exception is cleared.

#![cfg_attr(not(target_os = "android"), allow(dead_code))]

use crate::PermissionError;

/// The exception calls of a JNI environment.
pub trait ExceptionEnv {
    fn exception_check(&self) -> Result<bool, PermissionError>;
    fn exception_describe(&self) -> Result<(), PermissionError>;
    fn exception_clear(&self) -> Result<(), PermissionError>;
}

#[cfg(target_os = "android")]
impl ExceptionEnv for jni::JNIEnv<'_> {
    fn exception_check(&self) -> Result<bool, PermissionError> {
        jni::JNIEnv::exception_check(self)
            .map_err(|e| PermissionError::Platform(format!("exception_check: {e}")))
    }

    fn exception_describe(&self) -> Result<(), PermissionError> {
        jni::JNIEnv::exception_describe(self)
            .map_err(|e| PermissionError::Platform(format!("exception_describe: {e}")))
    }

    fn exception_clear(&self) -> Result<(), PermissionError> {
        jni::JNIEnv::exception_clear(self)
            .map_err(|e| PermissionError::Platform(format!("exception_clear: {e}")))
    }
}

/// Log and clear the exception pending on `env`, if any.
///
/// Returns whether an exception was cleared.
pub fn clear_pending_exception(env: &impl ExceptionEnv) -> bool {
    match env.exception_check() {
        Ok(true) => {}
        Ok(false) => return false,
        Err(e) => {
            log::warn!("{e}");
            return false;
        }
    }

    // Prints the Java stack trace to logcat.
    if let Err(e) = env.exception_describe() {
        log::warn!("{e}");
    }
    match env.exception_clear() {
        Ok(()) => true,
        Err(e) => {
            log::error!("{e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Default)]
    struct FakeEnv {
        pending: Cell<bool>,
        calls: RefCell<Vec<&'static str>>,
    }

    impl ExceptionEnv for FakeEnv {
        fn exception_check(&self) -> Result<bool, PermissionError> {
            self.calls.borrow_mut().push("check");
            Ok(self.pending.get())
        }

        fn exception_describe(&self) -> Result<(), PermissionError> {
            self.calls.borrow_mut().push("describe");
            Ok(())
        }

        fn exception_clear(&self) -> Result<(), PermissionError> {
            self.calls.borrow_mut().push("clear");
            self.pending.set(false);
            Ok(())
        }
    }

    #[test]
    fn pending_exception_is_described_then_cleared() {
        let env = FakeEnv::default();
        env.pending.set(true);

        assert!(clear_pending_exception(&env));
        assert!(!env.pending.get());
        assert_eq!(*env.calls.borrow(), vec!["check", "describe", "clear"]);
    }

    #[test]
    fn nothing_pending_leaves_env_alone() {
        let env = FakeEnv::default();

        assert!(!clear_pending_exception(&env));
        assert_eq!(*env.calls.borrow(), vec!["check"]);
    }
}
