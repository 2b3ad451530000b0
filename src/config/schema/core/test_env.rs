use std::sync::{LazyLock, Mutex, MutexGuard};

pub(crate) static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Holds [`ENV_LOCK`] and restores every touched variable on drop.
pub(crate) struct ScopedEnv {
    saved: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl ScopedEnv {
    pub(crate) fn lock() -> Self {
        let lock = ENV_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Self {
            saved: Vec::new(),
            _lock: lock,
        }
    }

    pub(crate) fn set(mut self, key: &'static str, value: &str) -> Self {
        self.remember(key);
        // SAFETY: test-only; ENV_LOCK is held for the guard's lifetime.
        unsafe { std::env::set_var(key, value) };
        self
    }

    pub(crate) fn unset(mut self, key: &'static str) -> Self {
        self.remember(key);
        // SAFETY: test-only; ENV_LOCK is held for the guard's lifetime.
        unsafe { std::env::remove_var(key) };
        self
    }

    fn remember(&mut self, key: &'static str) {
        if !self.saved.iter().any(|(k, _)| *k == key) {
            self.saved.push((key, std::env::var(key).ok()));
        }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, previous) in self.saved.drain(..) {
            // SAFETY: restoration happens before the lock is released.
            unsafe {
                match previous {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
