//! Global library settings.
//!
//! [`Settings`] holds the **evaluation date**, the date that stands in for
//! "today" when contract terms are given as a day count without an explicit
//! start date.  It is a process-wide singleton accessed via a
//! `std::sync::OnceLock`.
//!
//! Thread safety: the evaluation date is stored behind a `Mutex` so that it
//! can be changed from any thread.  Tests that change it should use
//! [`ScopedEvaluationDate`] so the previous value is restored.

use std::sync::{Mutex, MutexGuard, OnceLock};

/// Process-wide settings used by optionprice-rs.
pub struct Settings {
    /// The current evaluation date as a serial day number.
    evaluation_date: Mutex<Option<i32>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    // A poisoned lock only means another thread panicked mid-write of an
    // `Option<i32>`; the value itself is always consistent.
    fn lock(&self) -> MutexGuard<'_, Option<i32>> {
        self.evaluation_date
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Return the current evaluation date serial number.
    ///
    /// Returns `None` if no evaluation date has been set, in which case
    /// callers use the local calendar date.
    pub fn evaluation_date_serial(&self) -> Option<i32> {
        *self.lock()
    }

    /// Set the evaluation date as a serial number.
    pub fn set_evaluation_date_serial(&self, serial: i32) {
        *self.lock() = Some(serial);
    }

    /// Clear the evaluation date, resetting it to "use today".
    pub fn reset_evaluation_date(&self) {
        *self.lock() = None;
    }
}

/// RAII guard that sets the evaluation date and restores the previous value
/// when dropped.
#[derive(Debug)]
pub struct ScopedEvaluationDate {
    previous: Option<i32>,
}

impl ScopedEvaluationDate {
    /// Set the evaluation date to `serial` for the lifetime of the guard.
    pub fn new(serial: i32) -> Self {
        let settings = Settings::instance();
        let previous = settings.evaluation_date_serial();
        settings.set_evaluation_date_serial(serial);
        Self { previous }
    }
}

impl Drop for ScopedEvaluationDate {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(serial) => settings.set_evaluation_date_serial(serial),
            None => settings.reset_evaluation_date(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_date_is_restored() {
        let settings = Settings::instance();
        let before = settings.evaluation_date_serial();
        {
            let _guard = ScopedEvaluationDate::new(45_000);
            assert_eq!(settings.evaluation_date_serial(), Some(45_000));
        }
        assert_eq!(settings.evaluation_date_serial(), before);
    }
}
