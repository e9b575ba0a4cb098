//! Diagnostics sink capability.
//!
//! The codec reports non-fatal hazards (overwrites, signed casts, suspicious
//! all-zero payloads) through an injected sink instead of a global logger,
//! so the same call sites work on a constrained target with no logging
//! backend and on a host-class controller with a full one.

/// A sink for codec diagnostics.
///
/// Implementations must be cheap; the codec calls these on hot encode/decode
/// paths whenever it proceeds past a hazard instead of failing.
pub trait Diagnostics {
    /// Report a non-fatal hazard the codec proceeded past.
    fn warn(&self, message: &str);

    /// Report a rejected operation.
    fn error(&self, message: &str);
}

impl<T: Diagnostics + ?Sized> Diagnostics for &T {
    fn warn(&self, message: &str) {
        (**self).warn(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}

/// A no-op sink for resource-constrained targets.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// A sink forwarding to the [`log`] facade, for host-class targets.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }

    fn error(&self, message: &str) {
        log::error!("{message}");
    }
}

/// A sink capturing messages for assertions in tests.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingDiagnostics {
    pub(crate) warnings: std::cell::RefCell<Vec<String>>,
    pub(crate) errors: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl Diagnostics for RecordingDiagnostics {
    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}
