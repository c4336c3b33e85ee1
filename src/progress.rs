//! Reporting procedure steps to whichever front end is running.

/// Receives one human-readable message per major step of a procedure.
/// A sink only observes; it cannot stop the procedure.
pub trait Progress {
    /// Report one step.
    fn step(&self, message: &str);
}

impl<F: Fn(&str)> Progress for F {
    fn step(&self, message: &str) {
        self(message);
    }
}

/// Line printed before the closing summary of a procedure.
pub const SEPARATOR: &str = "-----------------------------------";
