//! Confirmation gate for runs that would write a large number of files.

/// Runs producing more artifacts than this require confirmation.
pub const CONFIRMATION_THRESHOLD: u64 = 10_000;

/// Decides whether an oversized run may proceed.
///
/// The core never reads the console itself; front ends supply an implementation
/// (an interactive prompt, or an unconditional yes for unattended runs).
pub trait ConfirmationGate {
    /// Returns `true` to proceed with writing `total` artifacts.
    fn confirm(&mut self, total: u64) -> bool;
}

impl<F> ConfirmationGate for F
where
    F: FnMut(u64) -> bool,
{
    fn confirm(&mut self, total: u64) -> bool {
        self(total)
    }
}

/// Approves every run without asking.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl ConfirmationGate for AutoConfirm {
    fn confirm(&mut self, _total: u64) -> bool {
        true
    }
}

/// Declines every run that reaches the gate.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysDecline;

impl ConfirmationGate for AlwaysDecline {
    fn confirm(&mut self, _total: u64) -> bool {
        false
    }
}

pub fn requires_confirmation(total: u64) -> bool {
    total > CONFIRMATION_THRESHOLD
}
