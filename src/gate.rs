//! Single-flight request gate
//!
//! At most one lookup request is outstanding at any time: a second
//! trigger while one is in flight is rejected without touching the
//! network. The flag is the only shared mutable state in the module.

use std::sync::atomic::{AtomicBool, Ordering};

/// Boolean in-flight gate, usable from `&self` behind `Arc`
#[derive(Debug, Default)]
pub struct RequestGate {
    in_flight: AtomicBool,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` without changing state when a lookup is already in
    /// flight; otherwise marks one in flight and returns `true`.
    pub fn try_acquire(&self) -> bool {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Unconditionally clears the in-flight flag. Must run exactly once
    /// per successful `try_acquire`; prefer [`RequestGate::guard`].
    pub fn release(&self) {
        self.in_flight.store(false, Ordering::Release);
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Acquire with scoped release: the returned guard releases on drop,
    /// covering every completion path including panics during
    /// presentation.
    pub fn guard(&self) -> Option<GateGuard<'_>> {
        if self.try_acquire() {
            Some(GateGuard { gate: self })
        } else {
            None
        }
    }
}

/// Releases the gate when dropped
#[derive(Debug)]
pub struct GateGuard<'a> {
    gate: &'a RequestGate,
}

impl Drop for GateGuard<'_> {
    fn drop(&mut self) {
        self.gate.release();
    }
}
