//! Lookup statistics
//!
//! Lightweight counters for monitoring the flow in production. No PII:
//! NIT values are never stored, only outcome counts and latency.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::{LookupOutcome, Source};

/// Atomic counters, shared behind `Arc`
#[derive(Debug, Default)]
pub struct LookupStats {
    lookups: AtomicU64,
    found_local: AtomicU64,
    found_remote: AtomicU64,
    not_found: AtomicU64,
    transport_errors: AtomicU64,
    validation_rejections: AtomicU64,
    gate_rejections: AtomicU64,
    total_latency_ms: AtomicU64,
}

impl LookupStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed request and its classified outcome
    pub fn record_outcome(&self, outcome: &LookupOutcome, latency: Duration) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.total_latency_ms
            .fetch_add(latency.as_millis() as u64, Ordering::Relaxed);
        match outcome {
            LookupOutcome::Found {
                source: Source::Local,
                ..
            } => self.found_local.fetch_add(1, Ordering::Relaxed),
            LookupOutcome::Found {
                source: Source::Remote,
                ..
            } => self.found_remote.fetch_add(1, Ordering::Relaxed),
            LookupOutcome::NotFound { .. } => self.not_found.fetch_add(1, Ordering::Relaxed),
            LookupOutcome::TransportError { .. } => {
                self.transport_errors.fetch_add(1, Ordering::Relaxed)
            }
        };
    }

    /// Trigger rejected by input validation, before any request
    pub fn record_validation_rejection(&self) {
        self.validation_rejections.fetch_add(1, Ordering::Relaxed);
    }

    /// Trigger ignored because a lookup was already in flight
    pub fn record_gate_rejection(&self) {
        self.gate_rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let lookups = self.lookups.load(Ordering::Relaxed);
        let total_latency_ms = self.total_latency_ms.load(Ordering::Relaxed);
        StatsSnapshot {
            lookups,
            found_local: self.found_local.load(Ordering::Relaxed),
            found_remote: self.found_remote.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            transport_errors: self.transport_errors.load(Ordering::Relaxed),
            validation_rejections: self.validation_rejections.load(Ordering::Relaxed),
            gate_rejections: self.gate_rejections.load(Ordering::Relaxed),
            avg_latency_ms: if lookups > 0 {
                total_latency_ms as f64 / lookups as f64
            } else {
                0.0
            },
        }
    }
}

/// Point-in-time view of the counters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub lookups: u64,
    pub found_local: u64,
    pub found_remote: u64,
    pub not_found: u64,
    pub transport_errors: u64,
    pub validation_rejections: u64,
    pub gate_rejections: u64,
    pub avg_latency_ms: f64,
}
