// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Confirmation identifier generation
//!
//! The authoritative record service normally hands back the confirmation
//! number. When it does not, the pipeline falls back to a locally generated
//! order number: a timestamp plus a random suffix. These are distinguishable
//! across near-simultaneous submissions but only best-effort unique.

use crate::clock::{Clock, SystemClock};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Default prefix for generated order numbers
pub const DEFAULT_ORDER_PREFIX: &str = "ORD";

/// Generates identifiers
pub trait IdGen: Clone + Send + Sync {
    fn next(&self) -> String;
}

/// Timestamp-plus-random order number generator for production use
///
/// Format: `<PREFIX>-<millis since epoch, base36>-<4 hex chars>`, uppercase.
#[derive(Clone, Debug)]
pub struct OrderNumberGen<C = SystemClock> {
    prefix: String,
    clock: C,
}

impl OrderNumberGen<SystemClock> {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_clock(prefix, SystemClock)
    }
}

impl Default for OrderNumberGen<SystemClock> {
    fn default() -> Self {
        Self::new(DEFAULT_ORDER_PREFIX)
    }
}

impl<C: Clock> OrderNumberGen<C> {
    pub fn with_clock(prefix: impl Into<String>, clock: C) -> Self {
        Self {
            prefix: prefix.into(),
            clock,
        }
    }
}

impl<C: Clock> IdGen for OrderNumberGen<C> {
    fn next(&self) -> String {
        let millis = self.clock.now().timestamp_millis().max(0) as u64;
        let random = uuid::Uuid::new_v4().simple().to_string();
        let suffix = random.get(..4).unwrap_or("0000");
        format!(
            "{}-{}-{}",
            self.prefix,
            to_base36(millis),
            suffix.to_ascii_uppercase()
        )
    }
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// Sequential ID generator for testing
#[derive(Clone)]
pub struct SequentialIdGen {
    prefix: String,
    counter: Arc<AtomicU64>,
}

impl SequentialIdGen {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Default for SequentialIdGen {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGen for SequentialIdGen {
    fn next(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        format!("{}-{}", self.prefix, n)
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
