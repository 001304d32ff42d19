// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the external collaborators of a form pipeline

mod ack;
pub mod http;
pub mod notify;
pub mod record;
pub mod traced;
pub mod tracking;
pub mod view;

#[cfg(test)]
mod test_server;

pub use ack::Ack;
pub use http::HttpError;
pub use notify::{HttpNotifyAdapter, NoOpNotifyAdapter, NotifyAdapter, NotifyError};
pub use record::{HttpRecordAdapter, NoOpRecordAdapter, RecordAdapter, RecordError, RecordReceipt};
pub use traced::{TracedNotifyAdapter, TracedRecordAdapter, TracedTrackingAdapter};
pub use tracking::{HttpTrackingAdapter, NoOpTrackingAdapter, TrackingAdapter, TrackingError};
pub use view::{FormView, NoOpView, ViewError};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use notify::FakeNotifyAdapter;
#[cfg(any(test, feature = "test-support"))]
pub use record::FakeRecordAdapter;
#[cfg(any(test, feature = "test-support"))]
pub use tracking::FakeTrackingAdapter;
#[cfg(any(test, feature = "test-support"))]
pub use view::FakeView;
