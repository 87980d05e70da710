// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for recoverable failures.
//!
//! Every failure the gallery recovers from (an image that cannot be resolved or
//! decoded, a bad thumbnail index) is written to the console via
//! `tracing` and kept in a bounded in-memory [`DiagnosticsLog`] so the UI and
//! tests can inspect what went wrong without the process ever terminating.
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: A recorded failure with its originating operation

mod buffer;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use events::{DiagnosticEvent, DiagnosticsLog, Operation};
