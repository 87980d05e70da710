// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! - [`BufferCapacity`]: Number of diagnostic events retained in memory

mod newtypes;

pub use newtypes::{buffer_capacity_bounds, BufferCapacity};
