// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in `application::port`.
//!
//! - [`fs_source`]: Resolves images below an asset root on disk
//! - [`memory_source`]: Serves images from an in-memory map
//!
//! [`ImageSource`]: crate::application::port::ImageSource

pub mod fs_source;
pub mod memory_source;

pub use fs_source::FsImageSource;
pub use memory_source::MemoryImageSource;
