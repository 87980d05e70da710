// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for slideshow notices and recoverable failures.
//!
//! Notifications appear briefly in the bottom-right corner of the window
//! without blocking interaction with the gallery.
//!
//! # Components
//!
//! - [`notification`] - `Notification` payload with info/warning severity
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::info("notification-slideshow-started"));
//!
//! // In your view function, render toasts
//! let toast_overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
