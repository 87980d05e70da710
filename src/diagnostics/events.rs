// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types and the log that records them.

use super::buffer::{BufferCapacity, CircularBuffer};
use crate::error::Error;
use std::fmt;
use std::time::Instant;

/// Gallery operation during which a failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Building the thumbnail grid at startup.
    LoadThumbnail,
    /// Opening an image from the grid.
    Select,
    /// Advancing to the next image (button or slideshow tick).
    Next,
    /// Returning to the grid.
    Back,
    /// Starting the slideshow from the grid.
    ToggleSlideshow,
    /// Decoding an image for the detail view.
    Display,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::LoadThumbnail => "load-thumbnail",
            Operation::Select => "select",
            Operation::Next => "next",
            Operation::Back => "back",
            Operation::ToggleSlideshow => "toggle-slideshow",
            Operation::Display => "display",
        };
        f.write_str(name)
    }
}

/// A recoverable failure, along with when and where it occurred.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock).
    pub timestamp: Instant,
    pub operation: Operation,
    pub error: Error,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(operation: Operation, error: Error) -> Self {
        Self {
            timestamp: Instant::now(),
            operation,
            error,
        }
    }
}

/// Bounded log of recoverable failures.
#[derive(Debug, Clone)]
pub struct DiagnosticsLog {
    events: CircularBuffer<DiagnosticEvent>,
}

impl Default for DiagnosticsLog {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsLog {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            events: CircularBuffer::new(capacity),
        }
    }

    /// Emits a console warning and keeps the event for later inspection.
    pub fn report(&mut self, operation: Operation, error: Error) {
        tracing::warn!(%operation, "Error: {error}");
        self.events.push(DiagnosticEvent::new(operation, error));
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&DiagnosticEvent> {
        self.events.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
