//! dropzone-core: Pure logic for the drag-and-drop upload widget (sans-IO).
//!
//! Reads the widget configuration, tracks the drop zone's highlight
//! state, normalizes incoming file collections, builds one upload
//! request per file, and turns each response into a user-facing message.
//!
//! This crate has **no browser dependencies**. Sending requests, showing
//! messages, and clearing the picker go through the [`Transport`],
//! [`Notifier`], and [`Selection`] traits, implemented for the browser in
//! `dropzone-web`.

pub mod config;
pub mod dispatch;
pub mod drag;
pub mod intake;
pub mod upload;

pub use config::{DEFAULT_TITLE, WidgetConfig};
pub use dispatch::Dispatcher;
pub use drag::{DragEventKind, HighlightState};
pub use intake::{FileCollection, FileSource};
pub use upload::{
    Completion, FileHandle, FormField, Notifier, Selection, Transport, UploadOutcome,
    UploadRequest,
};
