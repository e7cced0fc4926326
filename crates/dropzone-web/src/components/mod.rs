//! Dioxus UI components for dropzone.

mod upload;

pub use upload::DropZone;
