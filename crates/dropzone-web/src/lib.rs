//! dropzone-web: Browser bindings for the dropzone upload widget.
//!
//! Renders the widget into a shadow root, wires drag/drop and picker
//! listeners, sends uploads with `XMLHttpRequest`, reports results with
//! `window.alert`, and registers the `<drag-and-drop-upload>` custom
//! element. Also provides a Dioxus component for placing the element.
//!
//! All functions in this crate require a browser environment
//! (`wasm32-unknown-unknown` target).

pub mod components;
pub mod element;
pub mod error;
pub mod markup;
pub mod notify;
pub mod transport;
pub mod widget;

pub use components::DropZone;
pub use element::{MountedWidget, TAG_NAME, define, register};
pub use error::WidgetError;
pub use transport::XhrTransport;
pub use widget::UploadWidget;
