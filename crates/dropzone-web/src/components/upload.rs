//! Dioxus component that places an upload widget on the page.

use dioxus::prelude::*;

/// Props for the [`DropZone`] component.
///
/// Each prop maps to one element attribute; `None` leaves the attribute
/// off so the widget's default for an absent attribute applies.
#[derive(Props, Clone, PartialEq)]
pub struct DropZoneProps {
    /// Panel caption (`data-title`).
    title: Option<String>,
    /// Upload endpoint (`upload-url`).
    upload_url: Option<String>,
    /// File-type tag sent with every upload (`file-type`).
    file_type: Option<String>,
}

/// Renders a `<drag-and-drop-upload>` element.
///
/// The element must have been registered with
/// [`register`](crate::register) before it is mounted; until then the
/// browser treats it as an unknown inline element.
#[component]
pub fn DropZone(props: DropZoneProps) -> Element {
    rsx! {
        drag-and-drop-upload {
            "data-title": props.title,
            "upload-url": props.upload_url,
            "file-type": props.file_type,
        }
    }
}
