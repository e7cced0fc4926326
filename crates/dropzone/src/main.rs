use dioxus::prelude::*;
use dropzone_core::config::{ATTRIBUTES, DEFAULT_TITLE};
use dropzone_web::DropZone;

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Registers the upload element once, then shows a few differently
/// configured instances side by side.
fn app() -> Element {
    let registration = use_hook(|| match dropzone_web::register() {
        Ok(_) => None,
        Err(e) => {
            tracing::error!(error = %e, "could not register upload element");
            Some(e.to_string())
        }
    });

    let tag = format!("<{}>", dropzone_web::TAG_NAME);

    rsx! {
        header {
            h1 { "dropzone" }
            p {
                "Each panel below is an independent "
                code { "{tag}" }
                " element configured through the attributes "
                for (i, name) in ATTRIBUTES.iter().enumerate() {
                    if i > 0 { ", " }
                    code { "{name}" }
                }
                "."
            }
        }

        if let Some(ref err) = registration {
            p { class: "error", "{err}" }
        }

        main {
            DropZone {
                title: "Documents".to_string(),
                upload_url: "/upload".to_string(),
                file_type: "document".to_string(),
            }

            // No title attribute: falls back to the default caption.
            DropZone {
                upload_url: "/upload".to_string(),
                file_type: "image/png".to_string(),
            }

            // Empty title and no URL: posts back to this page.
            DropZone {
                title: String::new(),
            }
        }

        footer {
            p { "Panels without a title show '{DEFAULT_TITLE}'." }
        }
    }
}
