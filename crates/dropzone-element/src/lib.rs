//! WASM entry point that registers the `<drag-and-drop-upload>` element.
//!
//! A host page loads this module (e.g. the `wasm-pack build --target web`
//! output) and can then use the element in plain HTML:
//!
//! ```html
//! <drag-and-drop-upload data-title="Documents" upload-url="/upload" file-type="pdf">
//! </drag-and-drop-upload>
//! ```

use wasm_bindgen::prelude::*;

/// Module start: install the panic hook and log subscriber, then define
/// the element.
///
/// # Errors
///
/// Throws if `customElements.define` rejects the registration.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // Another module on the page may already own the global subscriber.
    let _ = tracing_wasm::try_set_as_global_default();

    let defined = dropzone_web::register()?;
    tracing::debug!(defined, tag = dropzone_web::TAG_NAME, "upload element module started");
    Ok(())
}
