//! Registration of the `<drag-and-drop-upload>` custom element.
//!
//! Custom element classes must be JS classes extending `HTMLElement`,
//! so a small inline JS shim defines the class and forwards its
//! lifecycle callbacks into Rust. `connectedCallback` attaches an
//! [`UploadWidget`] and keeps the returned [`MountedWidget`] on the
//! element; `disconnectedCallback` frees it, which detaches every
//! listener.

use dropzone_core::FileSource;
use wasm_bindgen::prelude::*;
use web_sys::{Element, File, HtmlElement, HtmlInputElement};

use crate::error::WidgetError;
use crate::widget::UploadWidget;

/// Tag name the element is registered under.
pub const TAG_NAME: &str = "drag-and-drop-upload";

#[wasm_bindgen(inline_js = r#"
export function define_upload_element(tag, connect) {
    if (customElements.get(tag)) {
        return false;
    }
    class DragAndDropUpload extends HTMLElement {
        constructor() {
            super();
            this.__widget = null;
        }
        connectedCallback() {
            if (!this.__widget) {
                this.__widget = connect(this);
            }
        }
        disconnectedCallback() {
            if (this.__widget) {
                this.__widget.free();
                this.__widget = null;
            }
        }
        get url() {
            return this.__widget ? (this.__widget.url ?? null) : null;
        }
        get fileTypeAttribute() {
            return this.__widget ? this.__widget.fileTypeAttribute : "";
        }
        get fileInputElement() {
            return this.__widget ? this.__widget.fileInputElement : null;
        }
        get dropArea() {
            return this.__widget ? this.__widget.dropArea : null;
        }
        get config() {
            return this.__widget ? this.__widget.config : null;
        }
        handleFiles(files) {
            return this.__widget ? this.__widget.handleFiles(files) : 0;
        }
        uploadFile(file, index) {
            if (this.__widget) {
                this.__widget.uploadFile(file, index);
            }
        }
    }
    customElements.define(tag, DragAndDropUpload);
    return true;
}
"#)]
extern "C" {
    #[wasm_bindgen(catch)]
    fn define_upload_element(tag: &str, connect: &js_sys::Function) -> Result<bool, JsValue>;
}

/// An attached widget owned by its custom element.
///
/// Exposed to JS so the element class can hold it and forward script
/// calls; `free()` from JS drops it and detaches the widget.
#[wasm_bindgen]
pub struct MountedWidget {
    widget: UploadWidget,
}

#[wasm_bindgen]
impl MountedWidget {
    /// The `upload-url` attribute read at attachment.
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn url(&self) -> Option<String> {
        self.widget.config().upload_url.clone()
    }

    /// The `file-type` attribute read at attachment, or `""`.
    #[wasm_bindgen(getter = fileTypeAttribute)]
    #[must_use]
    pub fn file_type_attribute(&self) -> String {
        self.widget.config().file_type.clone()
    }

    /// The picker input inside the shadow root.
    #[wasm_bindgen(getter = fileInputElement)]
    #[must_use]
    pub fn file_input_element(&self) -> HtmlInputElement {
        self.widget.file_input().clone()
    }

    /// The drop zone inside the shadow root.
    #[wasm_bindgen(getter = dropArea)]
    #[must_use]
    pub fn drop_area(&self) -> Element {
        self.widget.drop_area().clone()
    }

    /// The configuration read at attachment, as a plain object.
    ///
    /// # Errors
    ///
    /// Throws if the configuration cannot be serialized.
    #[wasm_bindgen(getter)]
    pub fn config(&self) -> Result<JsValue, JsValue> {
        let json = serde_json::to_string(self.widget.config()).map_err(WidgetError::from)?;
        js_sys::JSON::parse(&json)
    }

    /// Upload every file in a `FileList` or array of `File`s.
    #[wasm_bindgen(js_name = handleFiles)]
    pub fn handle_files(&self, files: &JsValue) -> usize {
        let files = js_sys::Array::from(files);
        self.widget.handle_files(FileSource::Script, &files)
    }

    /// Upload one file at batch position `index`.
    #[wasm_bindgen(js_name = uploadFile)]
    pub fn upload_file(&self, file: File, index: usize) {
        self.widget.upload(file, index);
    }
}

/// Attach a widget to `host`, wrapped for the JS element class.
fn connect(host: HtmlElement) -> Result<JsValue, JsValue> {
    let widget = UploadWidget::attach(&host).map_err(|e| {
        tracing::warn!(error = %e, "could not attach upload widget");
        JsValue::from(e)
    })?;
    Ok(MountedWidget { widget }.into())
}

/// Register the element under [`TAG_NAME`].
///
/// Returns `Ok(false)` if the tag was already defined, so calling this
/// more than once is harmless.
///
/// # Errors
///
/// Returns [`WidgetError::JsError`] if `customElements.define` throws.
pub fn register() -> Result<bool, WidgetError> {
    define(TAG_NAME)
}

/// Register the element under a custom tag name.
///
/// # Errors
///
/// Returns [`WidgetError::JsError`] if `tag` is not a valid custom
/// element name or `customElements.define` otherwise throws.
pub fn define(tag: &str) -> Result<bool, WidgetError> {
    let callback = Closure::<dyn FnMut(HtmlElement) -> Result<JsValue, JsValue>>::new(connect);
    let defined = define_upload_element(tag, callback.as_ref().unchecked_ref())?;
    if defined {
        // Lives for the page lifetime, as does the element class.
        callback.forget();
        tracing::info!(tag, "registered upload element");
    }
    Ok(defined)
}
