//! Shadow-DOM rendering of the drop zone.
//!
//! The widget's markup and styles live in an open shadow root on the
//! host element, so host-page CSS cannot reach in and the widget's CSS
//! cannot leak out.

use dropzone_core::WidgetConfig;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlFormElement, HtmlInputElement, ShadowRoot};

use crate::error::WidgetError;

/// Id of the drop zone container.
pub const DROP_AREA_ID: &str = "drop-area";
/// Id of the multipart form.
pub const FORM_ID: &str = "upload-form";
/// Id of the caption heading.
pub const TITLE_ID: &str = "title-header";
/// Id (and form name) of the file picker.
pub const FILE_INPUT_ID: &str = "FileDetails";

const STYLE: &str = "
#drop-area {
    border: 2px dashed #ccc;
    border-radius: 20px;
    width: 480px;
    margin: 50px auto;
    padding: 20px;
}

#drop-area.highlight {
    border-color: purple;
}
";

const TEMPLATE: &str = r#"
<div id="drop-area">
    <form id="upload-form" enctype="multipart/form-data" method="post">
        <div class="panel">
            <div class="panel-heading">
                <h3 id="title-header" class="panel-title"></h3>
            </div>
            <p><abbr title="Click 'Choose File' button or drag and drop a file from your file manager">Help</abbr></p>
            <div class="panel-body">
                <input id="FileDetails" name="FileDetails" type="file" multiple>
            </div>
        </div>
    </form>
</div>
"#;

/// Handles to the rendered elements the widget wires listeners onto.
pub struct View {
    /// The drop zone; receives the highlight class.
    pub drop_area: Element,
    /// The file picker.
    pub file_input: HtmlInputElement,
}

/// Render the widget into `host`'s shadow root, creating the root on
/// first attachment and reusing it afterwards.
///
/// # Errors
///
/// Returns [`WidgetError::JsError`] if the shadow root cannot be
/// attached (e.g. `host` is an element type that forbids shadow roots),
/// or [`WidgetError::MissingElement`] if the template did not produce
/// an expected element.
pub fn render(host: &HtmlElement, config: &WidgetConfig) -> Result<View, WidgetError> {
    let root = shadow_root(host)?;
    root.set_inner_html(&format!("<style>{STYLE}</style>{TEMPLATE}"));

    find(&root, TITLE_ID)?.set_text_content(Some(config.caption()));

    // Without an action the form resolves to the current document.
    if let Some(url) = &config.upload_url {
        find_as::<HtmlFormElement>(&root, FORM_ID)?.set_action(url);
    }

    Ok(View {
        drop_area: find(&root, DROP_AREA_ID)?,
        file_input: find_as(&root, FILE_INPUT_ID)?,
    })
}

fn shadow_root(host: &HtmlElement) -> Result<ShadowRoot, WidgetError> {
    if let Some(root) = host.shadow_root() {
        return Ok(root);
    }
    let init = web_sys::ShadowRootInit::new(web_sys::ShadowRootMode::Open);
    Ok(host.attach_shadow(&init)?)
}

fn find(root: &ShadowRoot, id: &'static str) -> Result<Element, WidgetError> {
    root.get_element_by_id(id)
        .ok_or(WidgetError::MissingElement(id))
}

fn find_as<T: JsCast>(root: &ShadowRoot, id: &'static str) -> Result<T, WidgetError> {
    find(root, id)?
        .dyn_into::<T>()
        .map_err(|_| WidgetError::MissingElement(id))
}
