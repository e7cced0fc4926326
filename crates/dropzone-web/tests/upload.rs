//! Browser tests for the upload path: request shape, alerts, and picker
//! clearing, with `XMLHttpRequest` and `alert` replaced by recorders.
//!
//! Run with `wasm-pack test --headless --firefox crates/dropzone-web`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use dropzone_web::UploadWidget;
use dropzone_web::markup::{DROP_AREA_ID, FILE_INPUT_ID};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{
    DataTransfer, DragEvent, DragEventInit, Event, File, FormData, HtmlElement, HtmlInputElement,
};

wasm_bindgen_test_configure!(run_in_browser);

/// Replaces `window.XMLHttpRequest` and `window.alert` and returns the
/// object both record into.
const INSTALL_RECORDER: &str = r#"
const recorder = { requests: [], alerts: [] };
class RecordingXhr {
    constructor() {
        this.headers = {};
        this.status = 0;
        this.statusText = "";
        this.onload = null;
        this.onerror = null;
        this.onabort = null;
        this.ontimeout = null;
        recorder.requests.push(this);
    }
    open(method, url, isAsync) {
        this.method = method;
        this.url = url;
        this.isAsync = isAsync;
    }
    setRequestHeader(name, value) {
        this.headers[name] = value;
    }
    send(body) {
        this.body = body;
    }
    respond(status, statusText) {
        this.status = status;
        this.statusText = statusText;
        if (this.onload) this.onload(new ProgressEvent("load"));
    }
    fail() {
        if (this.onerror) this.onerror(new ProgressEvent("error"));
    }
}
window.XMLHttpRequest = RecordingXhr;
window.alert = (message) => recorder.alerts.push(message);
return recorder;
"#;

#[wasm_bindgen]
extern "C" {
    type Recorder;

    #[wasm_bindgen(method, getter)]
    fn requests(this: &Recorder) -> js_sys::Array;

    #[wasm_bindgen(method, getter)]
    fn alerts(this: &Recorder) -> js_sys::Array;

    type RecordedXhr;

    #[wasm_bindgen(method, getter)]
    fn method(this: &RecordedXhr) -> String;

    #[wasm_bindgen(method, getter)]
    fn url(this: &RecordedXhr) -> String;

    #[wasm_bindgen(method, getter, js_name = isAsync)]
    fn is_async(this: &RecordedXhr) -> bool;

    #[wasm_bindgen(method, getter)]
    fn headers(this: &RecordedXhr) -> js_sys::Object;

    #[wasm_bindgen(method, getter)]
    fn body(this: &RecordedXhr) -> FormData;

    #[wasm_bindgen(method)]
    fn respond(this: &RecordedXhr, status: u16, status_text: &str);

    #[wasm_bindgen(method)]
    fn fail(this: &RecordedXhr);
}

impl Recorder {
    fn install() -> Self {
        js_sys::Function::new_no_args(INSTALL_RECORDER)
            .call0(&JsValue::NULL)
            .unwrap()
            .unchecked_into()
    }

    fn request(&self, index: u32) -> RecordedXhr {
        self.requests().get(index).unchecked_into()
    }

    fn alert_texts(&self) -> Vec<String> {
        self.alerts()
            .iter()
            .map(|alert| alert.as_string().unwrap())
            .collect()
    }
}

impl RecordedXhr {
    fn header(&self, name: &str) -> Option<String> {
        js_sys::Reflect::get(&self.headers(), &name.into())
            .unwrap()
            .as_string()
    }

    fn uploaded_file(&self) -> File {
        self.body().get("FileDetails").dyn_into().unwrap()
    }

    fn file_type(&self) -> Option<String> {
        self.body().get("FileType").as_string()
    }
}

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn host(attributes: &[(&str, &str)]) -> HtmlElement {
    let host: HtmlElement = document().create_element("div").unwrap().unchecked_into();
    for (name, value) in attributes {
        host.set_attribute(name, value).unwrap();
    }
    document().body().unwrap().append_child(&host).unwrap();
    host
}

fn file(name: &str) -> File {
    File::new_with_str_sequence(&js_sys::Array::of1(&"contents".into()), name).unwrap()
}

fn picker(host: &HtmlElement) -> HtmlInputElement {
    host.shadow_root()
        .unwrap()
        .get_element_by_id(FILE_INPUT_ID)
        .unwrap()
        .unchecked_into()
}

/// Put `files` into the picker and fire `change`, as a user selection does.
fn choose(input: &HtmlInputElement, files: &[File]) {
    let transfer = DataTransfer::new().unwrap();
    for file in files {
        transfer.items().add_with_file(file).unwrap();
    }
    input.set_files(transfer.files().as_ref());
    input.dispatch_event(&Event::new("change").unwrap()).unwrap();
}

/// Wait one macrotask so spawned completions have run.
async fn settle() {
    let tick = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback(&resolve)
            .unwrap();
    });
    JsFuture::from(tick).await.unwrap();
}

#[wasm_bindgen_test]
async fn upload_posts_multipart_form_to_configured_url() {
    let recorder = Recorder::install();
    let host = host(&[("upload-url", "/test-upload"), ("file-type", "image/png")]);
    let widget = UploadWidget::attach(&host).unwrap();

    widget.upload(file("a.png"), 0);

    assert_eq!(recorder.requests().length(), 1);
    let request = recorder.request(0);
    assert_eq!(request.method(), "POST");
    assert_eq!(request.url(), "/test-upload");
    assert!(request.is_async());
    assert_eq!(
        request.header("X-Requested-With").as_deref(),
        Some("XMLHttpRequest")
    );
    assert_eq!(request.uploaded_file().name(), "a.png");
    assert_eq!(request.file_type().as_deref(), Some("image/png"));

    request.respond(200, "OK");
    settle().await;
    assert_eq!(
        recorder.alert_texts(),
        vec!["File 'a.png' uploaded successfully.".to_owned()]
    );
}

#[wasm_bindgen_test]
fn absent_url_posts_to_document_with_empty_type() {
    let recorder = Recorder::install();
    let host = host(&[]);
    let widget = UploadWidget::attach(&host).unwrap();

    widget.upload(file("b.txt"), 0);

    let request = recorder.request(0);
    assert_eq!(request.url(), document().url().unwrap());
    assert_eq!(request.file_type().as_deref(), Some(""));
}

#[wasm_bindgen_test]
async fn picker_is_cleared_only_after_success() {
    let recorder = Recorder::install();
    let host = host(&[("upload-url", "/up")]);
    let _widget = UploadWidget::attach(&host).unwrap();
    let input = picker(&host);

    choose(&input, &[file("B.txt")]);
    assert_eq!(recorder.requests().length(), 1);
    let selected = input.value();
    assert!(!selected.is_empty());

    recorder.request(0).respond(500, "Internal Server Error");
    settle().await;
    assert_eq!(
        recorder.alert_texts(),
        vec!["Upload failed for 'B.txt': Internal Server Error".to_owned()]
    );
    assert_eq!(input.value(), selected);

    choose(&input, &[file("B.txt")]);
    recorder.request(1).respond(201, "Created");
    settle().await;
    assert_eq!(
        recorder.alert_texts().last().map(String::as_str),
        Some("File 'B.txt' uploaded successfully.")
    );
    assert_eq!(input.value(), "");
}

#[wasm_bindgen_test]
async fn transport_failures_keep_the_selection() {
    let recorder = Recorder::install();
    let host = host(&[("upload-url", "/up")]);
    let _widget = UploadWidget::attach(&host).unwrap();
    let input = picker(&host);

    choose(&input, &[file("c.bin"), file("d.bin")]);
    assert_eq!(recorder.requests().length(), 2);
    let selected = input.value();

    recorder.request(0).fail();
    // A response with status 0 never reached the server.
    recorder.request(1).respond(0, "");
    settle().await;

    assert_eq!(
        recorder.alert_texts(),
        vec![
            "Error uploading file 'c.bin'. Please try again.".to_owned(),
            "Error uploading file 'd.bin'. Please try again.".to_owned(),
        ]
    );
    assert_eq!(input.value(), selected);
}

#[wasm_bindgen_test]
async fn drop_uploads_every_dropped_file_in_order() {
    let recorder = Recorder::install();
    let host = host(&[("upload-url", "/drop")]);
    let widget = UploadWidget::attach(&host).unwrap();
    let drop_area = host
        .shadow_root()
        .unwrap()
        .get_element_by_id(DROP_AREA_ID)
        .unwrap();

    let transfer = DataTransfer::new().unwrap();
    transfer.items().add_with_file(&file("A.png")).unwrap();
    transfer.items().add_with_file(&file("B.txt")).unwrap();
    let init = DragEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_data_transfer(Some(&transfer));
    let drop = DragEvent::new_with_event_init_dict("drop", &init).unwrap();

    assert!(!drop_area.dispatch_event(&drop).unwrap());
    assert!(!widget.is_highlighted());

    assert_eq!(recorder.requests().length(), 2);
    assert_eq!(recorder.request(0).uploaded_file().name(), "A.png");
    assert_eq!(recorder.request(1).uploaded_file().name(), "B.txt");
    assert!((0..2).all(|i| recorder.request(i).url() == "/drop"));

    recorder.request(1).respond(500, "Internal Server Error");
    recorder.request(0).respond(200, "OK");
    settle().await;
    assert_eq!(
        recorder.alert_texts(),
        vec![
            "Upload failed for 'B.txt': Internal Server Error".to_owned(),
            "File 'A.png' uploaded successfully.".to_owned(),
        ]
    );
}
