//! Multipart uploads over `XMLHttpRequest`.
//!
//! [`XhrTransport`] opens and sends the request synchronously inside
//! [`Transport::send`], then awaits completion on a spawned local task.
//! Completion is bridged into Rust through a JS `Promise` that the
//! request's `load` / `error` / `abort` / `timeout` handlers resolve.

use std::cell::RefCell;
use std::rc::Rc;

use dropzone_core::upload::METHOD;
use dropzone_core::{
    Completion, FileCollection, FileHandle, FormField, Transport, UploadOutcome, UploadRequest,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileList, FormData, ProgressEvent, XmlHttpRequest};

use crate::error::{WidgetError, document};

impl FileHandle for File {
    fn name(&self) -> String {
        Self::name(self)
    }
}

impl FileCollection for FileList {
    type File = File;

    fn len(&self) -> usize {
        self.length() as usize
    }

    fn get(&self, index: usize) -> Option<File> {
        u32::try_from(index).ok().and_then(|i| self.item(i))
    }
}

/// A script-supplied array; entries that are not `File`s are skipped.
impl FileCollection for js_sys::Array {
    type File = File;

    fn len(&self) -> usize {
        self.length() as usize
    }

    fn get(&self, index: usize) -> Option<File> {
        let index = u32::try_from(index).ok()?;
        Self::get(self, index).dyn_into::<File>().ok()
    }
}

/// Sends each upload as its own asynchronous `XMLHttpRequest`.
#[derive(Debug, Clone, Copy, Default)]
pub struct XhrTransport;

impl Transport for XhrTransport {
    type File = File;

    fn send(&self, request: UploadRequest<File>, on_complete: Completion) {
        let name = request.file().name();
        let started = start(&request);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = match started {
                Ok(in_flight) => in_flight.finish().await,
                Err(e) => {
                    tracing::warn!(file = %name, error = %e, "could not start upload");
                    UploadOutcome::TransportError
                }
            };
            on_complete(outcome);
        });
    }
}

/// A sent request and the handlers waiting for it to settle.
struct InFlight {
    xhr: XmlHttpRequest,
    settled: js_sys::Promise,
    /// Kept alive until the request settles.
    _on_load: Closure<dyn FnMut(ProgressEvent)>,
    _on_failure: Closure<dyn FnMut(ProgressEvent)>,
}

impl InFlight {
    /// Wait for the request to settle and classify the result.
    #[allow(clippy::future_not_send)] // WASM is single-threaded; XmlHttpRequest is !Send
    async fn finish(self) -> UploadOutcome {
        let settled = wasm_bindgen_futures::JsFuture::from(self.settled).await;

        self.xhr.set_onload(None);
        self.xhr.set_onerror(None);
        self.xhr.set_onabort(None);
        self.xhr.set_ontimeout(None);

        match settled {
            Ok(loaded) if loaded.as_bool() == Some(true) => {
                let status = self.xhr.status().unwrap_or(0);
                let status_text = self.xhr.status_text().unwrap_or_default();
                UploadOutcome::from_response(status, &status_text)
            }
            _ => UploadOutcome::TransportError,
        }
    }
}

/// Open the request, attach the form body, and send it.
fn start(request: &UploadRequest<File>) -> Result<InFlight, WidgetError> {
    let url = match request.url() {
        Some(url) => url.to_owned(),
        None => document()?.url()?,
    };

    let xhr = XmlHttpRequest::new()?;
    xhr.open_with_async(METHOD, &url, true)?;
    for (name, value) in request.headers() {
        xhr.set_request_header(name, value)?;
    }

    let form = FormData::new()?;
    for field in request.fields() {
        match field {
            FormField::File { name, file } => {
                form.append_with_blob_and_filename(name, file, &file.name())?;
            }
            FormField::Text { name, value } => form.append_with_str(name, value)?,
        }
    }

    let (settled, resolve) = new_promise()?;
    let resolve_load = resolve.clone();
    let on_load = Closure::<dyn FnMut(ProgressEvent)>::new(move |_event: ProgressEvent| {
        resolve_load.call1(&JsValue::NULL, &JsValue::TRUE).ok();
    });
    let on_failure = Closure::<dyn FnMut(ProgressEvent)>::new(move |_event: ProgressEvent| {
        resolve.call1(&JsValue::NULL, &JsValue::FALSE).ok();
    });
    xhr.set_onload(Some(on_load.as_ref().unchecked_ref()));
    xhr.set_onerror(Some(on_failure.as_ref().unchecked_ref()));
    xhr.set_onabort(Some(on_failure.as_ref().unchecked_ref()));
    xhr.set_ontimeout(Some(on_failure.as_ref().unchecked_ref()));

    xhr.send_with_opt_form_data(Some(&form))?;

    Ok(InFlight {
        xhr,
        settled,
        _on_load: on_load,
        _on_failure: on_failure,
    })
}

/// Create a JS Promise along with its resolve function.
fn new_promise() -> Result<(js_sys::Promise, js_sys::Function), WidgetError> {
    let resolve = Rc::new(RefCell::new(None::<js_sys::Function>));
    let resolve_clone = Rc::clone(&resolve);

    let promise = js_sys::Promise::new(&mut move |res, _rej| {
        *resolve_clone.borrow_mut() = Some(res);
    });

    let resolve_fn = resolve
        .borrow_mut()
        .take()
        .ok_or_else(|| WidgetError::JsError("promise executor did not run".into()))?;

    Ok((promise, resolve_fn))
}
