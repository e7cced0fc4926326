//! The mounted upload widget: rendering, listeners, and dispatch wired
//! together for one host element.

use std::cell::Cell;
use std::rc::Rc;

use dropzone_core::{
    Dispatcher, DragEventKind, FileCollection, FileSource, HighlightState, WidgetConfig,
};
use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element, Event, File, HtmlElement, HtmlInputElement};

use crate::error::{WidgetError, document};
use crate::markup;
use crate::notify::{AlertNotifier, PickerSelection};
use crate::transport::XhrTransport;

type BrowserDispatcher = Dispatcher<XhrTransport, AlertNotifier, PickerSelection>;

/// State shared between the widget and its listener closures.
struct Shared {
    drop_area: Element,
    file_input: HtmlInputElement,
    highlight: Cell<HighlightState>,
    dispatcher: BrowserDispatcher,
}

impl Shared {
    fn on_drag(&self, kind: DragEventKind, event: &Event) {
        suppress(event);

        let next = self.highlight.get().after(kind);
        self.highlight.set(next);
        let classes = self.drop_area.class_list();
        let toggled = if next.is_highlighted() {
            classes.add_1(HighlightState::CLASS)
        } else {
            classes.remove_1(HighlightState::CLASS)
        };
        if let Err(e) = toggled {
            tracing::warn!(error = ?e, "could not toggle highlight class");
        }

        if kind.delivers_files() {
            let files = event
                .dyn_ref::<DragEvent>()
                .and_then(DragEvent::data_transfer)
                .and_then(|transfer| transfer.files());
            match files {
                Some(files) => {
                    self.dispatcher.handle_files(FileSource::Drop, &files);
                }
                None => tracing::debug!("drop carried no files"),
            }
        }
    }

    fn on_change(&self) {
        if let Some(files) = self.file_input.files() {
            self.dispatcher.handle_files(FileSource::Picker, &files);
        }
    }
}

/// Cancel the browser's default drag handling (navigating to the dropped
/// file) and keep the event from reaching outer handlers.
fn suppress(event: &Event) {
    event.prevent_default();
    event.stop_propagation();
}

/// A drag-and-drop upload widget attached to a host element.
///
/// Listeners live exactly as long as this value: dropping it (or calling
/// [`detach`](Self::detach)) removes every listener it registered on the
/// drop zone, the page body, and the picker.
pub struct UploadWidget {
    shared: Rc<Shared>,
    listeners: Vec<EventListener>,
}

impl UploadWidget {
    /// Read `host`'s attributes, render into its shadow root, and start
    /// listening.
    ///
    /// # Errors
    ///
    /// Returns a [`WidgetError`] if rendering fails or the document has
    /// no body.
    pub fn attach(host: &HtmlElement) -> Result<Self, WidgetError> {
        let config = WidgetConfig::from_attributes(|name| host.get_attribute(name));
        let view = markup::render(host, &config)?;
        let body = document()?.body().ok_or(WidgetError::NoGlobal("document.body"))?;

        let dispatcher = Dispatcher::new(
            config,
            XhrTransport,
            AlertNotifier,
            PickerSelection(view.file_input.clone()),
        );
        let shared = Rc::new(Shared {
            drop_area: view.drop_area,
            file_input: view.file_input,
            highlight: Cell::new(HighlightState::Idle),
            dispatcher,
        });

        // Drag listeners must not be passive or `preventDefault` is ignored.
        let mut listeners = Vec::with_capacity(2 * DragEventKind::ALL.len() + 1);
        for kind in DragEventKind::ALL {
            let zone = Rc::clone(&shared);
            listeners.push(EventListener::new_with_options(
                &shared.drop_area,
                kind.event_name(),
                EventListenerOptions::enable_prevent_default(),
                move |event| zone.on_drag(kind, event),
            ));
            listeners.push(EventListener::new_with_options(
                &body,
                kind.event_name(),
                EventListenerOptions::enable_prevent_default(),
                suppress,
            ));
        }
        let picker = Rc::clone(&shared);
        listeners.push(EventListener::new(&shared.file_input, "change", move |_| {
            picker.on_change();
        }));

        tracing::debug!(
            title = shared.dispatcher.config().caption(),
            url = shared.dispatcher.config().upload_url.as_deref().unwrap_or("<document>"),
            listeners = listeners.len(),
            "upload widget attached"
        );

        Ok(Self {
            shared,
            listeners,
        })
    }

    /// The configuration read at attachment.
    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        self.shared.dispatcher.config()
    }

    /// The drop zone inside the shadow root.
    #[must_use]
    pub fn drop_area(&self) -> &Element {
        &self.shared.drop_area
    }

    /// The file picker inside the shadow root.
    #[must_use]
    pub fn file_input(&self) -> &HtmlInputElement {
        &self.shared.file_input
    }

    /// Whether the drop zone is currently highlighted.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.shared.highlight.get().is_highlighted()
    }

    /// Upload every file in `files`, returning how many were dispatched.
    pub fn handle_files<C>(&self, source: FileSource, files: &C) -> usize
    where
        C: FileCollection<File = File> + ?Sized,
    {
        self.shared.dispatcher.handle_files(source, files)
    }

    /// Upload one file at batch position `index`.
    pub fn upload(&self, file: File, index: usize) {
        self.shared.dispatcher.upload(file, index);
    }

    /// Remove all listeners. Equivalent to dropping the widget.
    pub fn detach(self) {
        drop(self);
    }
}

impl Drop for UploadWidget {
    fn drop(&mut self) {
        tracing::debug!(listeners = self.listeners.len(), "upload widget detached");
        self.listeners.clear();
    }
}
